//! Column constraint validation.
//!
//! Applies the per-column constraints a profile declares: numeric bounds,
//! regex patterns, and allowed-value sets. Compiled regexes are cached so
//! a pattern is compiled once per run, not once per row.

use std::collections::HashMap;

use regex::Regex;
use tqc_core::{ColumnConstraint, Profile};

use crate::range::range_violations;
use crate::{CheckError, Table, Value};

/// Validates column constraints against a table.
pub struct ConstraintChecker {
    regex_cache: HashMap<String, Regex>,
}

impl ConstraintChecker {
    /// Creates a new constraint checker.
    pub fn new() -> Self {
        Self {
            regex_cache: HashMap::new(),
        }
    }

    /// Validates all declared constraints against a table.
    ///
    /// Returns a list of findings. An empty list indicates success.
    /// Columns absent from the table are skipped here; presence is the
    /// schema check's concern.
    pub fn check(&mut self, profile: &Profile, table: &Table) -> Vec<CheckError> {
        let mut errors = Vec::new();

        for spec in &profile.columns {
            let constraints = match &spec.constraints {
                Some(constraints) => constraints,
                None => continue,
            };
            if !table.has_column(&spec.name) {
                continue;
            }

            for constraint in constraints {
                match constraint {
                    ColumnConstraint::Bounds { min, max } => {
                        errors.extend(self.check_bounds(table, &spec.name, *min, *max));
                    }
                    ColumnConstraint::Pattern { regex } => {
                        errors.extend(self.check_pattern(table, &spec.name, regex));
                    }
                    ColumnConstraint::AllowedValues { values } => {
                        errors.extend(self.check_allowed_values(table, &spec.name, values));
                    }
                }
            }
        }

        errors
    }

    fn check_bounds(
        &self,
        table: &Table,
        column: &str,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Vec<CheckError> {
        let report = match range_violations(table, column, min, max) {
            Ok(report) => report,
            Err(err) => return vec![err],
        };

        report
            .violations
            .into_iter()
            .map(|v| {
                CheckError::constraint(
                    column,
                    format!("value {} at row {} is {}", v.value, v.row, v.reason),
                )
            })
            .collect()
    }

    fn check_pattern(&mut self, table: &Table, column: &str, pattern: &str) -> Vec<CheckError> {
        if !self.regex_cache.contains_key(pattern) {
            match Regex::new(pattern) {
                Ok(compiled) => {
                    self.regex_cache.insert(pattern.to_string(), compiled);
                }
                Err(err) => {
                    return vec![CheckError::InvalidRegex {
                        column: column.to_string(),
                        error: err.to_string(),
                    }];
                }
            }
        }
        let regex = &self.regex_cache[pattern];

        let mut errors = Vec::new();
        for (row, value) in table.column_values(column).enumerate() {
            match value {
                Value::Null => continue,
                Value::Str(s) => {
                    if !regex.is_match(s) {
                        errors.push(CheckError::constraint(
                            column,
                            format!("value '{s}' at row {row} does not match pattern '{pattern}'"),
                        ));
                    }
                }
                other => {
                    errors.push(CheckError::constraint(
                        column,
                        format!(
                            "pattern constraint expects text, found {} at row {row}",
                            other.kind_name()
                        ),
                    ));
                }
            }
        }
        errors
    }

    fn check_allowed_values(
        &self,
        table: &Table,
        column: &str,
        allowed: &[String],
    ) -> Vec<CheckError> {
        let mut errors = Vec::new();
        for (row, value) in table.column_values(column).enumerate() {
            if value.is_null() {
                continue;
            }
            let text = display_form(value);
            if !allowed.iter().any(|a| a == &text) {
                errors.push(CheckError::constraint(
                    column,
                    format!("value '{text}' at row {row} is not in the allowed set"),
                ));
            }
        }
        errors
    }
}

impl Default for ConstraintChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Text form a value takes when compared against an allowed-value set.
fn display_form(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Str(s) => s.clone(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Bool(b) => b.to_string(),
    }
}
