//! Missingness and duplicate detection.
//!
//! This module handles dataset-level quality checks:
//! - Missingness: per-column counts of null values
//! - Completeness: minimum non-missing ratio per column
//! - Duplicates: row-wise equality over all or a subset of columns

use std::collections::{BTreeMap, HashMap};

use tqc_core::{CompletenessCheck, Profile, UniquenessCheck};

use crate::{CheckError, Table, Value};

/// Runs missingness and duplicate checks on a table.
pub struct QualityChecker;

impl QualityChecker {
    /// Creates a new quality checker.
    pub fn new() -> Self {
        Self
    }

    /// Counts missing values per declared column.
    ///
    /// A column absent from a row counts as missing for that row.
    pub fn missing_counts(&self, table: &Table) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for column in table.columns() {
            let missing = table.column_values(column).filter(|v| v.is_null()).count();
            counts.insert(column.clone(), missing);
        }
        counts
    }

    /// Finds duplicate rows.
    ///
    /// Rows are compared over `subset` when given, otherwise over all
    /// declared columns. Missing markers are normalized first, so two
    /// missing cells compare equal. Returns the indices of second-and-later
    /// occurrences, in row order.
    pub fn duplicate_rows(&self, table: &Table, subset: Option<&[String]>) -> Vec<usize> {
        let columns: Vec<&String> = match subset {
            Some(cols) if !cols.is_empty() => cols.iter().collect(),
            _ => table.columns().iter().collect(),
        };

        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut duplicates = Vec::new();

        for (row_idx, row) in table.rows().enumerate() {
            let key = columns
                .iter()
                .map(|col| row.get(col.as_str()).unwrap_or(&Value::Null).duplicate_key())
                .collect::<Vec<_>>()
                .join("|");

            if seen.contains_key(&key) {
                duplicates.push(row_idx);
            } else {
                seen.insert(key, row_idx);
            }
        }

        duplicates
    }

    /// Validates all quality checks in a profile against a table.
    ///
    /// Returns a list of findings. An empty list indicates success.
    pub fn check(&self, profile: &Profile, table: &Table) -> Vec<CheckError> {
        let mut errors = Vec::new();

        let checks = match &profile.checks {
            Some(checks) => checks,
            None => return errors,
        };

        // Quality ratios are meaningless on empty tables
        if table.is_empty() {
            return errors;
        }

        if let Some(completeness) = &checks.completeness {
            errors.extend(self.check_completeness(completeness, table));
        }

        if let Some(uniqueness) = &checks.uniqueness {
            errors.extend(self.check_uniqueness(uniqueness, table));
        }

        errors
    }

    /// Validates completeness thresholds.
    fn check_completeness(&self, check: &CompletenessCheck, table: &Table) -> Vec<CheckError> {
        let mut errors = Vec::new();
        let total_rows = table.len();

        for column in &check.columns {
            let missing = table.column_values(column).filter(|v| v.is_null()).count();
            let ratio = (total_rows - missing) as f64 / total_rows as f64;

            if ratio < check.threshold {
                errors.push(CheckError::quality_check(format!(
                    "Completeness check failed for column '{}': {:.2}% < {:.2}% (threshold)",
                    column,
                    ratio * 100.0,
                    check.threshold * 100.0
                )));
            }
        }

        errors
    }

    /// Validates uniqueness requirements.
    fn check_uniqueness(&self, check: &UniquenessCheck, table: &Table) -> Vec<CheckError> {
        let subset = (!check.columns.is_empty()).then_some(check.columns.as_slice());
        let duplicates = self.duplicate_rows(table, subset);

        if duplicates.is_empty() {
            return Vec::new();
        }

        let scope = if check.columns.is_empty() {
            "all columns".to_string()
        } else {
            format!("[{}]", check.columns.join(", "))
        };

        vec![CheckError::quality_check(format!(
            "Uniqueness check failed over {}: {} duplicate row(s) at indices {:?}",
            scope,
            duplicates.len(),
            duplicates
        ))]
    }
}

impl Default for QualityChecker {
    fn default() -> Self {
        Self::new()
    }
}
