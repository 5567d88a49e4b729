//! Schema and shape checks.
//!
//! This module handles validation of a table's shape against a profile:
//! required column presence, row count, and per-row kind checks for
//! columns with a declared kind.

use std::collections::HashSet;

use tqc_core::{ColumnKind, Profile};

use crate::{CheckError, Table, Value};

/// Shape summary of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeReport {
    /// Number of rows
    pub row_count: usize,
    /// Number of declared columns
    pub column_count: usize,
    /// True when the table has no rows
    pub empty: bool,
}

/// Validates the schema and shape of a table against a profile.
///
/// Missing required columns are reported as structured findings rather
/// than hard failures, so the remaining checks can still run.
pub struct SchemaChecker;

impl SchemaChecker {
    /// Creates a new schema checker.
    pub fn new() -> Self {
        Self
    }

    /// Returns the required columns absent from the table.
    ///
    /// The result contains exactly the names in `required` that do not
    /// appear in the table's column set, in the order given.
    pub fn missing_columns(&self, table: &Table, required: &[String]) -> Vec<String> {
        let present: HashSet<&str> = table.columns().iter().map(String::as_str).collect();
        required
            .iter()
            .filter(|name| !present.contains(name.as_str()))
            .cloned()
            .collect()
    }

    /// Reports the table's shape.
    pub fn shape(&self, table: &Table) -> ShapeReport {
        ShapeReport {
            row_count: table.len(),
            column_count: table.columns().len(),
            empty: table.is_empty(),
        }
    }

    /// Validates a table against the profile schema.
    ///
    /// Returns a list of findings. An empty list indicates success.
    pub fn check(&self, profile: &Profile, table: &Table) -> Vec<CheckError> {
        let mut errors = Vec::new();

        let required: Vec<String> = profile
            .columns
            .iter()
            .filter(|c| c.required)
            .map(|c| c.name.clone())
            .collect();

        for name in self.missing_columns(table, &required) {
            errors.push(CheckError::missing_column(name));
        }

        if table.is_empty() {
            errors.push(CheckError::schema("Table has no rows"));
            return errors;
        }

        // Kind checks only make sense for columns that are present
        for spec in &profile.columns {
            if spec.kind == ColumnKind::Any || !table.has_column(&spec.name) {
                continue;
            }
            for (row_idx, value) in table.column_values(&spec.name).enumerate() {
                if value.is_null() {
                    continue; // Missingness is the completeness check's concern
                }
                if !kind_matches(spec.kind, value) {
                    errors.push(CheckError::kind_mismatch(
                        &spec.name,
                        spec.kind.name(),
                        value.kind_name(),
                        row_idx,
                    ));
                }
            }
        }

        errors
    }

    /// Validates the profile definition itself.
    ///
    /// Useful for checking that a profile is well-formed before running it
    /// against data.
    pub fn check_definition(&self, profile: &Profile) -> Vec<CheckError> {
        let mut errors = Vec::new();

        if profile.columns.is_empty() {
            errors.push(CheckError::schema("Profile has no columns defined"));
        }

        let mut seen = HashSet::new();
        for spec in &profile.columns {
            if !seen.insert(&spec.name) {
                errors.push(CheckError::schema(format!(
                    "Duplicate column name: {}",
                    spec.name
                )));
            }
        }

        // Suite checks must reference declared columns
        if let Some(checks) = &profile.checks {
            let declared: HashSet<&str> =
                profile.columns.iter().map(|c| c.name.as_str()).collect();
            let mut referenced: Vec<(&str, &str)> = Vec::new();

            if let Some(completeness) = &checks.completeness {
                referenced.extend(completeness.columns.iter().map(|c| ("completeness", c.as_str())));
            }
            if let Some(uniqueness) = &checks.uniqueness {
                referenced.extend(uniqueness.columns.iter().map(|c| ("uniqueness", c.as_str())));
            }
            if let Some(outliers) = &checks.outliers {
                referenced.extend(outliers.columns.iter().map(|c| ("outliers", c.as_str())));
            }
            if let Some(stability) = &checks.stability {
                referenced.push(("stability", stability.actual.as_str()));
                referenced.push(("stability", stability.predicted.as_str()));
            }

            for (check, column) in referenced {
                if !declared.contains(column) {
                    errors.push(CheckError::schema(format!(
                        "Check '{check}' references undeclared column '{column}'"
                    )));
                }
            }
        }

        errors
    }
}

impl Default for SchemaChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a value satisfies a declared column kind.
fn kind_matches(kind: ColumnKind, value: &Value) -> bool {
    match kind {
        ColumnKind::Numeric => matches!(value, Value::Int(_) | Value::Float(_)),
        ColumnKind::Text => matches!(value, Value::Str(_)),
        ColumnKind::Bool => matches!(value, Value::Bool(_)),
        ColumnKind::Any => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Row;
    use pretty_assertions::assert_eq;
    use tqc_core::{ColumnSpecBuilder, ProfileBuilder, StabilityCheck, SuiteChecks};

    fn test_profile() -> Profile {
        ProfileBuilder::new("test_profile", "qa-team")
            .column(
                ColumnSpecBuilder::new("id")
                    .kind(ColumnKind::Text)
                    .required(true)
                    .build(),
            )
            .column(
                ColumnSpecBuilder::new("value")
                    .kind(ColumnKind::Numeric)
                    .required(true)
                    .build(),
            )
            .column(ColumnSpecBuilder::new("note").required(false).build())
            .build()
    }

    fn row(id: &str, value: Value) -> Row {
        let mut row = Row::new();
        row.insert("id".to_string(), Value::Str(id.to_string()));
        row.insert("value".to_string(), value);
        row
    }

    #[test]
    fn test_missing_columns_exact_set() {
        let checker = SchemaChecker::new();
        let table = Table::new(vec!["id".to_string(), "value".to_string()]);

        let required = vec![
            "id".to_string(),
            "value".to_string(),
            "timestamp".to_string(),
            "unit".to_string(),
        ];
        let missing = checker.missing_columns(&table, &required);
        assert_eq!(missing, vec!["timestamp".to_string(), "unit".to_string()]);
    }

    #[test]
    fn test_missing_columns_none_missing() {
        let checker = SchemaChecker::new();
        let table = Table::new(vec!["id".to_string()]);
        assert!(checker.missing_columns(&table, &["id".to_string()]).is_empty());
    }

    #[test]
    fn test_shape_empty_table() {
        let checker = SchemaChecker::new();
        let table = Table::new(vec!["id".to_string()]);
        let shape = checker.shape(&table);
        assert_eq!(
            shape,
            ShapeReport {
                row_count: 0,
                column_count: 1,
                empty: true
            }
        );
    }

    #[test]
    fn test_check_flags_empty_table() {
        let checker = SchemaChecker::new();
        let profile = test_profile();
        let table = Table::new(vec!["id".to_string(), "value".to_string()]);

        let errors = checker.check(&profile, &table);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], CheckError::Schema(_)));
    }

    #[test]
    fn test_check_missing_required_column() {
        let checker = SchemaChecker::new();
        let profile = test_profile();

        let mut table = Table::new(vec!["id".to_string()]);
        let mut r = Row::new();
        r.insert("id".to_string(), Value::Str("a".into()));
        table.push_row(r);

        let errors = checker.check(&profile, &table);
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], CheckError::MissingColumn(c) if c == "value"));
    }

    #[test]
    fn test_check_optional_column_absent_is_fine() {
        let checker = SchemaChecker::new();
        let profile = test_profile();

        let mut table = Table::new(vec!["id".to_string(), "value".to_string()]);
        table.push_row(row("a", Value::Int(1)));

        let errors = checker.check(&profile, &table);
        assert!(errors.is_empty(), "Expected no errors, got: {errors:?}");
    }

    #[test]
    fn test_check_kind_mismatch() {
        let checker = SchemaChecker::new();
        let profile = test_profile();

        let mut table = Table::new(vec!["id".to_string(), "value".to_string()]);
        table.push_row(row("a", Value::Str("not a number".into())));

        let errors = checker.check(&profile, &table);
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], CheckError::KindMismatch { row, .. } if *row == 0));
    }

    #[test]
    fn test_check_null_skips_kind_check() {
        let checker = SchemaChecker::new();
        let profile = test_profile();

        let mut table = Table::new(vec!["id".to_string(), "value".to_string()]);
        table.push_row(row("a", Value::Null));

        let errors = checker.check(&profile, &table);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_definition_valid() {
        let checker = SchemaChecker::new();
        let errors = checker.check_definition(&test_profile());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_definition_no_columns() {
        let checker = SchemaChecker::new();
        let profile = ProfileBuilder::new("empty", "qa-team").build();
        let errors = checker.check_definition(&profile);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_definition_duplicate_columns() {
        let checker = SchemaChecker::new();
        let profile = ProfileBuilder::new("dup", "qa-team")
            .column(ColumnSpecBuilder::new("value").build())
            .column(ColumnSpecBuilder::new("value").build())
            .build();
        let errors = checker.check_definition(&profile);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_definition_undeclared_check_reference() {
        let checker = SchemaChecker::new();
        let profile = ProfileBuilder::new("bad_ref", "qa-team")
            .column(ColumnSpecBuilder::new("actual").build())
            .checks(SuiteChecks {
                stability: Some(StabilityCheck {
                    actual: "actual".to_string(),
                    predicted: "predicted".to_string(),
                    metric: tqc_core::MetricKind::Mae,
                    history: "history.json".to_string(),
                    max_sigma: 3.0,
                }),
                ..Default::default()
            })
            .build();

        let errors = checker.check_definition(&profile);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("predicted"));
    }
}
