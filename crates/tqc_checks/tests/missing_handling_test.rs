//! Tests to verify consistent handling of missing values across all checks.
//!
//! This test suite ensures that missing values behave the same everywhere:
//! - Kind checks skip missing values (missingness is completeness territory)
//! - Constraint checks skip missing values
//! - Numeric checks drop missing values without flagging them
//! - Completeness is the one check that counts them
//!
//! This prevents logical bugs where the same missing cell could pass one
//! check and fail another for the same reason.

use tqc_checks::{
    coerce_numeric, iqr_outliers, range_violations, Row, SuiteRunner, Table, Value, DEFAULT_IQR_K,
};
use tqc_core::{
    ColumnConstraint, ColumnKind, ColumnSpecBuilder, CompletenessCheck, ProfileBuilder,
    RunContext, SuiteChecks,
};

fn reading_row(id: i64, value: Value) -> Row {
    let mut row = Row::new();
    row.insert("id".to_string(), Value::Int(id));
    row.insert("value".to_string(), value);
    row
}

fn reading_table(values: Vec<Value>) -> Table {
    let rows = values
        .into_iter()
        .enumerate()
        .map(|(i, v)| reading_row(i as i64, v))
        .collect();
    Table::from_rows(vec!["id".to_string(), "value".to_string()], rows)
}

#[test]
fn test_missing_value_skips_kind_check() {
    let profile = ProfileBuilder::new("readings", "qa-team")
        .column(ColumnSpecBuilder::new("id").build())
        .column(
            ColumnSpecBuilder::new("value")
                .kind(ColumnKind::Numeric)
                .build(),
        )
        .build();

    let table = reading_table(vec![Value::Int(10), Value::Null]);

    let mut runner = SuiteRunner::new();
    let report = runner.run(&profile, &table, &RunContext::new());

    assert!(
        report.passed,
        "Missing value should not fail a kind check, errors: {:?}",
        report.errors
    );
}

#[test]
fn test_missing_value_skips_constraint_checks() {
    let profile = ProfileBuilder::new("readings", "qa-team")
        .column(ColumnSpecBuilder::new("id").build())
        .column(
            ColumnSpecBuilder::new("value")
                .constraint(ColumnConstraint::Bounds {
                    min: Some(0.0),
                    max: Some(100.0),
                })
                .constraint(ColumnConstraint::Pattern {
                    regex: r"^\d+$".to_string(),
                })
                .build(),
        )
        .build();

    let table = reading_table(vec![Value::Null, Value::Null]);

    let mut runner = SuiteRunner::new();
    let report = runner.run(&profile, &table, &RunContext::new());

    assert!(
        report.passed,
        "Missing values should skip every constraint, errors: {:?}",
        report.errors
    );
}

#[test]
fn test_missing_value_counts_against_completeness_only() {
    let profile = ProfileBuilder::new("readings", "qa-team")
        .column(ColumnSpecBuilder::new("id").build())
        .column(ColumnSpecBuilder::new("value").build())
        .checks(SuiteChecks {
            completeness: Some(CompletenessCheck {
                threshold: 0.75,
                columns: vec!["value".to_string()],
            }),
            ..Default::default()
        })
        .build();

    // 2 of 4 present: 50% completeness, below the 75% threshold
    let table = reading_table(vec![
        Value::Int(1),
        Value::Null,
        Value::Int(3),
        Value::Null,
    ]);

    let mut runner = SuiteRunner::new();
    let report = runner.run(&profile, &table, &RunContext::new());

    assert!(report.passed, "Completeness is advisory when not strict");
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("Completeness"));

    let strict = RunContext::new().with_strict(true);
    let report = runner.run(&profile, &table, &strict);
    assert!(!report.passed, "Strict mode promotes completeness to an error");
}

#[test]
fn test_missing_values_drop_out_of_numeric_checks() {
    let table = reading_table(vec![
        Value::Int(10),
        Value::Null,
        Value::Int(12),
        Value::Str("n/a".into()),
        Value::Int(11),
        Value::Int(10),
    ]);

    let coerced = coerce_numeric(&table, "value").unwrap();
    assert_eq!(coerced.valid_count(), 4);
    assert_eq!(coerced.already_missing, 1);
    assert_eq!(coerced.coerced, 1);

    let range = range_violations(&table, "value", Some(0.0), Some(100.0)).unwrap();
    assert!(range.passed());
    assert_eq!(range.missing, vec![1, 3]);

    let outliers = iqr_outliers(&table, "value", DEFAULT_IQR_K).unwrap();
    assert_eq!(outliers.valid_count, 4);
    assert!(outliers.indices.is_empty());
}

#[test]
fn test_absent_field_and_explicit_null_are_equivalent() {
    let mut explicit = Row::new();
    explicit.insert("id".to_string(), Value::Int(1));
    explicit.insert("value".to_string(), Value::Null);

    let mut absent = Row::new();
    absent.insert("id".to_string(), Value::Int(2));

    let table = Table::from_rows(
        vec!["id".to_string(), "value".to_string()],
        vec![explicit, absent],
    );

    let coerced = coerce_numeric(&table, "value").unwrap();
    assert_eq!(coerced.already_missing, 2);
    assert_eq!(coerced.valid_count(), 0);
}
