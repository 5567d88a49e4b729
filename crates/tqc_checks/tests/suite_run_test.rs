//! End-to-end suite runs over realistic sensor-reading data.

use std::io::Write;

use tqc_checks::{
    error_metrics, iqr_outliers, outlier_fraction, SuiteRunner, Table, DEFAULT_IQR_K,
};
use tqc_core::{
    ColumnConstraint, ColumnKind, ColumnSpecBuilder, CompletenessCheck, MetricKind, OutlierCheck,
    Profile, ProfileBuilder, RunContext, StabilityCheck, SuiteChecks, UniquenessCheck,
};

const READINGS_CSV: &str = "\
sensor_id,temperature,unit
s-001,21.0,celsius
s-002,22.0,celsius
s-003,21.5,celsius
s-004,,celsius
s-005,21.8,celsius
s-006,22.1,celsius
";

fn readings_profile() -> Profile {
    ProfileBuilder::new("sensor_readings", "data-platform")
        .column(
            ColumnSpecBuilder::new("sensor_id")
                .kind(ColumnKind::Text)
                .required(true)
                .constraint(ColumnConstraint::Pattern {
                    regex: r"^s-\d{3}$".to_string(),
                })
                .build(),
        )
        .column(
            ColumnSpecBuilder::new("temperature")
                .kind(ColumnKind::Numeric)
                .constraint(ColumnConstraint::Bounds {
                    min: Some(-40.0),
                    max: Some(60.0),
                })
                .build(),
        )
        .column(
            ColumnSpecBuilder::new("unit")
                .constraint(ColumnConstraint::AllowedValues {
                    values: vec!["celsius".to_string(), "fahrenheit".to_string()],
                })
                .build(),
        )
        .checks(SuiteChecks {
            completeness: Some(CompletenessCheck {
                threshold: 0.8,
                columns: vec!["temperature".to_string()],
            }),
            uniqueness: Some(UniquenessCheck {
                columns: vec!["sensor_id".to_string()],
            }),
            outliers: Some(OutlierCheck {
                columns: vec!["temperature".to_string()],
                k: 1.5,
            }),
            stability: None,
        })
        .build()
}

#[test]
fn test_clean_csv_passes_full_suite() {
    let table = Table::from_csv_str(READINGS_CSV).unwrap();
    let mut runner = SuiteRunner::new();

    let report = runner.run(&readings_profile(), &table, &RunContext::new());

    assert!(report.passed, "Expected pass, errors: {:?}", report.errors);
    assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
    assert_eq!(report.stats.rows_checked, 6);
    assert_eq!(report.stats.columns_checked, 3);
}

#[test]
fn test_dirty_csv_collects_all_findings() {
    let csv = "\
sensor_id,temperature,unit
s-001,21.5,celsius
s-001,95.0,kelvin
bad id,21.8,celsius
";
    let table = Table::from_csv_str(csv).unwrap();
    let mut runner = SuiteRunner::new();

    let report = runner.run(&readings_profile(), &table, &RunContext::new());

    assert!(!report.passed);
    assert!(report.errors.iter().any(|e| e.contains("above maximum")));
    assert!(report.errors.iter().any(|e| e.contains("bad id")));
    assert!(report.errors.iter().any(|e| e.contains("kelvin")));
    assert!(report.warnings.iter().any(|w| w.contains("Uniqueness")));
}

#[test]
fn test_extreme_reading_flagged_as_outlier() {
    let csv = "\
sensor_id,temperature,unit
s-001,1,celsius
s-002,2,celsius
s-003,2,celsius
s-004,3,celsius
s-005,100,celsius
";
    let table = Table::from_csv_str(csv).unwrap();

    let report = iqr_outliers(&table, "temperature", DEFAULT_IQR_K).unwrap();
    assert_eq!(report.indices, vec![4]);
    assert_eq!(report.lower, 0.5);
    assert_eq!(report.upper, 4.5);

    let fraction = outlier_fraction(&table, "temperature", DEFAULT_IQR_K).unwrap();
    assert!((fraction - 0.2).abs() < 1e-9);
}

#[test]
fn test_error_metric_reference_values() {
    let metrics = error_metrics(&[1.0, 2.0, 3.0], &[1.0, 2.0, 5.0]).unwrap();
    assert!((metrics.mae - 0.6667).abs() < 1e-4);
    assert!((metrics.rmse - 1.1547).abs() < 1e-4);
    assert!(metrics.rmse >= metrics.mae);
}

#[test]
fn test_stability_check_against_history_file() {
    let dir = tempfile::tempdir().unwrap();
    let history_path = dir.path().join("mae_history.json");

    let mut file = std::fs::File::create(&history_path).unwrap();
    write!(
        file,
        r#"[
            {{"value": 0.60, "recorded_at": "2026-08-01T00:00:00Z"}},
            {{"value": 0.65, "recorded_at": "2026-08-08T00:00:00Z"}},
            {{"value": 0.70, "recorded_at": "2026-08-15T00:00:00Z"}},
            {{"value": 0.62, "recorded_at": "2026-08-22T00:00:00Z"}}
        ]"#
    )
    .unwrap();

    let profile = ProfileBuilder::new("forecast_eval", "data-platform")
        .column(ColumnSpecBuilder::new("actual").kind(ColumnKind::Numeric).build())
        .column(ColumnSpecBuilder::new("predicted").kind(ColumnKind::Numeric).build())
        .checks(SuiteChecks {
            stability: Some(StabilityCheck {
                actual: "actual".to_string(),
                predicted: "predicted".to_string(),
                metric: MetricKind::Mae,
                history: history_path.to_string_lossy().into_owned(),
                max_sigma: 3.0,
            }),
            ..Default::default()
        })
        .build();

    // MAE of 0.65: well inside the historical band
    let stable_csv = "actual,predicted\n10.0,10.65\n20.0,19.35\n30.0,30.65\n40.0,39.35\n";
    let table = Table::from_csv_str(stable_csv).unwrap();
    let mut runner = SuiteRunner::new();
    let report = runner.run(&profile, &table, &RunContext::new());
    assert!(report.passed, "errors: {:?}", report.errors);
    assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);

    // MAE of 5.0: far outside the historical band, advisory warning
    let drifted_csv = "actual,predicted\n10.0,15.0\n20.0,25.0\n30.0,35.0\n40.0,45.0\n";
    let table = Table::from_csv_str(drifted_csv).unwrap();
    let report = runner.run(&profile, &table, &RunContext::new());
    assert!(report.passed, "advisory by default, errors: {:?}", report.errors);
    assert!(report.warnings.iter().any(|w| w.contains("Stability")));

    // Strict mode promotes the drift to an error
    let strict = RunContext::new().with_strict(true);
    let report = runner.run(&profile, &table, &strict);
    assert!(!report.passed);
}

#[test]
fn test_missing_history_file_surfaces_as_finding() {
    let profile = ProfileBuilder::new("forecast_eval", "data-platform")
        .column(ColumnSpecBuilder::new("actual").build())
        .column(ColumnSpecBuilder::new("predicted").build())
        .checks(SuiteChecks {
            stability: Some(StabilityCheck {
                actual: "actual".to_string(),
                predicted: "predicted".to_string(),
                metric: MetricKind::Rmse,
                history: "/nonexistent/history.json".to_string(),
                max_sigma: 3.0,
            }),
            ..Default::default()
        })
        .build();

    let table = Table::from_csv_str("actual,predicted\n1,1\n2,2\n").unwrap();
    let mut runner = SuiteRunner::new();
    let report = runner.run(&profile, &table, &RunContext::new());

    assert!(report.passed, "advisory path, errors: {:?}", report.errors);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("I/O error"));
}
