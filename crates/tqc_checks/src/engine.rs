//! Suite runner.
//!
//! This module provides the `SuiteRunner` that orchestrates all checks a
//! profile declares: schema, constraints, quality, outliers, and metric
//! stability.

use std::time::Instant;

use tqc_core::{MetricKind, Profile, RunContext, RunReport, RunStats, StabilityCheck};

use crate::metrics::error_metrics_columns;
use crate::outlier::iqr_outliers;
use crate::stability::{stability, MetricHistory};
use crate::{CheckError, ConstraintChecker, QualityChecker, SchemaChecker, Table};

/// Runs every check a profile declares and produces a run report.
///
/// # Example
///
/// ```rust
/// use tqc_checks::{SuiteRunner, Table};
/// use tqc_core::{ColumnSpecBuilder, ProfileBuilder, RunContext};
///
/// let profile = ProfileBuilder::new("readings", "qa-team")
///     .column(ColumnSpecBuilder::new("value").build())
///     .build();
/// let table = Table::from_csv_str("value\n1\n2\n").unwrap();
///
/// let mut runner = SuiteRunner::new();
/// let report = runner.run(&profile, &table, &RunContext::new());
///
/// if report.passed {
///     println!("All checks passed");
/// } else {
///     for error in &report.errors {
///         println!("Error: {}", error);
///     }
/// }
/// ```
pub struct SuiteRunner {
    schema_checker: SchemaChecker,
    constraint_checker: ConstraintChecker,
    quality_checker: QualityChecker,
}

impl SuiteRunner {
    /// Creates a new suite runner.
    pub fn new() -> Self {
        Self {
            schema_checker: SchemaChecker::new(),
            constraint_checker: ConstraintChecker::new(),
            quality_checker: QualityChecker::new(),
        }
    }

    /// Runs all checks a profile declares against a table.
    ///
    /// Schema findings always count as errors. Constraint findings count as
    /// errors. Quality, outlier, and stability findings are advisory: they
    /// land in `warnings` unless the context is strict, in which case they
    /// are errors. In strict mode the run stops after a schema failure.
    pub fn run(&mut self, profile: &Profile, table: &Table, context: &RunContext) -> RunReport {
        let start = Instant::now();
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut checks_evaluated = 0;

        // Sample the table if requested
        let table_to_check = if let Some(sample_size) = context.sample_size {
            table.sample(sample_size)
        } else {
            table.clone()
        };

        tracing::debug!(
            profile = %profile.name,
            rows = table_to_check.len(),
            strict = context.strict,
            "running check suite"
        );

        // 1. Schema and shape (always runs)
        let schema_errors = self.schema_checker.check(profile, &table_to_check);
        checks_evaluated += 1;
        errors.extend(schema_errors.iter().map(|e| e.to_string()));

        // If the schema fails in strict mode, stop here
        if context.strict && !errors.is_empty() {
            return self.build_report(profile, errors, warnings, &table_to_check, checks_evaluated, start);
        }

        // 2. Column constraints
        let constraint_errors = self.constraint_checker.check(profile, &table_to_check);
        checks_evaluated += 1;
        errors.extend(constraint_errors.iter().map(|e| e.to_string()));

        // Stop if in schema-only mode
        if context.schema_only {
            return self.build_report(profile, errors, warnings, &table_to_check, checks_evaluated, start);
        }

        // 3. Quality checks (advisory unless strict)
        let quality_errors = self.quality_checker.check(profile, &table_to_check);
        checks_evaluated += 1;
        let advisory = if context.strict { &mut errors } else { &mut warnings };
        advisory.extend(quality_errors.iter().map(|e| e.to_string()));

        // 4. Outlier scan (advisory unless strict)
        if let Some(outliers) = profile.checks.as_ref().and_then(|c| c.outliers.as_ref()) {
            checks_evaluated += 1;
            for column in &outliers.columns {
                match iqr_outliers(&table_to_check, column, outliers.k) {
                    Ok(report) if !report.indices.is_empty() => {
                        advisory.push(format!(
                            "Outlier check for column '{}': {} value(s) outside [{:.4}, {:.4}] at rows {:?}",
                            column,
                            report.indices.len(),
                            report.lower,
                            report.upper,
                            report.indices
                        ));
                    }
                    Ok(_) => {}
                    Err(err) => advisory.push(err.to_string()),
                }
            }
        }

        // 5. Metric stability (advisory unless strict)
        if let Some(check) = profile.checks.as_ref().and_then(|c| c.stability.as_ref()) {
            checks_evaluated += 1;
            match self.check_stability(check, &table_to_check) {
                Ok(Some(message)) => advisory.push(message),
                Ok(None) => {}
                Err(err) => advisory.push(err.to_string()),
            }
        }

        self.build_report(profile, errors, warnings, &table_to_check, checks_evaluated, start)
    }

    /// Computes the configured metric and compares it against its history.
    ///
    /// Returns a finding message when the metric is unstable, `None` when
    /// it sits within the threshold.
    fn check_stability(
        &self,
        check: &StabilityCheck,
        table: &Table,
    ) -> Result<Option<String>, CheckError> {
        let metrics = error_metrics_columns(table, &check.actual, &check.predicted)?;
        let value = match check.metric {
            MetricKind::Mae => metrics.mae,
            MetricKind::Rmse => metrics.rmse,
        };

        let history = MetricHistory::from_json_file(&check.history)?;
        let finding = stability(value, &history, check.max_sigma)?;

        tracing::debug!(
            metric = ?check.metric,
            value = finding.value,
            mean = finding.mean,
            sigma = finding.sigma_distance,
            "stability comparison"
        );

        if finding.stable {
            Ok(None)
        } else {
            Ok(Some(format!(
                "Stability check failed for {:?}: value {:.4} is {:.2} sigma from historical mean {:.4} (max {:.1})",
                check.metric, finding.value, finding.sigma_distance, finding.mean, check.max_sigma
            )))
        }
    }

    /// Builds a run report from collected errors and warnings.
    fn build_report(
        &self,
        profile: &Profile,
        errors: Vec<String>,
        warnings: Vec<String>,
        table: &Table,
        checks_evaluated: usize,
        start: Instant,
    ) -> RunReport {
        let duration_ms = start.elapsed().as_millis() as u64;

        RunReport {
            passed: errors.is_empty(),
            errors,
            warnings,
            stats: RunStats {
                rows_checked: table.len(),
                columns_checked: profile.columns.len(),
                checks_evaluated,
                duration_ms,
            },
        }
    }

    /// Validates only the profile definition itself (no data).
    ///
    /// Useful for checking that a profile is well-formed before running it
    /// against data.
    pub fn validate_definition(&self, profile: &Profile) -> RunReport {
        let start = Instant::now();
        let errors: Vec<String> = self
            .schema_checker
            .check_definition(profile)
            .iter()
            .map(|e| e.to_string())
            .collect();

        RunReport {
            passed: errors.is_empty(),
            errors,
            warnings: Vec::new(),
            stats: RunStats {
                rows_checked: 0,
                columns_checked: profile.columns.len(),
                checks_evaluated: 1,
                duration_ms: start.elapsed().as_millis() as u64,
            },
        }
    }
}

impl Default for SuiteRunner {
    fn default() -> Self {
        Self::new()
    }
}
