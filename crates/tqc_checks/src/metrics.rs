//! Error metrics between paired columns.
//!
//! MAE and RMSE over aligned actual/predicted values. Pairs where either
//! side is missing or non-finite are dropped before the averages are
//! taken, and the number of dropped pairs is reported so silent data loss
//! stays visible.

use crate::coerce::coerce_numeric;
use crate::{CheckError, Table};

/// MAE and RMSE over the valid pairs of two aligned series.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorMetrics {
    /// Mean absolute error
    pub mae: f64,
    /// Root mean squared error
    pub rmse: f64,
    /// Pairs that entered the averages
    pub pairs_used: usize,
    /// Pairs dropped because either side was missing or non-finite
    pub pairs_dropped: usize,
}

/// Computes MAE and RMSE over two aligned series.
///
/// A pair participates only when both sides are finite; NaN and infinite
/// values drop the whole pair.
///
/// # Errors
///
/// Returns `CheckError::LengthMismatch` when the series differ in length
/// (checked before any pair is dropped), and `CheckError::EmptyMetricInput`
/// when no valid pair remains.
pub fn error_metrics(actual: &[f64], predicted: &[f64]) -> Result<ErrorMetrics, CheckError> {
    if actual.len() != predicted.len() {
        return Err(CheckError::LengthMismatch {
            actual: actual.len(),
            predicted: predicted.len(),
        });
    }

    let mut abs_sum = 0.0;
    let mut sq_sum = 0.0;
    let mut pairs_used = 0;

    for (a, p) in actual.iter().zip(predicted) {
        if !a.is_finite() || !p.is_finite() {
            continue;
        }
        let diff = a - p;
        abs_sum += diff.abs();
        sq_sum += diff * diff;
        pairs_used += 1;
    }

    if pairs_used == 0 {
        return Err(CheckError::EmptyMetricInput);
    }

    Ok(ErrorMetrics {
        mae: abs_sum / pairs_used as f64,
        rmse: (sq_sum / pairs_used as f64).sqrt(),
        pairs_used,
        pairs_dropped: actual.len() - pairs_used,
    })
}

/// Computes MAE and RMSE between two columns of a table.
///
/// Both columns are coerced to numbers first; a row where either column is
/// missing or non-finite drops that pair.
///
/// # Errors
///
/// Returns `CheckError::UnknownColumn` for a column the table does not
/// declare (with the available columns listed), and the same errors as
/// [`error_metrics`] otherwise.
pub fn error_metrics_columns(
    table: &Table,
    actual: &str,
    predicted: &str,
) -> Result<ErrorMetrics, CheckError> {
    let actual_col = coerce_numeric(table, actual)?;
    let predicted_col = coerce_numeric(table, predicted)?;

    let missing_marked = |values: &[Option<f64>]| -> Vec<f64> {
        values.iter().map(|v| v.unwrap_or(f64::NAN)).collect()
    };

    error_metrics(
        &missing_marked(&actual_col.values),
        &missing_marked(&predicted_col.values),
    )
}
