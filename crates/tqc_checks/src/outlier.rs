//! IQR outlier detection.
//!
//! Tukey's fences over one numeric column: values outside
//! `[Q1 - k*IQR, Q3 + k*IQR]` are flagged. Quantiles use linear
//! interpolation between order statistics, so results line up with the
//! common statistics-library convention. Missing and non-numeric values
//! are excluded before the quantiles are taken.

use crate::coerce::coerce_numeric;
use crate::{CheckError, Table};

/// Default fence multiplier.
pub const DEFAULT_IQR_K: f64 = 1.5;

/// Result of an IQR outlier scan over one column.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierReport {
    /// Row indices of flagged values, in row order
    pub indices: Vec<usize>,
    /// First quartile
    pub q1: f64,
    /// Third quartile
    pub q3: f64,
    /// Interquartile range
    pub iqr: f64,
    /// Lower fence
    pub lower: f64,
    /// Upper fence
    pub upper: f64,
    /// Fence multiplier used
    pub k: f64,
    /// Number of numeric values that participated
    pub valid_count: usize,
}

impl OutlierReport {
    /// Fraction of valid values flagged as outliers.
    pub fn fraction(&self) -> f64 {
        if self.valid_count == 0 {
            0.0
        } else {
            self.indices.len() as f64 / self.valid_count as f64
        }
    }
}

/// Quantile of a sorted slice with linear interpolation.
///
/// `q` is in `[0, 1]`. The target position is `q * (n - 1)`; when it falls
/// between two order statistics the result interpolates linearly between
/// them. The slice must be sorted and non-empty.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=1.0).contains(&q));

    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Scans a column for IQR outliers with fence multiplier `k`.
///
/// Missing and non-numeric values are dropped before the quantiles are
/// taken; they are never flagged. A column with no numeric values yields
/// an empty report rather than an error.
///
/// # Errors
///
/// Returns `CheckError::UnknownColumn` if the table does not declare the
/// column.
pub fn iqr_outliers(table: &Table, column: &str, k: f64) -> Result<OutlierReport, CheckError> {
    let coerced = coerce_numeric(table, column)?;

    let mut valid: Vec<f64> = coerced.values.iter().filter_map(|v| *v).collect();
    let valid_count = valid.len();

    if valid_count == 0 {
        return Ok(OutlierReport {
            indices: Vec::new(),
            q1: f64::NAN,
            q3: f64::NAN,
            iqr: f64::NAN,
            lower: f64::NAN,
            upper: f64::NAN,
            k,
            valid_count: 0,
        });
    }

    valid.sort_by(f64::total_cmp);
    let q1 = quantile(&valid, 0.25);
    let q3 = quantile(&valid, 0.75);
    let iqr = q3 - q1;
    let lower = q1 - k * iqr;
    let upper = q3 + k * iqr;

    let indices = coerced
        .values
        .iter()
        .enumerate()
        .filter_map(|(row, v)| match v {
            Some(v) if *v < lower || *v > upper => Some(row),
            _ => None,
        })
        .collect();

    Ok(OutlierReport {
        indices,
        q1,
        q3,
        iqr,
        lower,
        upper,
        k,
        valid_count,
    })
}

/// Fraction of a column's numeric values flagged as IQR outliers.
///
/// Returns 0.0 when the column has no numeric values.
pub fn outlier_fraction(table: &Table, column: &str, k: f64) -> Result<f64, CheckError> {
    Ok(iqr_outliers(table, column, k)?.fraction())
}
