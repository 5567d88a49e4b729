//! Numeric range validation.
//!
//! Flags values outside a closed `[min, max]` interval, with a reason per
//! violation. Values that cannot be coerced to a number are reported
//! separately so a caller can tell "out of range" apart from "not a
//! number at all".

use std::fmt;

use crate::coerce::coerce_numeric;
use crate::{CheckError, Table};

/// Why a value failed the range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeReason {
    /// Value is below the minimum bound
    BelowMinimum,
    /// Value is above the maximum bound
    AboveMaximum,
}

impl fmt::Display for RangeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeReason::BelowMinimum => write!(f, "below minimum"),
            RangeReason::AboveMaximum => write!(f, "above maximum"),
        }
    }
}

/// One value outside the allowed interval.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeViolation {
    /// Row index of the offending value
    pub row: usize,
    /// The numeric value found there
    pub value: f64,
    /// Which bound it broke
    pub reason: RangeReason,
}

/// Result of a range check over one column.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeReport {
    /// Values outside the interval, in row order
    pub violations: Vec<RangeViolation>,
    /// Rows whose value was missing or not numeric
    pub missing: Vec<usize>,
    /// Lower bound, if any
    pub min: Option<f64>,
    /// Upper bound, if any
    pub max: Option<f64>,
}

impl RangeReport {
    /// True when every numeric value sits inside the interval.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Checks every value of a column against a closed interval.
///
/// Bounds are inclusive and each is optional; with both absent every
/// numeric value passes. Infinities participate normally, so `+inf`
/// breaks any finite maximum. Missing and non-numeric values never count
/// as violations; they are listed in `missing`.
///
/// # Errors
///
/// Returns `CheckError::UnknownColumn` if the table does not declare the
/// column.
pub fn range_violations(
    table: &Table,
    column: &str,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<RangeReport, CheckError> {
    let coerced = coerce_numeric(table, column)?;

    let mut violations = Vec::new();
    let mut missing = Vec::new();

    for (row, value) in coerced.values.iter().enumerate() {
        match value {
            None => missing.push(row),
            Some(v) => {
                if let Some(lo) = min {
                    if *v < lo {
                        violations.push(RangeViolation {
                            row,
                            value: *v,
                            reason: RangeReason::BelowMinimum,
                        });
                        continue;
                    }
                }
                if let Some(hi) = max {
                    if *v > hi {
                        violations.push(RangeViolation {
                            row,
                            value: *v,
                            reason: RangeReason::AboveMaximum,
                        });
                    }
                }
            }
        }
    }

    Ok(RangeReport {
        violations,
        missing,
        min,
        max,
    })
}
