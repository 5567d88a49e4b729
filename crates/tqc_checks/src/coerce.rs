//! Numeric coercion and column diagnostics.
//!
//! Checks that operate on numbers (range, outliers, metrics) first coerce a
//! column to `Option<f64>`. Coercion never drops a value silently: anything
//! that fails to parse becomes an explicit missing marker and is counted.

use crate::{CheckError, Table, Value};

/// One column coerced to numbers.
#[derive(Debug, Clone)]
pub struct CoercedColumn {
    /// Per-row numeric values; `None` marks missing
    pub values: Vec<Option<f64>>,
    /// Values that became missing because they could not be parsed
    pub coerced: usize,
    /// Values that were already missing before coercion
    pub already_missing: usize,
}

impl CoercedColumn {
    /// Number of rows carrying a numeric value.
    pub fn valid_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Row indices whose value is missing after coercion.
    pub fn missing_rows(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.is_none().then_some(i))
            .collect()
    }
}

/// Coerces every value of a column to a number.
///
/// Ints and floats pass through, booleans map to 1.0/0.0, and strings are
/// parsed (the `inf`/`-inf` spellings parse to infinities, which are
/// preserved so downstream range and outlier checks can see them).
/// Unparseable values and NaN become `None` and count as coerced;
/// pre-existing nulls become `None` and count as already missing.
///
/// # Errors
///
/// Returns `CheckError::UnknownColumn` if the table does not declare the
/// column.
pub fn coerce_numeric(table: &Table, column: &str) -> Result<CoercedColumn, CheckError> {
    if !table.has_column(column) {
        return Err(CheckError::unknown_column(column, table.columns()));
    }

    let mut values = Vec::with_capacity(table.len());
    let mut coerced = 0;
    let mut already_missing = 0;

    for value in table.column_values(column) {
        match value {
            Value::Null => {
                already_missing += 1;
                values.push(None);
            }
            Value::Int(i) => values.push(Some(*i as f64)),
            Value::Float(f) => {
                if f.is_nan() {
                    // NaN is a missing marker, not a number
                    already_missing += 1;
                    values.push(None);
                } else {
                    values.push(Some(*f));
                }
            }
            Value::Bool(b) => values.push(Some(if *b { 1.0 } else { 0.0 })),
            Value::Str(s) => match s.trim().parse::<f64>() {
                Ok(f) if !f.is_nan() => values.push(Some(f)),
                _ => {
                    coerced += 1;
                    values.push(None);
                }
            },
        }
    }

    Ok(CoercedColumn {
        values,
        coerced,
        already_missing,
    })
}

/// Diagnostic summary of a column expected to be numeric.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericSummary {
    /// Values missing before coercion
    pub missing: usize,
    /// Empty or whitespace-only text values
    pub empty_strings: usize,
    /// Values that failed numeric coercion
    pub non_numeric: usize,
    /// Positive or negative infinities
    pub infinite: usize,
    /// Boolean values
    pub booleans: usize,
    /// Zero values, booleans included
    pub zeros: usize,
    /// Zero values, booleans excluded
    pub zeros_excluding_bools: usize,
    /// Strictly negative values
    pub negatives: usize,
}

/// Summarizes a column the way a reviewer would eyeball it: how much is
/// missing, what failed to parse, and where the zeros, negatives, and
/// infinities sit.
///
/// # Errors
///
/// Returns `CheckError::UnknownColumn` if the table does not declare the
/// column.
pub fn numeric_summary(table: &Table, column: &str) -> Result<NumericSummary, CheckError> {
    if !table.has_column(column) {
        return Err(CheckError::unknown_column(column, table.columns()));
    }

    let coerced = coerce_numeric(table, column)?;
    let mut summary = NumericSummary {
        missing: coerced.already_missing,
        non_numeric: coerced.coerced,
        ..Default::default()
    };

    for (value, number) in table.column_values(column).zip(&coerced.values) {
        let is_bool = matches!(value, Value::Bool(_));
        if is_bool {
            summary.booleans += 1;
        }
        if let Value::Str(s) = value {
            if s.trim().is_empty() {
                summary.empty_strings += 1;
            }
        }
        if let Some(n) = number {
            if n.is_infinite() {
                summary.infinite += 1;
            }
            if *n == 0.0 {
                summary.zeros += 1;
                if !is_bool {
                    summary.zeros_excluding_bools += 1;
                }
            }
            if *n < 0.0 {
                summary.negatives += 1;
            }
        }
    }

    Ok(summary)
}
