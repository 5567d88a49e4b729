//! Error types for check operations.

use thiserror::Error;

/// Errors that can occur while running checks.
///
/// Data-quality findings (a value out of range, a duplicate row) are
/// returned as structured results; a `CheckError` marks either a finding
/// severe enough to report or caller misuse such as referencing an unknown
/// column or passing mismatched metric inputs.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Schema check error
    #[error("Schema check failed: {0}")]
    Schema(String),

    /// Required column is absent from the table
    #[error("Required column '{0}' is missing")]
    MissingColumn(String),

    /// A check referenced a column the table does not have
    #[error("Column '{column}' not found in table. Available: [{available}]")]
    UnknownColumn {
        column: String,
        available: String,
    },

    /// Value kind does not match the declared column kind
    #[error("Kind mismatch for column '{column}': expected {expected}, found {actual} (row {row})")]
    KindMismatch {
        column: String,
        expected: String,
        actual: String,
        row: usize,
    },

    /// Constraint violation
    #[error("Constraint violation for column '{column}': {message}")]
    ConstraintViolation { column: String, message: String },

    /// Quality check failed
    #[error("Quality check failed: {0}")]
    QualityCheckFailed(String),

    /// Invalid regex pattern
    #[error("Invalid regex pattern for column '{column}': {error}")]
    InvalidRegex { column: String, error: String },

    /// Metric inputs differ in length
    #[error("Length mismatch: actual has {actual} values, predicted has {predicted}")]
    LengthMismatch { actual: usize, predicted: usize },

    /// No valid numeric pairs remain for a metric computation
    #[error("No valid numeric pairs to compute error metrics")]
    EmptyMetricInput,

    /// Metric history is too short for a stability comparison
    #[error("Metric history has {got} sample(s); at least {needed} required")]
    InsufficientHistory { needed: usize, got: usize },

    /// CSV read error
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Metric history file could not be parsed
    #[error("Metric history parse error: {0}")]
    HistoryFormat(#[from] serde_json::Error),

    /// Generic check error
    #[error("Check error: {0}")]
    General(String),
}

impl CheckError {
    /// Creates a new schema error.
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema(message.into())
    }

    /// Creates a new missing column error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn(column.into())
    }

    /// Creates a new unknown column error listing the available columns.
    pub fn unknown_column(column: impl Into<String>, available: &[String]) -> Self {
        Self::UnknownColumn {
            column: column.into(),
            available: available.join(", "),
        }
    }

    /// Creates a new kind mismatch error.
    pub fn kind_mismatch(
        column: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
        row: usize,
    ) -> Self {
        Self::KindMismatch {
            column: column.into(),
            expected: expected.into(),
            actual: actual.into(),
            row,
        }
    }

    /// Creates a new constraint violation error.
    pub fn constraint(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Creates a new quality check error.
    pub fn quality_check(message: impl Into<String>) -> Self {
        Self::QualityCheckFailed(message.into())
    }
}
