//! Error types for check profiles.
//!
//! This module defines the errors that can occur when working with profile
//! definitions, as opposed to the data-quality findings produced when a
//! profile runs against actual data.

use thiserror::Error;

/// Result type for profile operations.
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Main error type for profile operations.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Profile definition is not usable
    #[error("Profile definition error: {0}")]
    Definition(String),

    /// Profile declares the same column twice
    #[error("Duplicate column '{0}' in profile")]
    DuplicateColumn(String),

    /// A check references a column the profile does not declare
    #[error("Check '{check}' references undeclared column '{column}'")]
    UnknownColumnRef {
        /// Name of the check
        check: String,
        /// Referenced column name
        column: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl ProfileError {
    /// Creates a new definition error.
    pub fn definition(message: impl Into<String>) -> Self {
        Self::Definition(message.into())
    }

    /// Creates a new unknown column reference error.
    pub fn unknown_column_ref(check: impl Into<String>, column: impl Into<String>) -> Self {
        Self::UnknownColumnRef {
            check: check.into(),
            column: column.into(),
        }
    }
}
