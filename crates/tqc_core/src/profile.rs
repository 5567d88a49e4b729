//! Check profile types and structures.
//!
//! This module contains the core types for declaring a check profile: the
//! expected columns of a tabular dataset and the quality checks to run
//! against it.

use serde::{Deserialize, Serialize};

/// A check profile describing the expected shape and quality of a dataset.
///
/// A `Profile` is the main entry point for declaring quality checks. It
/// carries the declared column set, per-column constraints, and the
/// dataset-level checks to evaluate.
///
/// # Example
///
/// ```rust
/// use tqc_core::{ColumnKind, ColumnSpec, Profile};
///
/// let profile = Profile {
///     version: "1.0.0".to_string(),
///     name: "sensor_readings".to_string(),
///     owner: "qa-team".to_string(),
///     description: Some("Hourly sensor export".to_string()),
///     columns: vec![ColumnSpec {
///         name: "temperature".to_string(),
///         kind: ColumnKind::Numeric,
///         required: true,
///         description: None,
///         constraints: None,
///     }],
///     checks: None,
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Semantic version of the profile (e.g., "1.0.0")
    pub version: String,

    /// Unique name identifying this profile
    pub name: String,

    /// Team or individual responsible for this profile
    pub owner: String,

    /// Human-readable description of the dataset
    pub description: Option<String>,

    /// Declared columns, in expected order
    pub columns: Vec<ColumnSpec>,

    /// Optional dataset-level quality checks
    pub checks: Option<SuiteChecks>,
}

impl Profile {
    /// Checks that the profile definition is internally consistent.
    ///
    /// Returns the first problem found: an empty column set, a duplicate
    /// column name, or a check referencing a column the profile does not
    /// declare.
    pub fn validate(&self) -> crate::Result<()> {
        use crate::ProfileError;

        if self.columns.is_empty() {
            return Err(ProfileError::definition("profile declares no columns"));
        }

        let mut seen = std::collections::HashSet::new();
        for spec in &self.columns {
            if !seen.insert(spec.name.as_str()) {
                return Err(ProfileError::DuplicateColumn(spec.name.clone()));
            }
        }

        if let Some(checks) = &self.checks {
            let declared = &seen;
            if let Some(completeness) = &checks.completeness {
                for column in &completeness.columns {
                    if !declared.contains(column.as_str()) {
                        return Err(ProfileError::unknown_column_ref("completeness", column));
                    }
                }
            }
            if let Some(uniqueness) = &checks.uniqueness {
                for column in &uniqueness.columns {
                    if !declared.contains(column.as_str()) {
                        return Err(ProfileError::unknown_column_ref("uniqueness", column));
                    }
                }
            }
            if let Some(outliers) = &checks.outliers {
                for column in &outliers.columns {
                    if !declared.contains(column.as_str()) {
                        return Err(ProfileError::unknown_column_ref("outliers", column));
                    }
                }
            }
            if let Some(stability) = &checks.stability {
                for column in [&stability.actual, &stability.predicted] {
                    if !declared.contains(column.as_str()) {
                        return Err(ProfileError::unknown_column_ref("stability", column));
                    }
                }
            }
        }

        Ok(())
    }

    /// Serializes the profile to pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a profile from JSON.
    pub fn from_json(data: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(data)?)
    }
}

/// Expected kind of the values in a column.
///
/// `Any` disables kind checking for the column; numeric coercion and range
/// checks still apply where configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Integer or floating point values
    Numeric,
    /// Free-form text values
    Text,
    /// Boolean values
    Bool,
    /// No kind expectation
    #[default]
    Any,
}

impl ColumnKind {
    /// Returns the name used in profile files and messages.
    pub fn name(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Text => "text",
            ColumnKind::Bool => "bool",
            ColumnKind::Any => "any",
        }
    }
}

/// A single expected column in a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name as it appears in the dataset header
    pub name: String,

    /// Expected value kind
    #[serde(default)]
    pub kind: ColumnKind,

    /// Whether the column must be present in the dataset
    #[serde(default = "default_required")]
    pub required: bool,

    /// Optional human-readable description
    pub description: Option<String>,

    /// Optional per-column constraints
    pub constraints: Option<Vec<ColumnConstraint>>,
}

fn default_required() -> bool {
    true
}

/// Constraints that can be applied to a column's values.
///
/// Missing values never violate a constraint; missingness is the
/// completeness check's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnConstraint {
    /// Numeric values must fall inside the inclusive [min, max] interval
    Bounds {
        /// Minimum value (inclusive); absent means unbounded below
        #[serde(default)]
        min: Option<f64>,
        /// Maximum value (inclusive); absent means unbounded above
        #[serde(default)]
        max: Option<f64>,
    },

    /// Text values must match the regex pattern
    Pattern {
        /// Regular expression pattern
        regex: String,
    },

    /// Values must be one of the allowed values
    AllowedValues {
        /// List of valid values
        values: Vec<String>,
    },
}

/// Dataset-level quality checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuiteChecks {
    /// Minimum non-missing ratio per column
    pub completeness: Option<CompletenessCheck>,

    /// Duplicate row detection
    pub uniqueness: Option<UniquenessCheck>,

    /// IQR outlier detection on numeric columns
    pub outliers: Option<OutlierCheck>,

    /// Advisory metric stability comparison
    pub stability: Option<StabilityCheck>,
}

/// Completeness check for missing values.
///
/// Ensures that the listed columns are non-missing in at least `threshold`
/// of the rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessCheck {
    /// Minimum ratio of non-missing values (0.0 to 1.0)
    pub threshold: f64,

    /// Columns to check
    pub columns: Vec<String>,
}

/// Uniqueness check for duplicate rows.
///
/// Rows are compared over the listed columns; an empty list means the whole
/// row. Missing markers are normalized before comparison, so two missing
/// cells compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniquenessCheck {
    /// Columns that should be unique together; empty means all columns
    #[serde(default)]
    pub columns: Vec<String>,
}

/// IQR outlier check on numeric columns.
///
/// Values outside `[Q1 - k*IQR, Q3 + k*IQR]` are flagged. A constant column
/// (IQR of zero) flags nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlierCheck {
    /// Columns to check
    pub columns: Vec<String>,

    /// Tukey fence multiplier (default 1.5)
    #[serde(default = "default_iqr_k")]
    pub k: f64,
}

fn default_iqr_k() -> f64 {
    1.5
}

/// Which error metric a stability check tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Mean absolute error
    Mae,
    /// Root mean square error
    Rmse,
}

impl MetricKind {
    /// Returns the name used in profile files and messages.
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Mae => "mae",
            MetricKind::Rmse => "rmse",
        }
    }
}

/// Advisory metric stability check.
///
/// Computes the configured metric over an (actual, predicted) column pair
/// and flags instability when the fresh value deviates from the historical
/// mean by more than `max_sigma` standard deviations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityCheck {
    /// Column holding observed values
    pub actual: String,

    /// Column holding predicted values
    pub predicted: String,

    /// Metric to compute and compare
    pub metric: MetricKind,

    /// Path to the JSON metric history file
    pub history: String,

    /// Allowed deviation in standard deviations (default 3.0)
    #[serde(default = "default_max_sigma")]
    pub max_sigma: f64,
}

fn default_max_sigma() -> f64 {
    3.0
}
