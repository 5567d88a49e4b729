//! Builder pattern for creating check profiles.
//!
//! This module provides ergonomic builders for constructing profiles
//! and their columns with a fluent API.

use crate::{ColumnConstraint, ColumnKind, ColumnSpec, Profile, SuiteChecks};

/// Builder for creating a `Profile`.
///
/// # Example
///
/// ```rust
/// use tqc_core::ProfileBuilder;
///
/// let profile = ProfileBuilder::new("sensor_readings", "qa-team")
///     .version("1.0.0")
///     .description("Hourly sensor export")
///     .build();
/// ```
#[derive(Debug)]
pub struct ProfileBuilder {
    name: String,
    owner: String,
    version: String,
    description: Option<String>,
    columns: Vec<ColumnSpec>,
    checks: Option<SuiteChecks>,
}

impl ProfileBuilder {
    /// Creates a new profile builder with required fields.
    ///
    /// # Arguments
    ///
    /// * `name` - Unique profile name
    /// * `owner` - Profile owner identifier
    pub fn new(name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            version: "1.0.0".to_string(),
            description: None,
            columns: Vec::new(),
            checks: None,
        }
    }

    /// Sets the profile version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the profile description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a column to the profile.
    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    /// Adds multiple columns to the profile.
    pub fn columns(mut self, columns: Vec<ColumnSpec>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Sets the dataset-level checks.
    pub fn checks(mut self, checks: SuiteChecks) -> Self {
        self.checks = Some(checks);
        self
    }

    /// Builds the profile.
    pub fn build(self) -> Profile {
        Profile {
            version: self.version,
            name: self.name,
            owner: self.owner,
            description: self.description,
            columns: self.columns,
            checks: self.checks,
        }
    }
}

/// Builder for creating a `ColumnSpec`.
///
/// # Example
///
/// ```rust
/// use tqc_core::{ColumnKind, ColumnSpecBuilder};
///
/// let column = ColumnSpecBuilder::new("temperature")
///     .kind(ColumnKind::Numeric)
///     .description("Degrees Celsius")
///     .required(true)
///     .build();
/// ```
#[derive(Debug)]
pub struct ColumnSpecBuilder {
    name: String,
    kind: ColumnKind,
    required: bool,
    description: Option<String>,
    constraints: Option<Vec<ColumnConstraint>>,
}

impl ColumnSpecBuilder {
    /// Creates a new column builder.
    ///
    /// # Arguments
    ///
    /// * `name` - Column name as it appears in the dataset header
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Any,
            required: true,
            description: None,
            constraints: None,
        }
    }

    /// Sets the expected value kind.
    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets whether the column must be present.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the column description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a constraint to the column.
    pub fn constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints
            .get_or_insert_with(Vec::new)
            .push(constraint);
        self
    }

    /// Builds the column spec.
    pub fn build(self) -> ColumnSpec {
        ColumnSpec {
            name: self.name,
            kind: self.kind,
            required: self.required,
            description: self.description,
            constraints: self.constraints,
        }
    }
}
