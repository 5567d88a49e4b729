//! Run context and report types.
//!
//! This module defines the options a caller passes when running a profile
//! and the structured report produced by a run.

/// Options for running a profile against data.
#[derive(Debug, Default, Clone)]
pub struct RunContext {
    /// Whether quality findings fail the run instead of warning
    pub strict: bool,

    /// Whether to run only schema checks (skip constraints and quality)
    pub schema_only: bool,

    /// Maximum number of rows to check
    pub sample_size: Option<usize>,

    /// Additional metadata for the run
    pub metadata: std::collections::HashMap<String, String>,
}

impl RunContext {
    /// Creates a new run context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets schema-only mode.
    pub fn with_schema_only(mut self, schema_only: bool) -> Self {
        self.schema_only = schema_only;
        self
    }

    /// Sets the row sample size.
    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = Some(size);
        self
    }

    /// Adds metadata to the context.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Report of a profile run.
///
/// Contains the overall outcome plus the individual errors, warnings, and
/// execution statistics.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Whether the run passed overall
    pub passed: bool,

    /// List of errors encountered
    pub errors: Vec<String>,

    /// List of warnings
    pub warnings: Vec<String>,

    /// Run statistics
    pub stats: RunStats,
}

/// Statistics about a profile run.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of rows checked
    pub rows_checked: usize,

    /// Number of declared columns
    pub columns_checked: usize,

    /// Number of checks evaluated
    pub checks_evaluated: usize,

    /// Run duration in milliseconds
    pub duration_ms: u64,
}

impl RunReport {
    /// Creates a new passing report.
    pub fn success() -> Self {
        Self {
            passed: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: RunStats::default(),
        }
    }

    /// Creates a new failed report with an error.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![error.into()],
            warnings: Vec::new(),
            stats: RunStats::default(),
        }
    }

    /// Adds an error to the report.
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.passed = false;
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}
