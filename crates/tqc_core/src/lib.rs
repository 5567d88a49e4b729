//! # Tabular Quality Checks Core
//!
//! Core data structures and types for the Tabular Quality Checks toolkit.
//!
//! This crate provides the building blocks for declaring a check profile: a
//! named, versioned description of what a rectangular dataset should look
//! like and which quality checks should run against it.
//!
//! ## Key Concepts
//!
//! - **Profile**: the main structure declaring expected columns and checks
//! - **ColumnSpec**: one expected column with its kind and constraints
//! - **SuiteChecks**: dataset-level checks (completeness, uniqueness,
//!   outliers, metric stability)
//! - **RunReport**: structured outcome of running a profile against data
//!
//! ## Example
//!
//! ```rust
//! use tqc_core::{ColumnKind, ColumnSpecBuilder, ProfileBuilder};
//!
//! let profile = ProfileBuilder::new("sensor_readings", "qa-team")
//!     .description("Hourly sensor export")
//!     .column(
//!         ColumnSpecBuilder::new("temperature")
//!             .kind(ColumnKind::Numeric)
//!             .required(true)
//!             .build(),
//!     )
//!     .build();
//!
//! assert_eq!(profile.columns.len(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod profile;
pub mod report;

pub use builder::*;
pub use error::*;
pub use profile::*;
pub use report::*;
