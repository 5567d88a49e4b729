//! # Tabular Quality Checks
//!
//! Check engine for tabular data. This crate provides the stateless
//! checks that run against an in-memory table, including:
//!
//! - Schema and shape checks (column presence, kinds, row count)
//! - Constraint checks (numeric bounds, patterns, allowed values)
//! - Quality checks (missingness, completeness, duplicates)
//! - IQR outlier detection and MAE/RMSE error metrics
//! - Advisory metric stability against a recorded history
//!
//! ## Example
//!
//! ```rust
//! use tqc_checks::{SuiteRunner, Table};
//! use tqc_core::{ColumnSpecBuilder, ProfileBuilder, RunContext};
//!
//! let profile = ProfileBuilder::new("readings", "qa-team")
//!     .column(ColumnSpecBuilder::new("id").build())
//!     .column(ColumnSpecBuilder::new("value").build())
//!     .build();
//!
//! let table = Table::from_csv_str("id,value\n1,20.5\n2,21.0\n").unwrap();
//!
//! let mut runner = SuiteRunner::new();
//! let report = runner.run(&profile, &table, &RunContext::new());
//!
//! if report.passed {
//!     println!("All checks passed");
//! } else {
//!     println!("Checks failed: {:?}", report.errors);
//! }
//! ```

mod coerce;
mod constraints;
mod engine;
mod error;
mod metrics;
mod outlier;
mod quality;
mod range;
mod schema;
mod stability;
mod table;

pub use coerce::*;
pub use constraints::*;
pub use engine::*;
pub use error::*;
pub use metrics::*;
pub use outlier::*;
pub use quality::*;
pub use range::*;
pub use schema::*;
pub use stability::*;
pub use table::*;
