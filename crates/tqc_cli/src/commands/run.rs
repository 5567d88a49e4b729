use anyhow::{Context, Result};
use std::path::Path;
use tqc_checks::{SuiteRunner, Table};
use tqc_core::RunContext;
use tqc_parser::parse_file;
use tracing::info;

use crate::output;

pub fn execute(
    profile_path: &str,
    data_path: &str,
    strict: bool,
    schema_only: bool,
    sample_size: Option<usize>,
    format: &str,
) -> Result<()> {
    info!("Running profile: {}", profile_path);
    info!("Data file: {}", data_path);
    info!("Strict mode: {}", strict);
    if let Some(size) = sample_size {
        info!("Sample size: {}", size);
    }

    // Parse the profile file
    let path = Path::new(profile_path);
    let profile = parse_file(path)
        .with_context(|| format!("Failed to parse profile file: {}", profile_path))?;

    output::print_info(&format!(
        "Profile loaded: {} v{} (owner: {})",
        profile.name, profile.version, profile.owner
    ));

    // Load the CSV data
    let table = Table::from_csv_path(data_path)
        .with_context(|| format!("Failed to read CSV file: {}", data_path))?;

    output::print_info(&format!(
        "Data loaded: {} rows, {} columns",
        table.len(),
        table.columns().len()
    ));

    // Build the run context from user-provided options
    let context = RunContext {
        strict,
        schema_only,
        sample_size,
        metadata: Default::default(),
    };

    let mut runner = SuiteRunner::new();
    let report = runner.run(&profile, &table, &context);

    // Print the run report
    output::print_run_report(&report, format);

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}
