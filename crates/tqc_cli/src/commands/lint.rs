use anyhow::{Context, Result};
use std::path::Path;
use tqc_checks::SuiteRunner;
use tqc_parser::parse_file;
use tracing::info;

use crate::output;

pub fn execute(profile_path: &str, format: &str) -> Result<()> {
    info!("Linting profile: {}", profile_path);

    // Parse the profile file
    let path = Path::new(profile_path);
    let profile = parse_file(path)
        .with_context(|| format!("Failed to parse profile file: {}", profile_path))?;

    output::print_info(&format!(
        "Profile loaded: {} v{} (owner: {})",
        profile.name, profile.version, profile.owner
    ));

    // Check the definition itself without data
    let runner = SuiteRunner::new();
    let report = runner.validate_definition(&profile);

    if format == "json" {
        output::print_run_report(&report, format);
        if !report.passed {
            std::process::exit(1);
        }
        return Ok(());
    }

    if !report.passed {
        output::print_run_report(&report, format);
        std::process::exit(1);
    }

    output::print_success("Profile definition is valid");

    // Print profile summary
    println!("\nProfile Summary:");
    println!("  Name:        {}", profile.name);
    println!("  Version:     {}", profile.version);
    println!("  Owner:       {}", profile.owner);
    println!(
        "  Description: {}",
        profile.description.as_deref().unwrap_or("N/A")
    );
    println!("  Columns:     {}", profile.columns.len());

    if let Some(checks) = &profile.checks {
        let mut enabled = Vec::new();
        if checks.completeness.is_some() {
            enabled.push("completeness");
        }
        if checks.uniqueness.is_some() {
            enabled.push("uniqueness");
        }
        if checks.outliers.is_some() {
            enabled.push("outliers");
        }
        if checks.stability.is_some() {
            enabled.push("stability");
        }
        println!("  Suite Checks: {}", enabled.join(", "));
    }

    let constrained = profile
        .columns
        .iter()
        .filter(|c| c.constraints.as_ref().is_some_and(|cs| !cs.is_empty()))
        .count();
    if constrained > 0 {
        println!("  Constrained Columns: {}", constrained);
    }

    Ok(())
}
