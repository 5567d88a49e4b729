use colored::*;
use serde_json::json;
use tqc_core::RunReport;

pub fn print_run_report(report: &RunReport, format: &str) {
    match format {
        "json" => print_json_report(report),
        _ => print_text_report(report),
    }
}

fn print_text_report(report: &RunReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  QUALITY CHECK REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed {
        println!("\n{} {}", "✓".green().bold(), "Checks PASSED".green().bold());
    } else {
        println!("\n{} {}", "✗".red().bold(), "Checks FAILED".red().bold());
    }

    if !report.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for (i, error) in report.errors.iter().enumerate() {
            println!("  {}. {}", i + 1, error.to_string().red());
        }
    }

    if !report.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for (i, warning) in report.warnings.iter().enumerate() {
            println!("  {}. {}", i + 1, warning.to_string().yellow());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Rows checked:    {}", report.stats.rows_checked);
    println!("  Columns checked: {}", report.stats.columns_checked);
    println!("  Total errors:    {}", report.errors.len());
    println!("  Total warnings:  {}", report.warnings.len());
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &RunReport) {
    let output = json!({
        "passed": report.passed,
        "errors": report.errors,
        "warnings": report.warnings,
        "summary": {
            "rows_checked": report.stats.rows_checked,
            "columns_checked": report.stats.columns_checked,
            "checks_evaluated": report.stats.checks_evaluated,
            "error_count": report.errors.len(),
            "warning_count": report.warnings.len(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

#[allow(dead_code)]
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
