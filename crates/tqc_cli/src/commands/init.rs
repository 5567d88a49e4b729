use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tqc_checks::{Table, Value};
use tqc_core::{ColumnKind, ColumnSpecBuilder, ProfileBuilder};
use tracing::info;

use crate::output;

pub fn execute(
    source: &str,
    output_path: Option<&str>,
    name: Option<&str>,
    owner: &str,
    description: Option<&str>,
) -> Result<()> {
    info!("Initializing profile from CSV source: {}", source);

    let table =
        Table::from_csv_path(source).with_context(|| format!("Failed to read CSV file: {}", source))?;

    output::print_info(&format!(
        "Read {} rows across {} columns",
        table.len(),
        table.columns().len()
    ));

    // Profile name defaults to the file stem
    let default_name = Path::new(source)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string());
    let profile_name = name.unwrap_or(&default_name);

    let profile_description = description
        .map(str::to_string)
        .unwrap_or_else(|| format!("Auto-generated profile for {}", source));

    let mut builder = ProfileBuilder::new(profile_name, owner)
        .version("1.0.0")
        .description(&profile_description);

    // Infer a kind per column from the observed values
    for column in table.columns() {
        let kind = infer_column_kind(&table, column);
        // A column with no missing values is marked required
        let has_missing = table.column_values(column).any(|v| v.is_null());
        builder = builder.column(
            ColumnSpecBuilder::new(column)
                .kind(kind)
                .required(!has_missing)
                .build(),
        );
    }

    let profile = builder.build();

    // Serialize to YAML
    let yaml =
        serde_yaml_ng::to_string(&profile).context("Failed to serialize profile to YAML")?;

    // Output to file or stdout
    if let Some(path) = output_path {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path))?;
        file.write_all(yaml.as_bytes())
            .with_context(|| format!("Failed to write output file: {}", path))?;
        output::print_success(&format!("Profile written to {}", path));
    } else {
        println!("{}", yaml);
    }

    Ok(())
}

/// Picks the narrowest kind that covers every non-missing value observed.
fn infer_column_kind(table: &Table, column: &str) -> ColumnKind {
    let mut kind: Option<ColumnKind> = None;

    for value in table.column_values(column) {
        let observed = match value {
            Value::Null => continue,
            Value::Int(_) | Value::Float(_) => ColumnKind::Numeric,
            Value::Str(_) => ColumnKind::Text,
            Value::Bool(_) => ColumnKind::Bool,
        };
        match kind {
            None => kind = Some(observed),
            Some(k) if k == observed => {}
            Some(_) => return ColumnKind::Any,
        }
    }

    kind.unwrap_or(ColumnKind::Any)
}
