mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tqc")]
#[command(version, about = "Tabular Quality Checks CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a profile's checks against a CSV file
    Run {
        /// Path to the profile file (YAML or TOML)
        profile: String,

        /// Path to the CSV data file
        #[arg(short, long)]
        data: String,

        /// Enable strict mode (quality findings become errors)
        #[arg(short, long)]
        strict: bool,

        /// Run schema and constraint checks only
        #[arg(long)]
        schema_only: bool,

        /// Check only the first N rows
        #[arg(long)]
        sample_size: Option<usize>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check a profile definition without running it against data
    Lint {
        /// Path to the profile file (YAML or TOML)
        profile: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Generate a starter profile from an existing CSV file
    Init {
        /// Path to the CSV data file
        source: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Profile name (defaults to the CSV file stem)
        #[arg(short, long)]
        name: Option<String>,

        /// Profile owner
        #[arg(long, default_value = "data-team")]
        owner: String,

        /// Profile description
        #[arg(long)]
        description: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Run {
            profile,
            data,
            strict,
            schema_only,
            sample_size,
            format,
        } => commands::run::execute(&profile, &data, strict, schema_only, sample_size, &format),

        Commands::Lint { profile, format } => commands::lint::execute(&profile, &format),

        Commands::Init {
            source,
            output,
            name,
            owner,
            description,
        } => commands::init::execute(
            &source,
            output.as_deref(),
            name.as_deref(),
            &owner,
            description.as_deref(),
        ),
    }
}
