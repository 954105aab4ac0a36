//! # Sensor Normalizer CLI
//!
//! Command-line entry point.
//!
//! Provides:
//! - One-shot message processing
//! - Configuration validation and inspection

mod cli;
mod commands;
mod paths;

use anyhow::Result;
use clap::Parser;
use contracts::ContractError;
use observability::ObservabilityConfig;
use tracing::debug;

use cli::{Cli, Commands};
use commands::{run_info, run_process, run_validate};

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_logging(&cli)?;

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Sensor Normalizer starting"
    );

    let result = match &cli.command {
        Commands::Process(args) => run_process(args),
        Commands::Validate(args) => run_validate(args),
        Commands::Info(args) => run_info(args),
    };

    if let Err(ref e) = result {
        tracing::error!(kind = error_kind(e), error = %format!("{e:#}"), "Command failed");
    }

    result
}

/// Initialize logging based on CLI options
fn init_logging(cli: &Cli) -> Result<()> {
    let (level, forced) = if cli.quiet {
        ("error", true)
    } else {
        match cli.verbose {
            0 => ("warn", false),
            1 => ("info", true),
            2 => ("debug", true),
            _ => ("trace", true),
        }
    };

    observability::init_with_config(ObservabilityConfig {
        log_format: cli.log_format.into(),
        default_log_level: level.to_string(),
        force_level: forced,
    })
}

/// Category label for a failed command
fn error_kind(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<ContractError>()
        .map_or("other", ContractError::kind)
}
