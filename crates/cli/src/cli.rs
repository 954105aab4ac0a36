//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Sensor Normalizer - per-model payload normalization for sensor messages
#[derive(Parser, Debug)]
#[command(
    name = "sensor-normalizer",
    author,
    version,
    about = "Normalize a sensor message payload and write it to configured outputs",
    long_about = "Reads one JSON sensor message, looks up the configuration for its sensor \n\
                  model, applies the configured payload handlers in order and writes the \n\
                  result to the configured outputs (Console, File)."
)]
pub struct Cli {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "compact",
        global = true,
        env = "SENSOR_NORMALIZER_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process one sensor message
    Process(ProcessArgs),

    /// Validate configuration file without processing anything
    Validate(ValidateArgs),

    /// Display configured sensor models
    Info(InfoArgs),
}

/// Configuration file location, shared by every command
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Path to configuration file (JSON or TOML); relative paths are resolved against --base-dir
    #[arg(
        short,
        long,
        default_value = "config.json",
        env = "SENSOR_NORMALIZER_CONFIG"
    )]
    pub config: PathBuf,

    /// Directory relative paths are resolved against [default: directory of the executable]
    #[arg(long, env = "SENSOR_NORMALIZER_BASE_DIR")]
    pub base_dir: Option<PathBuf>,
}

/// Arguments for the `process` command
#[derive(Parser, Debug, Clone)]
pub struct ProcessArgs {
    /// Message as a JSON object with sensor_id, model and payload ("-" reads stdin)
    pub message: String,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// File receiving payloads for the File output; relative paths are resolved against --base-dir
    #[arg(
        short,
        long,
        default_value = dispatcher::DEFAULT_OUTPUT_FILE,
        env = "SENSOR_NORMALIZER_OUTPUT"
    )]
    pub output: PathBuf,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    Pretty,
    /// Compact single-line format
    #[default]
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}
