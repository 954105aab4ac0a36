//! `process` command implementation.

use anyhow::{Context, Result};
use std::io::Read;
use tracing::{debug, info};

use config_loader::ConfigLoader;
use processor::MessageProcessor;

use crate::cli::ProcessArgs;
use crate::paths;

/// Execute the `process` command
pub fn run_process(args: &ProcessArgs) -> Result<()> {
    let base_dir = args.config.base_dir();
    let config_path = paths::resolve(&base_dir, &args.config.config);
    let output_path = paths::resolve(&base_dir, &args.output);

    info!(config = %config_path.display(), "Loading configuration");
    let profiles = ConfigLoader::load_from_path(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    for warning in config_loader::inspect(&profiles) {
        debug!(%warning, "Configuration warning");
    }

    let raw = read_message(&args.message)?;

    let dispatcher = dispatcher::create_dispatcher(&output_path);
    let mut processor = MessageProcessor::new(profiles, dispatcher);
    let outcome = processor
        .process(&raw)
        .context("Failed to process message")?;

    info!(
        sensor_id = %outcome.sensor_id,
        model = %outcome.model,
        outputs = ?outcome.outputs_written,
        output_file = %output_path.display(),
        "Done"
    );
    Ok(())
}

/// Message text from the argument, or from stdin for `-`
fn read_message(arg: &str) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    read_message_from(std::io::stdin().lock())
}

fn read_message_from(mut reader: impl Read) -> Result<String> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .context("Failed to read message from stdin")?;
    Ok(raw)
}
