//! `validate` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use config_loader::{ConfigLoader, SensorProfile};

use crate::cli::ValidateArgs;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ConfigSummary>,
}

#[derive(Serialize)]
struct ConfigSummary {
    sensor_count: usize,
    handler_count: usize,
    output_count: usize,
}

impl ConfigSummary {
    fn of(profiles: &[SensorProfile]) -> Self {
        Self {
            sensor_count: profiles.len(),
            handler_count: profiles.iter().map(|p| p.handlers.len()).sum(),
            output_count: profiles.iter().map(|p| p.outputs.len()).sum(),
        }
    }
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    let config_path = args.config.config_path();
    info!(config = %config_path.display(), "Validating configuration");

    let result = validate_config(&config_path);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Configuration validation failed")
    }
}

fn validate_config(path: &std::path::Path) -> ValidationResult {
    let config_path = path.display().to_string();

    match ConfigLoader::load_from_path(path) {
        Ok(profiles) => {
            let warnings: Vec<String> = config_loader::inspect(&profiles)
                .iter()
                .map(ToString::to_string)
                .collect();

            ValidationResult {
                valid: true,
                config_path,
                error: None,
                warnings: if warnings.is_empty() {
                    None
                } else {
                    Some(warnings)
                },
                summary: Some(ConfigSummary::of(&profiles)),
            }
        }
        Err(e) => ValidationResult {
            valid: false,
            config_path,
            error: Some(e.to_string()),
            warnings: None,
            summary: None,
        },
    }
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Configuration is valid: {}", result.config_path);

        if let Some(ref summary) = result.summary {
            println!("\n  Sensors: {}", summary.sensor_count);
            println!("  Handlers: {}", summary.handler_count);
            println!("  Outputs: {}", summary.output_count);
        }

        if let Some(ref warnings) = result.warnings {
            println!("\n⚠ Warnings:");
            for warning in warnings {
                println!("  - {}", warning);
            }
        }
    } else {
        println!("✗ Configuration is invalid: {}", result.config_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }
}
