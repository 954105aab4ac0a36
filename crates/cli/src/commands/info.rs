//! `info` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use config_loader::{ConfigLoader, SensorProfile};

use crate::cli::InfoArgs;

/// Configuration info for JSON output
#[derive(Serialize)]
struct ConfigInfo<'a> {
    config_path: String,
    sensors: &'a [SensorProfile],
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    let config_path = args.config.config_path();
    info!(config = %config_path.display(), "Loading configuration for info");

    let profiles = ConfigLoader::load_from_path(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if args.json {
        let info = ConfigInfo {
            config_path: config_path.display().to_string(),
            sensors: &profiles,
        };
        let json = serde_json::to_string_pretty(&info).context("Failed to serialize config info")?;
        println!("{}", json);
    } else {
        print!("{}", render_text(&profiles));
    }

    Ok(())
}

fn join<T: ToString>(items: &[T]) -> String {
    if items.is_empty() {
        return "(none)".to_string();
    }
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn render_text(profiles: &[SensorProfile]) -> String {
    let mut out = format!("\n=== Sensor Models ({}) ===\n", profiles.len());
    for profile in profiles {
        out.push_str(&format!("\n  {}\n", profile.sensor_model));
        out.push_str(&format!("    Handlers: {}\n", join(&profile.handlers)));
        out.push_str(&format!("    Outputs:  {}\n", join(&profile.outputs)));
        if !profile.ignored_handlers.is_empty() || !profile.ignored_outputs.is_empty() {
            let ignored: Vec<&str> = profile
                .ignored_handlers
                .iter()
                .chain(&profile.ignored_outputs)
                .map(String::as_str)
                .collect();
            out.push_str(&format!("    Ignored:  {}\n", ignored.join(", ")));
        }
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let profiles = vec![
            SensorProfile::from_names("TH-100", ["trim", "padToMultiple"], ["Console", "File"]),
            SensorProfile::from_names("GPS-7", ["reverse"], Vec::<String>::new()),
        ];
        let text = render_text(&profiles);

        assert!(text.contains("Sensor Models (2)"));
        assert!(text.contains("Handlers: trim -> padToMultiple"));
        assert!(text.contains("Outputs:  Console -> File"));
        assert!(text.contains("Handlers: (none)"));
        assert!(text.contains("Ignored:  reverse"));
    }
}
