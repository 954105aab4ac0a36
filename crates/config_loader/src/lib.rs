//! # Config Loader
//!
//! Configuration loading and parsing module.
//!
//! Responsibilities:
//! - Parse JSON/TOML sensor configuration files
//! - Resolve handler/output names into [`contracts::SensorProfile`]s
//! - Report non-fatal findings (unknown names, shadowed models)
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let profiles = ConfigLoader::load_from_path(Path::new("config.json")).unwrap();
//! println!("Sensors: {}", profiles.len());
//! ```

mod parser;
mod validator;

pub use contracts::SensorProfile;
pub use parser::ConfigFormat;
pub use validator::{inspect, ConfigWarning};

use contracts::ContractError;
use std::path::Path;
use tracing::{debug, instrument};

/// Configuration loader
///
/// Provides static methods to load configuration from files or strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file path
    ///
    /// Automatically detects format from file extension (.json / .toml).
    ///
    /// # Errors
    /// [`ContractError::ConfigLoad`] on read failure, unsupported format or
    /// parse failure.
    #[instrument(name = "config_load", skip(path), fields(path = %path.display()))]
    pub fn load_from_path(path: &Path) -> Result<Vec<SensorProfile>, ContractError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        let profiles = Self::load_from_str(&content, format)?;
        debug!(sensors = profiles.len(), "Configuration loaded");
        Ok(profiles)
    }

    /// Load configuration from string
    ///
    /// # Errors
    /// [`ContractError::ConfigLoad`] on parse failure.
    pub fn load_from_str(
        content: &str,
        format: ConfigFormat,
    ) -> Result<Vec<SensorProfile>, ContractError> {
        parser::parse(content, format)
    }
}

impl ConfigLoader {
    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, ContractError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ContractError::config_load("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext)
            .ok_or_else(|| ContractError::config_load(format!("unsupported config format: .{ext}")))
    }

    /// Read configuration file content
    fn read_file(path: &Path) -> Result<String, ContractError> {
        std::fs::read_to_string(path).map_err(|e| ContractError::ConfigLoad {
            message: format!("cannot read {}: {e}", path.display()),
            source: Some(Box::new(e)),
        })
    }
}
