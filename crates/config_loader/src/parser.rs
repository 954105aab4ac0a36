//! Configuration parsing
//!
//! JSON is the primary format, TOML is accepted with the same shape.

use serde::Deserialize;

use contracts::{ContractError, SensorProfile};

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON format
    Json,
    /// TOML format
    Toml,
}

impl ConfigFormat {
    /// Infer format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Top-level configuration document
#[derive(Debug, Deserialize)]
struct ConfigDocument {
    sensors: Vec<SensorEntry>,
}

/// One `sensors[]` entry, names still unresolved
#[derive(Debug, Deserialize)]
struct SensorEntry {
    sensor_model: String,
    handlers: Vec<String>,
    outputs: Vec<String>,
}

impl ConfigDocument {
    fn into_profiles(self) -> Vec<SensorProfile> {
        self.sensors
            .into_iter()
            .map(|entry| SensorProfile::from_names(entry.sensor_model, entry.handlers, entry.outputs))
            .collect()
    }
}

/// Parse JSON configuration
pub fn parse_json(content: &str) -> Result<Vec<SensorProfile>, ContractError> {
    serde_json::from_str::<ConfigDocument>(content)
        .map(ConfigDocument::into_profiles)
        .map_err(|e| ContractError::ConfigLoad {
            message: format!("JSON parse error: {e}"),
            source: Some(Box::new(e)),
        })
}

/// Parse TOML configuration
pub fn parse_toml(content: &str) -> Result<Vec<SensorProfile>, ContractError> {
    toml::from_str::<ConfigDocument>(content)
        .map(ConfigDocument::into_profiles)
        .map_err(|e| ContractError::ConfigLoad {
            message: format!("TOML parse error: {e}"),
            source: Some(Box::new(e)),
        })
}

/// Parse configuration according to format
pub fn parse(content: &str, format: ConfigFormat) -> Result<Vec<SensorProfile>, ContractError> {
    match format {
        ConfigFormat::Json => parse_json(content),
        ConfigFormat::Toml => parse_toml(content),
    }
}
