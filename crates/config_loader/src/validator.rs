//! Configuration inspection
//!
//! Nothing here rejects a configuration. Findings are reported as warnings:
//! - duplicate sensor_model (first entry wins, later ones are unreachable)
//! - unrecognized handler names (skipped at runtime)
//! - unrecognized output names (skipped at runtime)
//! - profiles without any recognized output

use std::collections::HashSet;
use std::fmt;

use contracts::SensorProfile;

/// Non-fatal configuration finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A later entry reuses an earlier entry's sensor_model
    DuplicateModel { sensor_model: String, index: usize },
    /// Handler name that matches no known handler
    UnknownHandler { sensor_model: String, name: String },
    /// Output name that matches no known output
    UnknownOutput { sensor_model: String, name: String },
    /// Profile whose messages are transformed but written nowhere
    NoOutputs { sensor_model: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateModel {
                sensor_model,
                index,
            } => write!(
                f,
                "sensors[{index}]: duplicate sensor_model '{sensor_model}' is shadowed by an earlier entry"
            ),
            Self::UnknownHandler { sensor_model, name } => {
                write!(f, "sensor '{sensor_model}': unknown handler '{name}' will be skipped")
            }
            Self::UnknownOutput { sensor_model, name } => {
                write!(f, "sensor '{sensor_model}': unknown output '{name}' will be skipped")
            }
            Self::NoOutputs { sensor_model } => {
                write!(f, "sensor '{sensor_model}': no recognized outputs configured")
            }
        }
    }
}

/// Inspect loaded profiles
///
/// Returns every finding, in document order.
pub fn inspect(profiles: &[SensorProfile]) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();

    for (index, profile) in profiles.iter().enumerate() {
        if !seen.insert(profile.sensor_model.as_str()) {
            warnings.push(ConfigWarning::DuplicateModel {
                sensor_model: profile.sensor_model.clone(),
                index,
            });
        }

        for name in &profile.ignored_handlers {
            warnings.push(ConfigWarning::UnknownHandler {
                sensor_model: profile.sensor_model.clone(),
                name: name.clone(),
            });
        }

        for name in &profile.ignored_outputs {
            warnings.push(ConfigWarning::UnknownOutput {
                sensor_model: profile.sensor_model.clone(),
                name: name.clone(),
            });
        }

        if profile.outputs.is_empty() {
            warnings.push(ConfigWarning::NoOutputs {
                sensor_model: profile.sensor_model.clone(),
            });
        }
    }

    warnings
}
