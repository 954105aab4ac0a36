//! SensorProfile - Config Loader output
//!
//! Describes how messages from one sensor model are transformed and where
//! they are written.

use serde::Serialize;
use std::fmt;

/// Payload transform selected by name in the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HandlerKind {
    /// Strip leading and trailing whitespace
    Trim,
    /// Right-pad with a fixed character to a multiple of a fixed length
    PadToMultiple,
    /// Append `_<unix seconds>`
    AddTimestamp,
}

impl HandlerKind {
    /// All handlers, in declaration order
    pub const ALL: [HandlerKind; 3] = [Self::Trim, Self::PadToMultiple, Self::AddTimestamp];

    /// Resolve a configuration name (case-sensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "trim" => Some(Self::Trim),
            "padToMultiple" => Some(Self::PadToMultiple),
            "addTimestamp" => Some(Self::AddTimestamp),
            _ => None,
        }
    }

    /// Name as written in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            Self::Trim => "trim",
            Self::PadToMultiple => "padToMultiple",
            Self::AddTimestamp => "addTimestamp",
        }
    }
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output target selected by name in the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OutputKind {
    /// Standard output
    Console,
    /// Shared append-only payload file
    File,
}

impl OutputKind {
    /// All outputs, in declaration order
    pub const ALL: [OutputKind; 2] = [Self::Console, Self::File];

    /// Resolve a configuration name (case-sensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Console" => Some(Self::Console),
            "File" => Some(Self::File),
            _ => None,
        }
    }

    /// Name as written in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            Self::Console => "Console",
            Self::File => "File",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Processing profile for one sensor model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SensorProfile {
    /// Sensor model this profile applies to (lookup key)
    pub sensor_model: String,

    /// Handlers to apply, in order
    pub handlers: Vec<HandlerKind>,

    /// Outputs to write to, in order
    pub outputs: Vec<OutputKind>,

    /// Handler names that were not recognized and will be skipped
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored_handlers: Vec<String>,

    /// Output names that were not recognized and will be skipped
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored_outputs: Vec<String>,
}

impl SensorProfile {
    /// Build a profile from raw configuration names.
    ///
    /// Unrecognized names are dropped from the executable lists and kept in
    /// `ignored_handlers` / `ignored_outputs`. Order of recognized names is
    /// preserved, duplicates included.
    pub fn from_names<H, O>(sensor_model: impl Into<String>, handlers: H, outputs: O) -> Self
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        O: IntoIterator,
        O::Item: AsRef<str>,
    {
        let mut profile = Self {
            sensor_model: sensor_model.into(),
            handlers: Vec::new(),
            outputs: Vec::new(),
            ignored_handlers: Vec::new(),
            ignored_outputs: Vec::new(),
        };

        for name in handlers {
            let name = name.as_ref();
            match HandlerKind::from_name(name) {
                Some(kind) => profile.handlers.push(kind),
                None => profile.ignored_handlers.push(name.to_string()),
            }
        }

        for name in outputs {
            let name = name.as_ref();
            match OutputKind::from_name(name) {
                Some(kind) => profile.outputs.push(kind),
                None => profile.ignored_outputs.push(name.to_string()),
            }
        }

        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_names_round_trip() {
        for kind in HandlerKind::ALL {
            assert_eq!(HandlerKind::from_name(kind.name()), Some(kind));
        }
        for kind in OutputKind::ALL {
            assert_eq!(OutputKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_eq!(HandlerKind::from_name("Trim"), None);
        assert_eq!(HandlerKind::from_name("padtomultiple"), None);
        assert_eq!(OutputKind::from_name("console"), None);
    }

    #[test]
    fn test_from_names_splits_unknown() {
        let profile = SensorProfile::from_names(
            "X",
            ["trim", "reverse", "addTimestamp", "trim"],
            ["File", "Kafka", "Console"],
        );
        assert_eq!(
            profile.handlers,
            vec![HandlerKind::Trim, HandlerKind::AddTimestamp, HandlerKind::Trim]
        );
        assert_eq!(profile.ignored_handlers, vec!["reverse".to_string()]);
        assert_eq!(profile.outputs, vec![OutputKind::File, OutputKind::Console]);
        assert_eq!(profile.ignored_outputs, vec!["Kafka".to_string()]);
    }

    #[test]
    fn test_profile_serializes_with_config_names() {
        let profile = SensorProfile::from_names("X", ["padToMultiple"], ["Console"]);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["handlers"][0], "padToMultiple");
        assert_eq!(json["outputs"][0], "Console");
        assert!(json.get("ignored_handlers").is_none());
    }
}
