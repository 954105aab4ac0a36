//! Layered error definitions
//!
//! Categorized by stage: config / message / routing / sink

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Configuration Errors =====
    /// Configuration source missing or malformed
    #[error("config load error: {message}")]
    ConfigLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ===== Message Errors =====
    /// Incoming message is not well-formed or lacks a required field
    #[error("message parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ===== Routing Errors =====
    /// No sensor profile matches the message's model
    #[error("no configuration found for sensor model '{model}'")]
    UnresolvedModel { model: String },

    // ===== Sink Errors =====
    /// Sink write error
    #[error("sink '{sink_name}' write error: {message}")]
    SinkWrite { sink_name: String, message: String },
}

impl ContractError {
    /// Create configuration load error
    pub fn config_load(message: impl Into<String>) -> Self {
        Self::ConfigLoad {
            message: message.into(),
            source: None,
        }
    }

    /// Create message parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            source: None,
        }
    }

    /// Create unresolved model error
    pub fn unresolved_model(model: impl Into<String>) -> Self {
        Self::UnresolvedModel {
            model: model.into(),
        }
    }

    /// Create sink write error
    pub fn sink_write(sink_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SinkWrite {
            sink_name: sink_name.into(),
            message: message.into(),
        }
    }

    /// Short machine-friendly label for the error category
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigLoad { .. } => "config_load",
            Self::Parse { .. } => "parse",
            Self::UnresolvedModel { .. } => "unresolved_model",
            Self::SinkWrite { .. } => "sink_write",
        }
    }
}
