//! Message - one sensor-originated record

use serde::Deserialize;

use crate::ContractError;

/// A single message emitted by a sensor.
///
/// `payload` is rewritten in place by the handler chain; the message itself is
/// dropped once its payload has been dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    /// Identifier of the sensor that sent the message
    pub sensor_id: String,

    /// Sensor model, used to select a [`crate::SensorProfile`]
    pub model: String,

    /// Text payload
    pub payload: String,
}

impl Message {
    /// Decode a message from its JSON representation.
    ///
    /// The input must be a JSON object carrying string `sensor_id`, `model`
    /// and `payload` fields. Unknown keys are ignored.
    ///
    /// # Errors
    /// [`ContractError::Parse`] when the input is not valid JSON, is not an
    /// object, or lacks one of the required string fields.
    pub fn from_json(raw: &str) -> Result<Self, ContractError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| ContractError::Parse {
                message: format!("invalid JSON: {e}"),
                source: Some(Box::new(e)),
            })?;

        // serde accepts positional arrays for structs; only objects are records here
        if !value.is_object() {
            return Err(ContractError::parse("sensor message must be a JSON object"));
        }

        serde_json::from_value(value).map_err(|e| ContractError::Parse {
            message: format!("invalid sensor message: {e}"),
            source: Some(Box::new(e)),
        })
    }
}
