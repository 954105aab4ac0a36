//! MessageProcessor - parse, resolve, transform, dispatch

use tracing::{debug, info, instrument, warn};

use contracts::{ContractError, Message, OutputKind, SensorProfile};
use dispatcher::Dispatcher;
use handler_chain::{Clock, HandlerChain, SystemClock};

/// Result of processing one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Sensor that sent the message
    pub sensor_id: String,
    /// Model used to resolve the profile
    pub model: String,
    /// Payload after the handler chain
    pub payload: String,
    /// Number of handlers applied
    pub handlers_applied: usize,
    /// Outputs the payload was written to, in order
    pub outputs_written: Vec<OutputKind>,
}

/// Find the profile for `model`
///
/// Exact, case-sensitive match; the first matching profile wins.
pub fn resolve_profile<'a>(
    profiles: &'a [SensorProfile],
    model: &str,
) -> Result<&'a SensorProfile, ContractError> {
    profiles
        .iter()
        .find(|p| p.sensor_model == model)
        .ok_or_else(|| ContractError::unresolved_model(model))
}

/// Runs one message through the whole pipeline
pub struct MessageProcessor<C = SystemClock> {
    profiles: Vec<SensorProfile>,
    chain: HandlerChain<C>,
    dispatcher: Dispatcher,
}

impl MessageProcessor<SystemClock> {
    /// Processor using the system clock
    pub fn new(profiles: Vec<SensorProfile>, dispatcher: Dispatcher) -> Self {
        Self::with_chain(profiles, HandlerChain::new(), dispatcher)
    }
}

impl<C: Clock> MessageProcessor<C> {
    /// Processor using a custom handler chain
    pub fn with_chain(
        profiles: Vec<SensorProfile>,
        chain: HandlerChain<C>,
        dispatcher: Dispatcher,
    ) -> Self {
        Self {
            profiles,
            chain,
            dispatcher,
        }
    }

    /// Process one raw JSON message end to end.
    ///
    /// # Errors
    /// - [`ContractError::Parse`] if `raw` is not a valid message
    /// - [`ContractError::UnresolvedModel`] if no profile matches; no sink is
    ///   written in that case
    /// - [`ContractError::SinkWrite`] if an output fails
    #[instrument(name = "process_message", skip_all)]
    pub fn process(&mut self, raw: &str) -> Result<ProcessOutcome, ContractError> {
        let mut message = Message::from_json(raw)?;
        debug!(sensor_id = %message.sensor_id, model = %message.model, "Message parsed");

        let profile = resolve_profile(&self.profiles, &message.model).inspect_err(|_| {
            warn!(sensor_id = %message.sensor_id, model = %message.model, "No configuration for sensor model");
        })?;

        if !profile.ignored_handlers.is_empty() {
            debug!(ignored = ?profile.ignored_handlers, "Skipping unknown handlers");
        }
        if !profile.ignored_outputs.is_empty() {
            debug!(ignored = ?profile.ignored_outputs, "Skipping unknown outputs");
        }

        let handlers_applied = self.chain.apply(&profile.handlers, &mut message.payload);
        let outputs_written = self.dispatcher.dispatch(&profile.outputs, &message.payload)?;
        self.dispatcher.flush()?;

        info!(
            sensor_id = %message.sensor_id,
            model = %message.model,
            handlers = handlers_applied,
            outputs = outputs_written.len(),
            "Message processed"
        );

        Ok(ProcessOutcome {
            sensor_id: message.sensor_id,
            model: message.model,
            payload: message.payload,
            handlers_applied,
            outputs_written,
        })
    }
}
