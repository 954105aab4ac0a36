//! # Processor
//!
//! Orchestrates a single message through the normalizer:
//! parse → resolve profile → handler chain → dispatch.
//!
//! One call to [`MessageProcessor::process`] handles one message. There is no
//! retry and no fallback profile.

mod processor;

pub use processor::{resolve_profile, MessageProcessor, ProcessOutcome};
