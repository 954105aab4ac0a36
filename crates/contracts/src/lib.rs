//! # Contracts
//!
//! Shared interface contracts between the normalizer crates.
//! Business crates depend only on this crate, never on each other's internals.
//!
//! ## Data flow
//! - A raw JSON string is decoded into a [`Message`]
//! - The message's `model` selects one [`SensorProfile`]
//! - The profile's [`HandlerKind`] list rewrites the payload
//! - The profile's [`OutputKind`] list selects the [`DataSink`]s that receive it

mod error;
mod message;
mod profile;
mod sink;

pub use error::*;
pub use message::Message;
pub use profile::*;
pub use sink::DataSink;
