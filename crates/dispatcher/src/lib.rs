//! # Dispatcher
//!
//! Payload output module.
//!
//! Responsibilities:
//! - Map configured [`OutputKind`]s to sinks
//! - Write the same transformed payload to every configured output
//! - Hold file handles only for the duration of a single append

pub mod dispatcher;
pub mod sinks;

pub use contracts::{DataSink, OutputKind};
pub use dispatcher::{
    create_dispatcher, Dispatcher, DispatcherBuilder, DispatcherConfig, DEFAULT_OUTPUT_FILE,
};
pub use sinks::{ConsoleSink, FileSink, FileSinkConfig};
