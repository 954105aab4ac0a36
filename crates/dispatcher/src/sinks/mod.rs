//! Sink implementations
//!
//! Contains ConsoleSink and FileSink.

mod console;
mod file;

pub use self::console::ConsoleSink;
pub use self::file::{FileSink, FileSinkConfig};
