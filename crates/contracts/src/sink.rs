//! DataSink trait - Dispatcher output interface
//!
//! Defines the abstract interface for Sinks.

use crate::ContractError;

/// Data output trait
///
/// All sink implementations must implement this trait. Calls are synchronous;
/// a sink must not hold OS resources between writes longer than it needs to.
pub trait DataSink {
    /// Sink name (used for logging)
    fn name(&self) -> &str;

    /// Write one transformed payload as a single line
    ///
    /// # Errors
    /// Returns write error (should include context)
    fn write(&mut self, payload: &str) -> Result<(), ContractError>;

    /// Flush buffer (if any)
    fn flush(&mut self) -> Result<(), ContractError>;
}
