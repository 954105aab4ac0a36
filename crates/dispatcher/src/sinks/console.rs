//! ConsoleSink - prints payloads to standard output

use contracts::{ContractError, DataSink};
use std::io::{self, Stdout, Write};
use tracing::instrument;

/// Sink that writes one payload per line to a writer (stdout by default)
pub struct ConsoleSink<W = Stdout> {
    name: String,
    out: W,
}

impl ConsoleSink<Stdout> {
    /// Create a ConsoleSink on standard output
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_writer(name, io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Create a ConsoleSink on an arbitrary writer
    pub fn with_writer(name: impl Into<String>, out: W) -> Self {
        Self {
            name: name.into(),
            out,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DataSink for ConsoleSink<W> {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(name = "console_sink_write", skip(self, payload), fields(sink = %self.name))]
    fn write(&mut self, payload: &str) -> Result<(), ContractError> {
        writeln!(self.out, "{payload}")
            .and_then(|()| self.out.flush())
            .map_err(|e| ContractError::sink_write(&self.name, e.to_string()))
    }

    fn flush(&mut self) -> Result<(), ContractError> {
        self.out
            .flush()
            .map_err(|e| ContractError::sink_write(&self.name, e.to_string()))
    }
}
