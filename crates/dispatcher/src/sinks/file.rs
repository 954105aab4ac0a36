//! FileSink - appends payloads to a shared text file

use contracts::{ContractError, DataSink};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, instrument};

/// Configuration for FileSink
#[derive(Debug, Clone)]
pub struct FileSinkConfig {
    /// File that receives one payload per line
    pub path: PathBuf,
}

impl FileSinkConfig {
    /// Config targeting `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Sink that appends payload lines to a file.
///
/// The file is opened in append mode for each write and closed before the
/// write returns, so no handle outlives a single payload.
pub struct FileSink {
    name: String,
    config: FileSinkConfig,
}

impl FileSink {
    /// Create a new FileSink
    ///
    /// The file is not touched until the first write.
    pub fn new(name: impl Into<String>, config: FileSinkConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    fn append_line(&self, payload: &str) -> std::io::Result<()> {
        let mut line = String::with_capacity(payload.len() + 1);
        line.push_str(payload);
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.config.path)?;
        // One write call per line keeps lines whole under O_APPEND
        file.write_all(line.as_bytes())
    }
}

impl DataSink for FileSink {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(
        name = "file_sink_write",
        skip(self, payload),
        fields(sink = %self.name, path = %self.config.path.display())
    )]
    fn write(&mut self, payload: &str) -> Result<(), ContractError> {
        self.append_line(payload).map_err(|e| {
            error!(sink = %self.name, error = %e, "Write failed");
            ContractError::sink_write(&self.name, format!("{}: {e}", self.config.path.display()))
        })
    }

    fn flush(&mut self) -> Result<(), ContractError> {
        // Handle is already closed after each write
        Ok(())
    }
}
