//! Dispatcher - fans a payload out to the configured sinks

use std::path::PathBuf;

use tracing::{debug, instrument};

use contracts::{ContractError, DataSink, OutputKind};

use crate::sinks::{ConsoleSink, FileSink, FileSinkConfig};

/// Default payload file name
pub const DEFAULT_OUTPUT_FILE: &str = "payloads.txt";

/// Dispatcher configuration
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// File shared by every `File` output
    pub output_path: PathBuf,
}

/// Builder for creating a Dispatcher
pub struct DispatcherBuilder {
    config: DispatcherConfig,
}

impl DispatcherBuilder {
    /// Create a new DispatcherBuilder
    pub fn new(config: DispatcherConfig) -> Self {
        Self { config }
    }

    /// Build the dispatcher with one sink per [`OutputKind`]
    #[instrument(name = "dispatcher_builder_build", skip(self), fields(output_path = %self.config.output_path.display()))]
    pub fn build(self) -> Dispatcher {
        let sinks = OutputKind::ALL
            .into_iter()
            .map(|kind| (kind, create_sink(kind, &self.config)))
            .collect();
        Dispatcher { sinks }
    }
}

/// Create the sink serving `kind`
fn create_sink(kind: OutputKind, config: &DispatcherConfig) -> Box<dyn DataSink> {
    match kind {
        OutputKind::Console => Box::new(ConsoleSink::new(kind.name())),
        OutputKind::File => Box::new(FileSink::new(
            kind.name(),
            FileSinkConfig::new(&config.output_path),
        )),
    }
}

/// Routes payloads to sinks by [`OutputKind`]
pub struct Dispatcher {
    sinks: Vec<(OutputKind, Box<dyn DataSink>)>,
}

impl Dispatcher {
    /// Create a dispatcher with custom sinks (for testing)
    pub fn with_sinks(sinks: Vec<(OutputKind, Box<dyn DataSink>)>) -> Self {
        Self { sinks }
    }

    /// Write `payload` to every output in `outputs`, in order.
    ///
    /// Outputs without a registered sink are skipped. The first write failure
    /// aborts the dispatch; outputs after it are not written.
    ///
    /// Returns the outputs that were written.
    #[instrument(name = "dispatcher_dispatch", skip(self, payload), fields(outputs = outputs.len()))]
    pub fn dispatch(
        &mut self,
        outputs: &[OutputKind],
        payload: &str,
    ) -> Result<Vec<OutputKind>, ContractError> {
        let mut written = Vec::with_capacity(outputs.len());

        for &output in outputs {
            let Some(sink) = self.sink_mut(output) else {
                debug!(output = %output, "No sink registered, skipping");
                continue;
            };
            sink.write(payload)?;
            written.push(output);
        }

        Ok(written)
    }

    /// Flush every sink
    pub fn flush(&mut self) -> Result<(), ContractError> {
        for (_, sink) in &mut self.sinks {
            sink.flush()?;
        }
        Ok(())
    }

    fn sink_mut(&mut self, output: OutputKind) -> Option<&mut (dyn DataSink + 'static)> {
        self.sinks
            .iter_mut()
            .find(|(kind, _)| *kind == output)
            .map(|(_, sink)| sink.as_mut())
    }
}

/// Convenience function to create a dispatcher writing files to `output_path`
pub fn create_dispatcher(output_path: impl Into<PathBuf>) -> Dispatcher {
    DispatcherBuilder::new(DispatcherConfig {
        output_path: output_path.into(),
    })
    .build()
}
