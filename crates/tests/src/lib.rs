//! # Integration Tests
//!
//! End-to-end tests across crates.
//!
//! Covers:
//! - Demo configuration files stay loadable and equivalent
//! - ConfigLoader -> MessageProcessor -> sinks on a real filesystem

#[cfg(test)]
mod config_tests {
    use config_loader::{inspect, ConfigFormat, ConfigLoader, ConfigWarning};

    const DEMO_JSON: &str = include_str!("../../../demos/config.json");
    const DEMO_TOML: &str = include_str!("../../../demos/config.toml");

    #[test]
    fn test_demo_configs_agree() {
        let json = ConfigLoader::load_from_str(DEMO_JSON, ConfigFormat::Json).unwrap();
        let toml = ConfigLoader::load_from_str(DEMO_TOML, ConfigFormat::Toml).unwrap();
        assert_eq!(json, toml);
        assert_eq!(json.len(), 3);
    }

    #[test]
    fn test_demo_config_warnings() {
        let profiles = ConfigLoader::load_from_str(DEMO_JSON, ConfigFormat::Json).unwrap();
        let warnings = inspect(&profiles);
        assert_eq!(
            warnings,
            vec![
                ConfigWarning::UnknownHandler {
                    sensor_model: "LEGACY-2".into(),
                    name: "reverse".into()
                },
                ConfigWarning::UnknownOutput {
                    sensor_model: "LEGACY-2".into(),
                    name: "Syslog".into()
                },
            ]
        );
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::cell::RefCell;
    use std::fs;
    use std::io::{self, Write};
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    use config_loader::ConfigLoader;
    use contracts::{ContractError, DataSink, OutputKind};
    use dispatcher::{ConsoleSink, Dispatcher, FileSink, FileSinkConfig};
    use handler_chain::{FixedClock, HandlerChain};
    use processor::MessageProcessor;
    use tempfile::{tempdir, TempDir};

    #[derive(Clone, Default)]
    struct Stdout(Rc<RefCell<Vec<u8>>>);

    impl Stdout {
        fn text(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    impl Write for Stdout {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Setup {
        dir: TempDir,
        stdout: Stdout,
    }

    impl Setup {
        fn new() -> Self {
            let dir = tempdir().unwrap();
            fs::copy(
                Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/config.json"),
                dir.path().join("config.json"),
            )
            .unwrap();
            Self {
                dir,
                stdout: Stdout::default(),
            }
        }

        fn payload_file(&self) -> PathBuf {
            self.dir.path().join("payloads.txt")
        }

        /// One invocation: load config, build sinks, process one message
        fn invoke(&self, raw: &str, now: i64) -> Result<String, ContractError> {
            let profiles = ConfigLoader::load_from_path(&self.dir.path().join("config.json"))?;
            let sinks: Vec<(OutputKind, Box<dyn DataSink>)> = vec![
                (
                    OutputKind::Console,
                    Box::new(ConsoleSink::with_writer("Console", self.stdout.clone())),
                ),
                (
                    OutputKind::File,
                    Box::new(FileSink::new("File", FileSinkConfig::new(self.payload_file()))),
                ),
            ];
            let mut processor = MessageProcessor::with_chain(
                profiles,
                HandlerChain::with_clock(FixedClock::new(now)),
                Dispatcher::with_sinks(sinks),
            );
            processor.process(raw).map(|outcome| outcome.payload)
        }
    }

    #[test]
    fn test_console_only_model() {
        let setup = Setup::new();
        let payload = setup
            .invoke(r#"{"sensor_id":"s1","model":"TH-100","payload":"  hello  "}"#, 0)
            .unwrap();

        assert_eq!(payload, "hello");
        assert_eq!(setup.stdout.text(), "hello\n");
        assert!(!setup.payload_file().exists());
    }

    #[test]
    fn test_invocations_append_to_shared_file() {
        let setup = Setup::new();

        setup
            .invoke(
                r#"{"sensor_id":"gps-a","model":"GPS-7","payload":" 52.5 "}"#,
                1_700_000_000,
            )
            .unwrap();
        setup
            .invoke(
                r#"{"sensor_id":"gps-b","model":"GPS-7","payload":"13.40"}"#,
                1_700_000_001,
            )
            .unwrap();
        setup
            .invoke(r#"{"sensor_id":"old","model":"LEGACY-2","payload":"abcdef"}"#, 0)
            .unwrap();

        let file = fs::read_to_string(setup.payload_file()).unwrap();
        assert_eq!(
            file,
            "52.5#_1700000000\n13.40_1700000001\nabcdef####\n"
        );
        assert_eq!(
            setup.stdout.text(),
            "52.5#_1700000000\n13.40_1700000001\n"
        );
    }

    #[test]
    fn test_unknown_model_produces_no_output() {
        let setup = Setup::new();
        let err = setup
            .invoke(r#"{"sensor_id":"s9","model":"NOPE","payload":"x"}"#, 0)
            .unwrap_err();

        assert!(matches!(err, ContractError::UnresolvedModel { .. }));
        assert!(setup.stdout.text().is_empty());
        assert!(!setup.payload_file().exists());
    }

    #[test]
    fn test_malformed_message() {
        let setup = Setup::new();
        for raw in [
            "",
            "not json",
            r#"{"sensor_id":"s1","model":"TH-100"}"#,
            r#"{"sensor_id":1,"model":"TH-100","payload":"x"}"#,
        ] {
            let err = setup.invoke(raw, 0).unwrap_err();
            assert!(matches!(err, ContractError::Parse { .. }), "input: {raw:?}");
        }
        assert!(setup.stdout.text().is_empty());
    }

    #[test]
    fn test_broken_config_is_load_error() {
        let setup = Setup::new();
        fs::write(setup.dir.path().join("config.json"), "{\"sensors\": 3}").unwrap();

        let err = setup
            .invoke(r#"{"sensor_id":"s1","model":"TH-100","payload":"x"}"#, 0)
            .unwrap_err();
        assert!(matches!(err, ContractError::ConfigLoad { .. }));
    }
}
