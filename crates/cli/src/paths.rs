//! Resolution of configuration and output paths.
//!
//! Relative paths are anchored at a base directory, which defaults to the
//! directory holding the executable so that `config.json` and `payloads.txt`
//! live alongside the program regardless of the working directory.

use std::path::{Path, PathBuf};

use crate::cli::ConfigArgs;

/// Directory containing the running executable, or `.` if unknown
pub fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Anchor `path` at `base` unless it is already absolute
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

impl ConfigArgs {
    /// Base directory for relative paths
    pub fn base_dir(&self) -> PathBuf {
        self.base_dir.clone().unwrap_or_else(executable_dir)
    }

    /// Fully resolved configuration path
    pub fn config_path(&self) -> PathBuf {
        resolve(&self.base_dir(), &self.config)
    }
}
