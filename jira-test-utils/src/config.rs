//! Temporary configuration files for testing

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A `jira.toml` in its own temporary directory, removed on drop
pub struct ConfigFileGuard {
  temp_dir: TempDir,
  path: PathBuf,
}

impl ConfigFileGuard {
  /// Write `content` to a fresh `jira.toml`
  pub fn new(content: &str) -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("jira.toml");
    fs::write(&path, content).expect("Failed to write test config file");

    Self { temp_dir, path }
  }

  /// A config path inside a temporary directory, with no file written
  pub fn missing() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("jira.toml");

    Self { temp_dir, path }
  }

  /// Path to the config file
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Directory holding the config file
  pub fn dir(&self) -> &Path {
    self.temp_dir.path()
  }
}
