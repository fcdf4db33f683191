//! Common test utilities for tally integration tests.
//!
//! Provides `TestEnv` for isolated test environments that don't touch the
//! developer's own todos.json.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
pub use tempfile::TempDir;

/// A test environment with an isolated working directory.
///
/// The `td()` method returns a `Command` whose cwd is pinned to a fresh
/// temp directory, so the default relative `todos.json` lands in isolation
/// and tests stay parallel-safe.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with an isolated directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Get a Command for the td binary running in the isolated directory.
    pub fn td(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_td"));
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Get the path to the isolated directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get the path of the default backing file inside the environment.
    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("todos.json")
    }

    /// Read and parse the default backing file.
    pub fn read_store(&self) -> serde_json::Value {
        let contents = std::fs::read_to_string(self.store_path()).unwrap();
        serde_json::from_str(&contents).unwrap()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
