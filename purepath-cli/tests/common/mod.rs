//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated working directory
//! - Command builder helpers that ignore the caller's environment
//! - Helpers for writing configuration files

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary consults.
const PUREPATH_VARS: [&str; 4] = [
    "PUREPATH_CONFIG",
    "PUREPATH_FORMAT",
    "PUREPATH_RELATIVE_MODE",
    "PUREPATH_LOG_MODE",
];

/// Test environment with an isolated working directory.
///
/// Commands run inside a fresh temporary directory so that configuration
/// discovery only sees files the test writes.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder running in this environment's directory with
    /// every `PUREPATH_*` variable cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("purepath").expect("Failed to find purepath binary");
        cmd.current_dir(&self.temp_path);
        for var in PUREPATH_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file relative to the environment root and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write a `purepath.yaml` at the environment root.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        self.write_file("purepath.yaml", contents)
    }

    /// Run a command and return its trimmed stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run purepath");
        assert!(
            output.status.success(),
            "command {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("stdout is not UTF-8")
            .trim_end()
            .to_string()
    }

    /// Run a command with `--format json` and parse its stdout.
    pub fn json_of(&self, args: &[&str]) -> serde_json::Value {
        let mut all = vec!["--format", "json"];
        all.extend_from_slice(args);
        serde_json::from_str(&self.stdout_of(&all)).expect("stdout is not JSON")
    }
}
