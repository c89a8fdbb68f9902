//! Common test utilities for CLI integration tests.
//!
//! Every command built here runs with `HOME` and the working directory
//! pointed at a fresh temporary directory, and with the `PATHWISE_*`
//! variables cleared, so user configuration on the host never leaks in.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENV_VARS: [&str; 7] = [
    "PATHWISE_SEPARATOR",
    "PATHWISE_ABSOLUTE",
    "PATHWISE_CONTAINMENT",
    "PATHWISE_REMOVE_ROOT",
    "PATHWISE_CONFIG",
    "PATHWISE_LOG_MODE",
    "USERPROFILE",
];

/// Isolated test environment.
pub struct TestEnv {
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

    /// Get a command builder for the pathwise binary, isolated from the
    /// host configuration.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathwise").expect("Failed to find pathwise binary");
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.temp_path).current_dir(&self.temp_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// The temp path as a string.
    pub fn path_str(&self) -> &str {
        self.temp_path.to_str().expect("temp path is not UTF-8")
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file with `contents`, creating parent directories as needed.
    pub fn create_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Build the `files/star/{trek/enterprise,wars}` tree.
    pub fn create_star_tree(&self) -> PathBuf {
        self.create_dir("files/star/trek/enterprise");
        self.create_file("files/star/wars/falcon.txt", "punch it");
        self.temp_path.join("files")
    }

    /// Canonical form of `relative` below the temp path.
    pub fn canonical(&self, relative: &str) -> String {
        self.temp_path
            .join(relative)
            .canonicalize()
            .expect("path missing")
            .to_str()
            .expect("canonical path is not UTF-8")
            .to_string()
    }

    /// Run the command and return trimmed stdout, asserting success.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run pathwise");

        assert!(
            output.status.success(),
            "pathwise {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
