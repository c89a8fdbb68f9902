//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the pathwise library against a real directory tree.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory holding a small tree:
///
/// ```text
/// <root>/files/star/trek/enterprise/
/// <root>/files/star/trek/enterprise/bridge.txt
/// <root>/files/star/wars/
/// <root>/files/star/wars/falcon.txt
/// ```
///
/// The tree is deleted when the fixture is dropped.
pub struct TreeFixture {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Create the tree.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let star = temp_dir.path().join("files").join("star");

        fs::create_dir_all(star.join("trek").join("enterprise")).unwrap();
        fs::create_dir_all(star.join("wars")).unwrap();
        fs::write(
            star.join("trek").join("enterprise").join("bridge.txt"),
            "engage",
        )
        .unwrap();
        fs::write(star.join("wars").join("falcon.txt"), "punch it").unwrap();

        Self { temp_dir }
    }

    /// The fixture root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The fixture root as a string.
    pub fn root_str(&self) -> &str {
        self.root().to_str().expect("temp dir is not UTF-8")
    }

    /// Canonical form of `relative` below the root, as a string.
    pub fn canonical(&self, relative: &str) -> String {
        let path: PathBuf = self.root().join(relative);
        dunce::canonicalize(path)
            .expect("fixture path missing")
            .to_str()
            .expect("canonical path is not UTF-8")
            .to_string()
    }
}

/// Join `parts` with the platform separator.
#[allow(dead_code)]
pub fn native(parts: &[&str]) -> String {
    parts.join(std::path::MAIN_SEPARATOR_STR)
}
