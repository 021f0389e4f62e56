// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing envpair CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the envpair binary.
///
/// Config and log environment variables are cleared so the host
/// environment cannot leak into a spec.
pub fn envpair_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("envpair"));
    cmd.env_remove("ENVPAIR_CONFIG")
        .env_remove("ENVPAIR_LOG")
        .env_remove("NO_COLOR");
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Scratch directory for specs that need their own files.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Project pre-populated with (name, content) files.
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let project = Self::empty();
        for (name, content) in files {
            project.file(name, content);
        }
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root.
    pub fn file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }
}

/// Run envpair on `dir` with extra args and return parsed JSON output.
pub fn json_output(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = envpair_cmd()
        .arg(dir)
        .args(["-o", "json"])
        .args(args)
        .output()
        .expect("command should run");
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}
