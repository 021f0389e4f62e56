// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! envpair library.
//!
//! Pairs environment-prefixed configuration files (`dev-app.yaml` with
//! `demo-app.yaml`), checks that their differences are explained by the
//! environment name alone, and enforces the image tag policy for each side.

pub mod canon;
pub mod checks;
pub mod classify;
pub mod cli;
pub mod color;
pub mod config;
pub mod diff;
pub mod discovery;
pub mod error;
pub mod finding;
pub mod image;
pub mod pairing;
pub mod pattern;
pub mod report;
pub mod runner;

#[cfg(test)]
pub mod test_utils;

pub use canon::Canonicalizer;
pub use classify::{DiffKind, DiffResult};
pub use config::{Config, EnvRole, Environments};
pub use diff::{DiffStats, UnifiedDiff};
pub use error::{Error, ExitCode};
pub use finding::Finding;
pub use pairing::{EnvFile, FilePair};
pub use report::Report;
pub use runner::Analyzer;
