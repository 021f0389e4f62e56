// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Findings: everything that makes a run exit non-zero.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::EnvRole;

/// Why an image tag violates the policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum PolicyReason {
    /// Floating file referenced something other than the floating tag.
    FloatingTagRequired { expected: String },
    /// Pinned file referenced the floating tag.
    FloatingTagForbidden { forbidden: String },
}

impl fmt::Display for PolicyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyReason::FloatingTagRequired { expected } => {
                write!(f, "floating environment files must use :{expected}")
            }
            PolicyReason::FloatingTagForbidden { forbidden } => {
                write!(f, "pinned environment files must NOT use :{forbidden}")
            }
        }
    }
}

/// A single reportable problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// A pair key present in only one environment.
    Orphan {
        pair_key: String,
        present: PathBuf,
        missing: EnvRole,
    },
    /// A non-environment diff that matched a suspicion pattern.
    SuspiciousDiff {
        pair_key: String,
        /// Changed lines that matched, with the pattern that matched them.
        matches: Vec<SuspiciousLine>,
    },
    /// The other environment's tag appears in a file.
    CrossEnvLeftover {
        file: PathBuf,
        line: u32,
        text: String,
        token: String,
    },
    /// An image reference breaks the tag policy.
    PolicyViolation {
        file: PathBuf,
        line: u32,
        image: String,
        tag: String,
        reason: PolicyReason,
    },
    /// The pair could not be analysed.
    DiffError {
        pair_key: String,
        message: String,
    },
}

/// A changed line that tripped the suspicion heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuspiciousLine {
    pub pattern: String,
    /// Changed line including its `+`/`-` marker.
    pub line: String,
}

impl Finding {
    /// Short label used in text output.
    pub fn label(&self) -> &'static str {
        match self {
            Finding::Orphan { .. } => "ORPHAN",
            Finding::SuspiciousDiff { .. } => "SUSPICIOUS",
            Finding::CrossEnvLeftover { .. } => "CROSS-ENV",
            Finding::PolicyViolation { .. } => "TAG POLICY",
            Finding::DiffError { .. } => "DIFF ERROR",
        }
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Orphan {
                pair_key,
                present,
                missing,
            } => write!(
                f,
                "{pair_key}: {} has no {missing} counterpart",
                file_name(present)
            ),
            Finding::SuspiciousDiff { pair_key, matches } => write!(
                f,
                "{pair_key}: suspicious non-env differences detected ({} line(s))",
                matches.len()
            ),
            Finding::CrossEnvLeftover {
                file,
                line,
                text,
                token,
            } => write!(f, "{}:{line}: contains '{token}' | {text}", file_name(file)),
            Finding::PolicyViolation {
                file,
                line,
                image,
                tag,
                reason,
            } => write!(
                f,
                "{}:{line}: {reason} but found :{tag} ({image}:{tag})",
                file_name(file)
            ),
            Finding::DiffError { pair_key, message } => {
                write!(f, "{pair_key}: could not diff pair: {message}")
            }
        }
    }
}

#[cfg(test)]
#[path = "finding_tests.rs"]
mod tests;
