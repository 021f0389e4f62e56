// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Two-pass diff classification.
//!
//! Pass 1 diffs the raw files; identical files stop there. Otherwise both
//! sides are canonicalized independently and diffed again: an empty
//! normalized diff means every difference is explained by the environment,
//! anything left over needs a human.

use serde::Serialize;

use crate::canon::Canonicalizer;
use crate::diff::{DiffStats, UnifiedDiff, unified_diff};

/// Relationship between the two files of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    /// Byte-identical.
    None,
    /// Differences vanish after canonicalization.
    EnvOnly,
    /// Differences survive canonicalization.
    NonEnv,
    /// The pair could not be diffed.
    Error,
}

impl DiffKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DiffKind::None => "none",
            DiffKind::EnvOnly => "env_only",
            DiffKind::NonEnv => "non_env",
            DiffKind::Error => "error",
        }
    }
}

/// One side of a pair, ready to diff.
#[derive(Debug, Clone, Copy)]
pub struct DiffSide<'a> {
    pub name: &'a str,
    pub content: &'a str,
}

/// Classification outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffResult {
    pub kind: DiffKind,
    pub raw: UnifiedDiff,
    /// Present whenever the normalized pass ran.
    pub normalized: Option<UnifiedDiff>,
    /// Why the pair could not be diffed.
    pub error: Option<String>,
}

impl DiffResult {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Error,
            raw: UnifiedDiff::default(),
            normalized: None,
            error: Some(message.into()),
        }
    }

    pub fn stats(&self) -> DiffStats {
        self.raw.stats
    }

    pub fn normalized_stats(&self) -> Option<DiffStats> {
        self.normalized.as_ref().map(|d| d.stats)
    }
}

/// Classify `old` against `new` (diffed old → new).
pub fn classify(canon: &Canonicalizer, old: DiffSide<'_>, new: DiffSide<'_>) -> DiffResult {
    let raw = unified_diff(old.content, new.content, old.name, new.name);
    if raw.is_empty() {
        return DiffResult {
            kind: DiffKind::None,
            raw,
            normalized: None,
            error: None,
        };
    }

    let old_norm = canon.canonicalize(old.content);
    let new_norm = canon.canonicalize(new.content);
    let normalized = unified_diff(
        &old_norm,
        &new_norm,
        &format!("{}.norm", old.name),
        &format!("{}.norm", new.name),
    );

    let kind = if normalized.is_empty() {
        DiffKind::EnvOnly
    } else {
        DiffKind::NonEnv
    };
    tracing::debug!(
        "classified {} vs {}: {} (raw {:?}, normalized {:?})",
        old.name,
        new.name,
        kind.as_str(),
        raw.stats,
        normalized.stats
    );

    DiffResult {
        kind,
        raw,
        normalized: Some(normalized),
        error: None,
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
