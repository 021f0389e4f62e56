// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suspicion heuristic for non-environment diffs.
//!
//! Not every difference that survives canonicalization is a mistake; a
//! changed parameter is often intentional. Only changed lines that touch
//! hostnames, environment path segments or IAM trust settings escalate a
//! pair to a finding. Everything else is reported as `INFO`.

use crate::diff::{DiffLine, UnifiedDiff};
use crate::finding::SuspiciousLine;
use crate::pattern::PatternList;

/// Verdict for a non-environment diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suspicion {
    /// Visible in the report but not a finding.
    Info,
    /// At least one changed line matched.
    Suspicious(Vec<SuspiciousLine>),
}

impl Suspicion {
    pub fn is_suspicious(&self) -> bool {
        matches!(self, Suspicion::Suspicious(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Suspicion::Info => "INFO",
            Suspicion::Suspicious(_) => "SUSPICIOUS",
        }
    }
}

pub struct SuspicionHeuristic {
    patterns: PatternList,
}

impl SuspicionHeuristic {
    pub fn new(patterns: PatternList) -> Self {
        Self { patterns }
    }

    /// Check the changed lines of a normalized diff.
    pub fn evaluate(&self, normalized: &UnifiedDiff) -> Suspicion {
        let hits: Vec<SuspiciousLine> = normalized
            .changed_lines()
            .filter_map(|line| {
                let pattern = self.patterns.first_match(line.text())?;
                let marker = match line {
                    DiffLine::Added(_) => '+',
                    _ => '-',
                };
                Some(SuspiciousLine {
                    pattern: pattern.as_str().to_string(),
                    line: format!("{marker}{}", line.text()),
                })
            })
            .collect();

        if hits.is_empty() {
            Suspicion::Info
        } else {
            Suspicion::Suspicious(hits)
        }
    }
}

#[cfg(test)]
#[path = "suspicious_tests.rs"]
mod tests;
