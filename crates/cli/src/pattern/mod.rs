// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled regex lists used by the line checks.
//!
//! Allowlists and suspicion lists are user-extendable, so each source
//! pattern is compiled up front and reported by text when it fails.

use regex::Regex;

use crate::error::{Error, Result};

/// An ordered list of compiled line patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternList {
    patterns: Vec<Regex>,
}

impl PatternList {
    /// Compile every pattern, failing on the first invalid one.
    pub fn compile<I, S>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = sources
            .into_iter()
            .map(|s| compile_one(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// First pattern that matches anywhere in `line`.
    pub fn first_match(&self, line: &str) -> Option<&Regex> {
        self.patterns.iter().find(|p| p.is_match(line))
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.first_match(line).is_some()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Compile a single pattern, attaching the source text to the error.
pub fn compile_one(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source: Box::new(source),
    })
}

/// Convert a byte offset to a 1-based line number.
pub fn byte_offset_to_line(content: &str, offset: usize) -> u32 {
    let end = offset.min(content.len());
    content.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() as u32 + 1
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
