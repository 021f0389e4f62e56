// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cross-environment leftovers.
//!
//! Flags lines of a file that mention the *other* environment's tag as a
//! whole word, e.g. `dev` inside `demo-app.yaml`. Lines matching the
//! allowlist are skipped. When one tag contains the other (`dev` and
//! `dev-eu`), a hit inside an occurrence of the file's own tag is not a
//! leftover.

use regex::Regex;

use super::FileCheck;
use crate::config::{EnvRole, Environments};
use crate::error::Result;
use crate::finding::Finding;
use crate::pairing::EnvFile;
use crate::pattern::{PatternList, compile_one};

/// Leftover check implementation.
pub struct LeftoverCheck {
    /// Whole-word matcher for the floating tag (searched in pinned files).
    floating_word: Regex,
    /// Whole-word matcher for the pinned tag (searched in floating files).
    pinned_word: Regex,
    floating: String,
    pinned: String,
    allow: PatternList,
}

impl LeftoverCheck {
    pub fn new(envs: &Environments, allow: PatternList) -> Result<Self> {
        Ok(Self {
            floating_word: compile_one(&format!(r"\b{}\b", regex::escape(&envs.floating)))?,
            pinned_word: compile_one(&format!(r"\b{}\b", regex::escape(&envs.pinned)))?,
            floating: envs.floating.clone(),
            pinned: envs.pinned.clone(),
            allow,
        })
    }

    fn word(&self, role: EnvRole) -> &Regex {
        match role {
            EnvRole::Floating => &self.floating_word,
            EnvRole::Pinned => &self.pinned_word,
        }
    }

    /// Token that must not appear in a file of `role`.
    fn forbidden_token(&self, role: EnvRole) -> &str {
        match role {
            EnvRole::Floating => &self.pinned,
            EnvRole::Pinned => &self.floating,
        }
    }

    /// Whether `line` of a `role` file mentions the other tag outside the
    /// file's own tag.
    fn mentions_other(&self, role: EnvRole, line: &str) -> bool {
        let own = self.word(role);
        self.word(role.other()).find_iter(line).any(|hit| {
            !own.find_iter(line)
                .any(|m| m.start() <= hit.start() && hit.end() <= m.end())
        })
    }
}

impl FileCheck for LeftoverCheck {
    fn name(&self) -> &'static str {
        "leftover"
    }

    fn description(&self) -> &'static str {
        "Other environment's tag left in a file"
    }

    fn check(&self, file: &EnvFile, content: &str) -> Vec<Finding> {
        let token = self.forbidden_token(file.role);

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| {
                self.mentions_other(file.role, line) && !self.allow.is_match(line)
            })
            .map(|(idx, line)| Finding::CrossEnvLeftover {
                file: file.path.clone(),
                line: idx as u32 + 1,
                text: line.to_string(),
                token: token.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "leftover_tests.rs"]
mod tests;
