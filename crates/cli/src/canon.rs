// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment canonicalization.
//!
//! Rewrites file content so that every token that differs only because the
//! file belongs to another environment becomes a fixed placeholder. Rules
//! run in order over the whole text:
//!
//! 1. environment tag as a whole word
//! 2. environment tag as a `/tag/` path segment
//! 3. environment tag as a `.tag.` domain infix
//! 4. environment tag as a `tag-` filename prefix
//! 5. registry image tag (`<account>.<domain>/<path>:<tag>`)
//!
//! Within each rule the longer tag goes first, so overlapping tags such as
//! `dev` and `dev-eu` are each replaced whole.
//!
//! Output is idempotent and never changes the line count.

use std::borrow::Cow;

use regex::{NoExpand, Regex};

use crate::config::Environments;
use crate::config::defaults::placeholder;
use crate::error::Result;
use crate::image::IMAGE_REF_PATTERN;
use crate::pattern::compile_one;

/// One substitution step.
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    replacement: Replacement,
}

#[derive(Debug, Clone)]
enum Replacement {
    /// Replace the whole match with a literal.
    Literal(String),
    /// Expand capture references (`${1}`).
    Expand(String),
}

impl Rule {
    fn literal(name: &'static str, pattern: &str, replacement: String) -> Result<Self> {
        Ok(Self {
            name,
            pattern: compile_one(pattern)?,
            replacement: Replacement::Literal(replacement),
        })
    }

    fn expand(name: &'static str, pattern: &str, template: String) -> Result<Self> {
        Ok(Self {
            name,
            pattern: compile_one(pattern)?,
            replacement: Replacement::Expand(template),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let changed = match &self.replacement {
            Replacement::Literal(s) => {
                owned_if_changed(self.pattern.replace_all(&text, NoExpand(s.as_str())))
            }
            Replacement::Expand(t) => owned_if_changed(self.pattern.replace_all(&text, t.as_str())),
        };
        match changed {
            Some(s) => Cow::Owned(s),
            None => text,
        }
    }
}

/// `replace_all` borrows its input when nothing matched.
fn owned_if_changed(replaced: Cow<'_, str>) -> Option<String> {
    match replaced {
        Cow::Borrowed(_) => None,
        Cow::Owned(s) => Some(s),
    }
}

/// Ordered rule pipeline for one pair of environment tags.
#[derive(Debug, Clone)]
pub struct Canonicalizer {
    rules: Vec<Rule>,
}

impl Canonicalizer {
    pub fn new(envs: &Environments) -> Result<Self> {
        let env = placeholder::ENV;
        let tags = envs.tags_longest_first().map(regex::escape);

        let mut rules = Vec::with_capacity(tags.len() * 4 + 1);
        for tag in &tags {
            rules.push(Rule::literal("word", &format!(r"\b{tag}\b"), env.to_string())?);
        }
        for tag in &tags {
            rules.push(Rule::literal("path-segment", &format!("/{tag}/"), format!("/{env}/"))?);
        }
        for tag in &tags {
            rules.push(Rule::literal(
                "domain-infix",
                &format!(r"\.{tag}\."),
                format!(".{env}."),
            )?);
        }
        for tag in &tags {
            rules.push(Rule::literal("name-prefix", &format!(r"\b{tag}-"), format!("{env}-"))?);
        }
        rules.push(Rule::expand(
            "image-tag",
            IMAGE_REF_PATTERN,
            format!("${{1}}/${{2}}:{}", placeholder::TAG),
        )?);

        Ok(Self { rules })
    }

    /// Rules in application order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Apply every rule in order. Borrows when nothing matched.
    pub fn canonicalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.rules
            .iter()
            .fold(Cow::Borrowed(text), |acc, rule| rule.apply(acc))
    }
}

#[cfg(test)]
#[path = "canon_tests.rs"]
mod tests;
