// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Loads `envpair.toml`. Every section is optional; missing keys fall back
//! to the values in [`defaults`].

pub mod defaults;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Full configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config format version.
    #[serde(default = "Config::default_version")]
    pub version: u32,

    /// Environment tags and image tag policy.
    #[serde(default)]
    pub envs: Environments,

    /// Check tuning.
    #[serde(default)]
    pub check: CheckConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            envs: Environments::default(),
            check: CheckConfig::default(),
        }
    }
}

impl Config {
    fn default_version() -> u32 {
        defaults::CONFIG_VERSION
    }

    /// Parse config from TOML text. `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate values that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.version != defaults::CONFIG_VERSION {
            return Err(Error::InvalidConfig(format!(
                "unsupported version {} (expected {})",
                self.version,
                defaults::CONFIG_VERSION
            )));
        }
        self.envs.validate()
    }
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Config::parse(&content, path)
}

/// Which side of a pair a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvRole {
    /// Deploys the floating image tag.
    Floating,
    /// Must never deploy the floating image tag.
    Pinned,
}

impl EnvRole {
    pub fn other(self) -> Self {
        match self {
            EnvRole::Floating => EnvRole::Pinned,
            EnvRole::Pinned => EnvRole::Floating,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EnvRole::Floating => "floating",
            EnvRole::Pinned => "pinned",
        }
    }
}

impl fmt::Display for EnvRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two environment tags and the floating image tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Environments {
    /// Floating environment tag (filename prefix).
    #[serde(default = "Environments::default_floating")]
    pub floating: String,

    /// Pinned environment tag (filename prefix).
    #[serde(default = "Environments::default_pinned")]
    pub pinned: String,

    /// Image tag the floating environment must use.
    #[serde(default = "Environments::default_floating_tag")]
    pub floating_tag: String,
}

impl Default for Environments {
    fn default() -> Self {
        Self {
            floating: Self::default_floating(),
            pinned: Self::default_pinned(),
            floating_tag: Self::default_floating_tag(),
        }
    }
}

impl Environments {
    fn default_floating() -> String {
        defaults::envs::FLOATING.to_string()
    }

    fn default_pinned() -> String {
        defaults::envs::PINNED.to_string()
    }

    fn default_floating_tag() -> String {
        defaults::envs::FLOATING_TAG.to_string()
    }

    /// Environment tag for a role.
    pub fn tag(&self, role: EnvRole) -> &str {
        match role {
            EnvRole::Floating => &self.floating,
            EnvRole::Pinned => &self.pinned,
        }
    }

    /// Both tags, longest first so that `dev-eu` is tried before `dev`.
    pub fn tags_longest_first(&self) -> [&str; 2] {
        let mut tags = [self.floating.as_str(), self.pinned.as_str()];
        tags.sort_by_key(|t| std::cmp::Reverse(t.len()));
        tags
    }

    /// Regex alternation of both tags, escaped, longest first (`demo|dev`).
    pub fn tag_alternation(&self) -> String {
        let [first, second] = self.tags_longest_first();
        format!("{}|{}", regex::escape(first), regex::escape(second))
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("envs.floating", &self.floating),
            ("envs.pinned", &self.pinned),
            ("envs.floating_tag", &self.floating_tag),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("{name} must not be empty")));
            }
            if value.contains('/') {
                return Err(Error::InvalidConfig(format!(
                    "{name} must not contain '/': {value}"
                )));
            }
        }
        if self.floating == self.pinned {
            return Err(Error::InvalidConfig(format!(
                "envs.floating and envs.pinned must differ (both are `{}`)",
                self.floating
            )));
        }
        Ok(())
    }
}

/// Check tuning.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Extra allowlist regexes for the leftover scanner.
    pub allow: Vec<String>,

    /// Extra suspicion regexes for non-environment diffs.
    pub suspicious: Vec<String>,

    /// Glob patterns on pair keys to skip entirely.
    pub exclude: Vec<String>,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
