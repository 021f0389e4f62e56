// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment file discovery and pairing.
//!
//! Files named `<tag>-<suffix>` directly inside the scanned directory are
//! split by environment and joined on `<suffix>` (the pair key). Anything
//! else in the directory is ignored.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Serialize;

use crate::config::{EnvRole, Environments};
use crate::error::{Error, Result};

/// A configuration file belonging to one environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvFile {
    pub role: EnvRole,
    /// Filename with `<tag>-` stripped.
    pub pair_key: String,
    pub path: PathBuf,
}

impl EnvFile {
    /// File name for display.
    pub fn name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.pair_key)
    }

    /// Read the file. Invalid UTF-8 is replaced rather than rejected.
    pub fn read(&self) -> Result<String> {
        let bytes = std::fs::read(&self.path).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }
}

/// Files sharing a pair key. At least one side is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePair {
    pub key: String,
    pub floating: Option<EnvFile>,
    pub pinned: Option<EnvFile>,
}

impl FilePair {
    pub fn file(&self, role: EnvRole) -> Option<&EnvFile> {
        match role {
            EnvRole::Floating => self.floating.as_ref(),
            EnvRole::Pinned => self.pinned.as_ref(),
        }
    }

    /// Both sides, when present.
    pub fn complete(&self) -> Option<(&EnvFile, &EnvFile)> {
        Some((self.floating.as_ref()?, self.pinned.as_ref()?))
    }

    /// The side with no file, for orphans.
    pub fn missing_role(&self) -> Option<EnvRole> {
        match (&self.floating, &self.pinned) {
            (Some(_), None) => Some(EnvRole::Pinned),
            (None, Some(_)) => Some(EnvRole::Floating),
            _ => None,
        }
    }

    pub fn is_orphan(&self) -> bool {
        self.missing_role().is_some()
    }
}

/// Match a file name against both prefixes. The longest prefix wins.
pub fn match_env_name<'a>(name: &'a str, envs: &Environments) -> Option<(EnvRole, &'a str)> {
    [EnvRole::Floating, EnvRole::Pinned]
        .into_iter()
        .filter_map(|role| {
            let tag = envs.tag(role);
            let suffix = name.strip_prefix(tag)?.strip_prefix('-')?;
            (!suffix.is_empty()).then_some((role, tag.len(), suffix))
        })
        .max_by_key(|&(_, len, _)| len)
        .map(|(role, _, suffix)| (role, suffix))
}

/// List environment-tagged regular files directly inside `dir`, by name.
pub fn list_env_files(dir: &Path, envs: &Environments) -> Result<Vec<EnvFile>> {
    let io_err = |source| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::debug!("skipping non UTF-8 file name: {}", path.display());
            continue;
        };
        let Some((role, suffix)) = match_env_name(name, envs) else {
            continue;
        };
        files.push(EnvFile {
            role,
            pair_key: suffix.to_string(),
            path: path.clone(),
        });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    tracing::debug!("found {} environment files in {}", files.len(), dir.display());
    Ok(files)
}

/// Join files on pair key, sorted by key.
pub fn pair_files(files: Vec<EnvFile>) -> Vec<FilePair> {
    let mut pairs: BTreeMap<String, FilePair> = BTreeMap::new();
    for file in files {
        let pair = pairs
            .entry(file.pair_key.clone())
            .or_insert_with(|| FilePair {
                key: file.pair_key.clone(),
                floating: None,
                pinned: None,
            });
        match file.role {
            EnvRole::Floating => pair.floating = Some(file),
            EnvRole::Pinned => pair.pinned = Some(file),
        }
    }
    pairs.into_values().collect()
}

/// Glob matcher for pair keys to skip.
#[derive(Debug, Clone)]
pub struct ExcludeMatcher {
    set: GlobSet,
}

impl ExcludeMatcher {
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|source| Error::InvalidGlob {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|source| Error::InvalidGlob {
            pattern: patterns.join(", "),
            source,
        })?;
        Ok(Self { set })
    }

    pub fn is_excluded(&self, key: &str) -> bool {
        self.set.is_match(key)
    }

    /// Drop excluded pairs.
    pub fn apply(&self, pairs: Vec<FilePair>) -> Vec<FilePair> {
        pairs
            .into_iter()
            .filter(|pair| {
                let excluded = self.is_excluded(&pair.key);
                if excluded {
                    tracing::debug!("excluded pair {}", pair.key);
                }
                !excluded
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod tests;
