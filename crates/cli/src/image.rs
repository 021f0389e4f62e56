// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Registry image references.
//!
//! A reference looks like
//! `123456789012.dkr.ecr.us-east-1.amazonaws.com/team/service:latest`:
//! a 12-digit account id, a dotted registry domain, a repository path,
//! and a tag. The canonicalizer and the tag policy share this pattern.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::pattern::byte_offset_to_line;

/// Capture groups: 1 = registry host, 2 = repository path, 3 = tag.
pub const IMAGE_REF_PATTERN: &str =
    r"\b([0-9]{12}\.(?:[a-z0-9-]+\.)+[a-z]{2,})/([A-Za-z0-9._\-/]+):([A-Za-z0-9._-]+)";

#[allow(clippy::expect_used)]
static IMAGE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IMAGE_REF_PATTERN).expect("valid regex pattern"));

/// An image reference found in file content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageReference {
    /// Account id plus registry domain.
    pub registry_host: String,
    /// Repository path, verbatim.
    pub repository_path: String,
    pub tag: String,
    /// 1-based line of the reference.
    pub line: u32,
}

impl ImageReference {
    /// `host/path` without the tag.
    pub fn image(&self) -> String {
        format!("{}/{}", self.registry_host, self.repository_path)
    }
}

/// Extract every image reference in `content`, in order of appearance.
pub fn extract_images(content: &str) -> Vec<ImageReference> {
    IMAGE_REF
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(ImageReference {
                registry_host: caps.get(1)?.as_str().to_string(),
                repository_path: caps.get(2)?.as_str().to_string(),
                tag: caps.get(3)?.as_str().to_string(),
                line: byte_offset_to_line(content, whole.start()),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "image_tests.rs"]
mod tests;
