// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! Config structs delegate to these via their `default_*` methods.

/// Name of the config file looked up next to the scanned directory.
pub const CONFIG_FILE: &str = "envpair.toml";

/// Supported config file version.
pub const CONFIG_VERSION: u32 = 1;

/// Default environment tags.
pub mod envs {
    /// Fast-iteration environment; always deploys the floating image tag.
    pub const FLOATING: &str = "dev";

    /// Reproducible environment; never deploys the floating image tag.
    pub const PINNED: &str = "demo";

    /// Image tag that tracks the most recent build.
    pub const FLOATING_TAG: &str = "latest";
}

/// Placeholders written by the canonicalizer.
pub mod placeholder {
    pub const ENV: &str = "__ENV__";
    pub const TAG: &str = "__TAG__";
}

/// Built-in allowlist for the cross-environment leftover scanner.
pub mod allow {
    use crate::config::Environments;

    /// Lines matching any of these never count as leftovers.
    pub fn patterns(envs: &Environments) -> Vec<String> {
        let tags = envs.tag_alternation();
        vec![
            // Shared registry repository with an environment path segment
            format!(r"\b[0-9]{{12}}\.(?:[a-z0-9-]+\.)+[a-z]{{2,}}/(?:[A-Za-z0-9._-]+/)*(?:{tags})/"),
            // Generic ARN prefix
            r"arn:aws:[^:]+:[^:]*:[^:]*:".to_string(),
        ]
    }
}

/// Built-in suspicion patterns for non-environment diffs.
pub mod suspicious {
    use super::placeholder;
    use crate::config::Environments;

    /// Patterns checked against the changed lines of a normalized diff.
    ///
    /// Environment segments are matched both as raw tags and as the
    /// placeholder, since normalization has usually already rewritten them.
    pub fn patterns(envs: &Environments) -> Vec<String> {
        let segment = format!("{}|{}", envs.tag_alternation(), placeholder::ENV);
        vec![
            format!(r"\.(?:{segment})\."),
            format!(r"s3://[^ \n]*/(?:{segment})[^ \n]*"),
            format!(r"/(?:{segment})/"),
            r"arn:aws:iam::.*:oidc-provider/".to_string(),
            "AssumeRole".to_string(),
            "Principal".to_string(),
        ]
    }
}
