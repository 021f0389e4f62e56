// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorMode;
use crate::config::Environments;
use crate::report::RenderOptions;

/// Check that paired environment config files differ only by environment
#[derive(Parser)]
#[command(name = "envpair")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the environment files
    #[arg(value_name = "DIR", conflicts_with = "dir")]
    pub path: Option<PathBuf>,

    /// Directory holding the environment files (alternative to DIR)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Never print raw diffs (normalized non-env diffs are still shown)
    #[arg(long)]
    pub no_diff: bool,

    /// Also print the raw diff of env-only pairs
    #[arg(long)]
    pub show_env_only: bool,

    /// Extra allowlist regex for cross-env tokens (repeatable)
    #[arg(long, value_name = "REGEX")]
    pub allow: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "ENVPAIR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Floating environment tag (default: dev)
    #[arg(long, value_name = "TAG")]
    pub floating: Option<String>,

    /// Pinned environment tag (default: demo)
    #[arg(long, value_name = "TAG")]
    pub pinned: Option<String>,

    /// Image tag the floating environment must use (default: latest)
    #[arg(long, value_name = "TAG")]
    pub floating_tag: Option<String>,
}

impl Cli {
    /// Directory to scan: `DIR`, `--dir`, or the current directory.
    pub fn target_dir(&self) -> PathBuf {
        self.path
            .clone()
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_diff: !self.no_diff,
            show_env_only: self.show_env_only,
        }
    }

    /// Apply environment flags on top of the configured environments.
    pub fn apply_env_overrides(&self, envs: &mut Environments) {
        if let Some(floating) = &self.floating {
            envs.floating = floating.clone();
        }
        if let Some(pinned) = &self.pinned {
            envs.pinned = pinned.clone();
        }
        if let Some(tag) = &self.floating_tag {
            envs.floating_tag = tag.clone();
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
