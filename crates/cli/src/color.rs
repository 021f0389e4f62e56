// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color selection and the report color scheme.

use std::io::IsTerminal;

use termcolor::{Color, ColorChoice, ColorSpec};

/// `--color` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve the color choice for stdout. `--no-color` always wins.
pub fn resolve_color(mode: ColorMode, no_color: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto => {
            let disabled = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
            if !disabled && std::io::stdout().is_terminal() {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        }
    }
}

/// Color specs used by the text report.
pub mod scheme {
    use super::*;

    fn fg(color: Color) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color));
        spec
    }

    fn bold_fg(color: Color) -> ColorSpec {
        let mut spec = fg(color);
        spec.set_bold(true);
        spec
    }

    /// Section banners and titles.
    pub fn header() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// No-diff and env-only classifications, clean summary.
    pub fn pass() -> ColorSpec {
        bold_fg(Color::Green)
    }

    /// Suspicious diffs, errors, findings.
    pub fn fail() -> ColorSpec {
        bold_fg(Color::Red)
    }

    /// Informational non-env diffs.
    pub fn warn() -> ColorSpec {
        bold_fg(Color::Yellow)
    }

    pub fn path() -> ColorSpec {
        fg(Color::Cyan)
    }

    pub fn hunk() -> ColorSpec {
        fg(Color::Cyan)
    }

    pub fn added() -> ColorSpec {
        fg(Color::Green)
    }

    pub fn removed() -> ColorSpec {
        fg(Color::Red)
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
