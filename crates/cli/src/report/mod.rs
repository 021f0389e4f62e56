// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run report and output formats.
//!
//! The report is built once per run by the runner and only read afterwards.
//! Formatters render it as text (default) or JSON.

mod json;
mod text;

use std::path::{Path, PathBuf};

use serde::Serialize;
use termcolor::WriteColor;

use crate::checks::Suspicion;
use crate::classify::{DiffKind, DiffResult};
use crate::cli::OutputFormat;
use crate::error::ExitCode;
use crate::finding::Finding;
use crate::pairing::EnvFile;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Analysis of one complete pair.
#[derive(Debug, Clone)]
pub struct PairSection {
    pub key: String,
    pub pinned: PathBuf,
    pub floating: PathBuf,
    pub diff: DiffResult,
    /// Set for `NonEnv` pairs.
    pub suspicion: Option<Suspicion>,
    /// Findings attached to this pair, in detection order.
    pub findings: Vec<Finding>,
}

impl PairSection {
    pub fn new(key: &str, pinned: &EnvFile, floating: &EnvFile) -> Self {
        Self {
            key: key.to_string(),
            pinned: pinned.path.clone(),
            floating: floating.path.clone(),
            diff: DiffResult::error("not analysed"),
            suspicion: None,
            findings: Vec::new(),
        }
    }

    pub fn pinned_name(&self) -> String {
        display_name(&self.pinned)
    }

    pub fn floating_name(&self) -> String {
        display_name(&self.floating)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Everything a run found.
#[derive(Debug, Clone)]
pub struct Report {
    pub root: PathBuf,
    /// Complete pairs, sorted by key.
    pub sections: Vec<PairSection>,
    /// Every finding of the run, in pair key order.
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            sections: Vec::new(),
            findings: Vec::new(),
        }
    }

    pub fn push_orphan(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn push_section(&mut self, section: PairSection) {
        self.findings.extend(section.findings.iter().cloned());
        self.sections.push(section);
    }

    pub fn orphans(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| matches!(f, Finding::Orphan { .. }))
    }

    pub fn count_kind(&self, kind: DiffKind) -> usize {
        self.sections.iter().filter(|s| s.diff.kind == kind).count()
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.findings.is_empty() {
            ExitCode::Success
        } else {
            ExitCode::FindingsFound
        }
    }
}

/// What to include besides classifications, stats and findings.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Print the raw diff of `NonEnv` pairs as context.
    pub show_diff: bool,
    /// Also print the raw diff of `EnvOnly` pairs.
    pub show_env_only: bool,
}

impl RenderOptions {
    /// Whether the raw diff of a pair of `kind` is printed.
    pub fn shows_raw(&self, kind: DiffKind) -> bool {
        match kind {
            DiffKind::NonEnv => self.show_diff,
            DiffKind::EnvOnly => self.show_diff && self.show_env_only,
            DiffKind::None | DiffKind::Error => false,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_diff: true,
            show_env_only: false,
        }
    }
}

/// Trait for rendering a report.
pub trait ReportFormatter {
    fn format_to(
        &self,
        writer: &mut dyn WriteColor,
        report: &Report,
        options: RenderOptions,
    ) -> anyhow::Result<()>;
}

/// Render `report` in `format` to `writer`.
pub fn format_report_to(
    writer: &mut dyn WriteColor,
    format: OutputFormat,
    report: &Report,
    options: RenderOptions,
) -> anyhow::Result<()> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    formatter.format_to(writer, report, options)
}

/// Render `report` to a string without color.
pub fn format_report(
    format: OutputFormat,
    report: &Report,
    options: RenderOptions,
) -> anyhow::Result<String> {
    let mut buffer = termcolor::NoColor::new(Vec::new());
    format_report_to(&mut buffer, format, report, options)?;
    Ok(String::from_utf8(buffer.into_inner())?)
}

/// Serializable view of a section, shared by the JSON formatter.
#[derive(Serialize)]
struct SectionView<'a> {
    key: &'a str,
    pinned: &'a Path,
    floating: &'a Path,
    kind: DiffKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'static str>,
    stats: crate::diff::DiffStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized_stats: Option<crate::diff::DiffStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_diff: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized_diff: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    findings: &'a [Finding],
}

impl<'a> SectionView<'a> {
    fn new(section: &'a PairSection, options: RenderOptions) -> Self {
        let diff = &section.diff;
        let show_raw = options.shows_raw(diff.kind);
        Self {
            key: &section.key,
            pinned: &section.pinned,
            floating: &section.floating,
            kind: diff.kind,
            label: section.suspicion.as_ref().map(Suspicion::label),
            stats: diff.stats(),
            normalized_stats: diff.normalized_stats(),
            raw_diff: show_raw.then_some(diff.raw.text.as_str()),
            normalized_diff: (diff.kind == DiffKind::NonEnv)
                .then(|| diff.normalized.as_ref().map(|d| d.text.as_str()))
                .flatten(),
            error: diff.error.as_deref(),
            findings: &section.findings,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
