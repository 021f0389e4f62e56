// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io::Write;

use termcolor::{ColorSpec, WriteColor};

use crate::checks::Suspicion;
use crate::classify::DiffKind;
use crate::color::scheme;
use crate::diff::DiffStats;
use crate::finding::Finding;

use super::{PairSection, RenderOptions, Report, ReportFormatter};

/// Text format report formatter.
pub struct TextFormatter;

const BANNER_WIDTH: usize = 60;

impl ReportFormatter for TextFormatter {
    fn format_to(
        &self,
        writer: &mut dyn WriteColor,
        report: &Report,
        options: RenderOptions,
    ) -> anyhow::Result<()> {
        banner(writer, &format!("Env-pair check ({})", report.root.display()))?;

        let orphans: Vec<&Finding> = report.orphans().collect();
        if !orphans.is_empty() {
            writeln!(writer)?;
            colored(writer, &scheme::fail(), "Orphans (missing counterpart):")?;
            writeln!(writer)?;
            for orphan in orphans {
                writeln!(writer, " - {orphan}")?;
            }
        }

        for section in &report.sections {
            writeln!(writer)?;
            write_section(writer, section, options)?;
        }

        writeln!(writer)?;
        write_summary(writer, report)?;
        Ok(())
    }
}

fn write_section(
    w: &mut dyn WriteColor,
    section: &PairSection,
    options: RenderOptions,
) -> std::io::Result<()> {
    banner(
        w,
        &format!(
            "Pair: {}  <->  {}",
            section.pinned_name(),
            section.floating_name()
        ),
    )?;
    write!(w, "PAIR_KEY: ")?;
    colored(w, &scheme::path(), &section.key)?;
    writeln!(w)?;

    let diff = &section.diff;
    write!(w, "DIFF: ")?;
    match diff.kind {
        DiffKind::None => colored(w, &scheme::pass(), "none")?,
        DiffKind::EnvOnly => colored(
            w,
            &scheme::pass(),
            "env-only (after normalization: no diffs)",
        )?,
        DiffKind::NonEnv => {
            let (spec, label) = match &section.suspicion {
                Some(s) if s.is_suspicious() => (scheme::fail(), s.label()),
                _ => (scheme::warn(), Suspicion::Info.label()),
            };
            colored(w, &spec, &format!("NON-ENV (after normalization) [{label}]"))?;
        }
        DiffKind::Error => {
            let message = diff.error.as_deref().unwrap_or("unknown error");
            colored(w, &scheme::fail(), &format!("ERROR: {message}"))?;
        }
    }
    writeln!(w)?;

    if diff.kind != DiffKind::Error {
        write!(w, "STATS: raw {}", stats_line(diff.stats()))?;
        if let Some(normalized) = diff.normalized_stats() {
            write!(w, "; normalized {}", stats_line(normalized))?;
        }
        writeln!(w)?;
    }

    if diff.kind == DiffKind::NonEnv
        && let Some(normalized) = &diff.normalized
    {
        writeln!(w)?;
        writeln!(w, "NON-ENV DIFF (normalized):")?;
        write_diff(w, &normalized.text)?;
    }

    if options.shows_raw(diff.kind) {
        writeln!(w)?;
        writeln!(w, "FULL DIFF (original files):")?;
        write_diff(w, &diff.raw.text)?;
    }

    if !section.findings.is_empty() {
        writeln!(w)?;
    }
    for finding in &section.findings {
        write_finding(w, finding)?;
    }
    Ok(())
}

fn write_finding(w: &mut dyn WriteColor, finding: &Finding) -> std::io::Result<()> {
    colored(w, &scheme::fail(), &format!("{}:", finding.label()))?;
    writeln!(w, " {finding}")?;
    if let Finding::SuspiciousDiff { matches, .. } = finding {
        for hit in matches {
            writeln!(w, "  {}  [{}]", hit.line, hit.pattern)?;
        }
    }
    Ok(())
}

fn write_summary(w: &mut dyn WriteColor, report: &Report) -> std::io::Result<()> {
    banner(w, "Summary")?;
    writeln!(
        w,
        "Pairs: {} (none {}, env-only {}, non-env {}, error {}); orphans: {}",
        report.sections.len(),
        report.count_kind(DiffKind::None),
        report.count_kind(DiffKind::EnvOnly),
        report.count_kind(DiffKind::NonEnv),
        report.count_kind(DiffKind::Error),
        report.orphans().count(),
    )?;

    if report.findings.is_empty() {
        colored(w, &scheme::pass(), "No findings.")?;
        writeln!(w)?;
        return Ok(());
    }

    colored(w, &scheme::fail(), &format!("Findings: {}", report.findings.len()))?;
    writeln!(w)?;
    for finding in &report.findings {
        writeln!(w, " - {}: {finding}", finding.label())?;
    }
    Ok(())
}

fn stats_line(stats: DiffStats) -> String {
    format!(
        "{} hunk(s) +{} -{}",
        stats.hunks, stats.additions, stats.deletions
    )
}

/// Print a unified diff, coloring headers, hunk ranges and changed lines.
fn write_diff(w: &mut dyn WriteColor, text: &str) -> std::io::Result<()> {
    for line in text.lines() {
        let spec = if line.starts_with("+++") || line.starts_with("---") {
            Some(scheme::header())
        } else if line.starts_with("@@") {
            Some(scheme::hunk())
        } else if line.starts_with('+') {
            Some(scheme::added())
        } else if line.starts_with('-') {
            Some(scheme::removed())
        } else {
            None
        };
        match spec {
            Some(spec) => colored(w, &spec, line)?,
            None => write!(w, "{line}")?,
        }
        writeln!(w)?;
    }
    Ok(())
}

fn banner(w: &mut dyn WriteColor, title: &str) -> std::io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(w, "{rule}")?;
    colored(w, &scheme::header(), title)?;
    writeln!(w)?;
    writeln!(w, "{rule}")
}

fn colored(w: &mut dyn WriteColor, spec: &ColorSpec, text: &str) -> std::io::Result<()> {
    w.set_color(spec)?;
    write!(w, "{text}")?;
    w.reset()
}
