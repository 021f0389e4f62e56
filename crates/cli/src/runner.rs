// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential pair runner with error recovery.
//!
//! Each pair is analysed on its own: unreadable files and panics become a
//! `DiffError` finding for that pair and the run moves on. Every step
//! returns its findings; the runner folds them into the [`Report`].

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::canon::Canonicalizer;
use crate::checks::{FileCheck, LeftoverCheck, Suspicion, SuspicionHeuristic, TagPolicyCheck};
use crate::classify::{DiffKind, DiffResult, DiffSide, classify};
use crate::config::{Config, defaults};
use crate::error::Result;
use crate::finding::Finding;
use crate::pairing::{EnvFile, FilePair};
use crate::pattern::PatternList;
use crate::report::{PairSection, Report};

/// Everything needed to analyse pairs, compiled once per run.
pub struct Analyzer {
    canon: Canonicalizer,
    suspicion: SuspicionHeuristic,
    file_checks: Vec<Box<dyn FileCheck>>,
}

impl Analyzer {
    /// Build from config. `extra_allow` holds `--allow` patterns.
    pub fn new(config: &Config, extra_allow: &[String]) -> Result<Self> {
        let envs = &config.envs;
        envs.validate()?;

        let allow = PatternList::compile(
            defaults::allow::patterns(envs)
                .iter()
                .chain(&config.check.allow)
                .chain(extra_allow),
        )?;
        let suspicious = PatternList::compile(
            defaults::suspicious::patterns(envs)
                .iter()
                .chain(&config.check.suspicious),
        )?;
        tracing::debug!(
            "{} allowlist pattern(s), {} suspicion pattern(s)",
            allow.len(),
            suspicious.len()
        );

        let file_checks: Vec<Box<dyn FileCheck>> = vec![
            Box::new(TagPolicyCheck::new(envs)),
            Box::new(LeftoverCheck::new(envs, allow)?),
        ];
        for check in &file_checks {
            tracing::debug!("file check {}: {}", check.name(), check.description());
        }

        Ok(Self {
            canon: Canonicalizer::new(envs)?,
            suspicion: SuspicionHeuristic::new(suspicious),
            file_checks,
        })
    }

    /// Analyse a complete pair. Orphans are reported by [`run`].
    pub fn analyze_pair(&self, key: &str, floating: &EnvFile, pinned: &EnvFile) -> PairSection {
        let mut section = PairSection::new(key, pinned, floating);

        let pinned_text = pinned.read();
        let floating_text = floating.read();

        section.diff = match (&pinned_text, &floating_text) {
            (Ok(p), Ok(f)) => classify(
                &self.canon,
                DiffSide {
                    name: pinned.name(),
                    content: p,
                },
                DiffSide {
                    name: floating.name(),
                    content: f,
                },
            ),
            _ => {
                // One finding per pair, even when both sides fail.
                let message = [&pinned_text, &floating_text]
                    .into_iter()
                    .filter_map(|text| text.as_ref().err())
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                tracing::warn!("{key}: {message}");
                section.findings.push(Finding::DiffError {
                    pair_key: key.to_string(),
                    message: message.clone(),
                });
                DiffResult::error(message)
            }
        };

        if section.diff.kind == DiffKind::NonEnv
            && let Some(normalized) = &section.diff.normalized
        {
            let suspicion = self.suspicion.evaluate(normalized);
            if let Suspicion::Suspicious(matches) = &suspicion {
                section.findings.push(Finding::SuspiciousDiff {
                    pair_key: key.to_string(),
                    matches: matches.clone(),
                });
            }
            section.suspicion = Some(suspicion);
        }

        for (file, text) in [(floating, &floating_text), (pinned, &pinned_text)] {
            let Ok(text) = text else { continue };
            for check in &self.file_checks {
                let findings = check.check(file, text);
                tracing::debug!("{} on {}: {} finding(s)", check.name(), file.name(), findings.len());
                section.findings.extend(findings);
            }
        }

        section
    }
}

/// Analyse every pair in order and build the report.
pub fn run(analyzer: &Analyzer, pairs: &[FilePair], root: &std::path::Path) -> Report {
    let mut report = Report::new(root);

    for pair in pairs {
        let Some((floating, pinned)) = pair.complete() else {
            if let Some(missing) = pair.missing_role()
                && let Some(present) = pair.file(missing.other())
            {
                tracing::debug!("orphan {} (missing {missing})", pair.key);
                report.push_orphan(Finding::Orphan {
                    pair_key: pair.key.clone(),
                    present: present.path.clone(),
                    missing,
                });
            }
            continue;
        };

        let section = match catch_unwind(AssertUnwindSafe(|| {
            analyzer.analyze_pair(&pair.key, floating, pinned)
        })) {
            Ok(section) => section,
            Err(_) => {
                let mut section = PairSection::new(&pair.key, pinned, floating);
                section.diff = DiffResult::error("internal error: analysis panicked");
                section.findings.push(Finding::DiffError {
                    pair_key: pair.key.clone(),
                    message: "internal error: analysis panicked".to_string(),
                });
                section
            }
        };
        report.push_section(section);
    }

    report
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
