// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::io::Write;

use serde_json::json;
use termcolor::WriteColor;

use super::{RenderOptions, Report, ReportFormatter, SectionView};

/// JSON format report formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format_to(
        &self,
        writer: &mut dyn WriteColor,
        report: &Report,
        options: RenderOptions,
    ) -> anyhow::Result<()> {
        let sections: Vec<SectionView<'_>> = report
            .sections
            .iter()
            .map(|s| SectionView::new(s, options))
            .collect();

        let output = json!({
            "root": report.root,
            "sections": sections,
            "findings": report.findings,
            "finding_count": report.findings.len(),
            "exit_code": report.exit_code().code(),
        });

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}
