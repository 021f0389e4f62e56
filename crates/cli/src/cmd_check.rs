// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `envpair` check run.
//!
//! Resolves the directory and config, pairs the environment files, runs
//! the analysis and writes the report to stdout.

use std::io::Write;

use anyhow::Context;
use termcolor::StandardStream;

use envpair::cli::Cli;
use envpair::color::resolve_color;
use envpair::config::{self, Config};
use envpair::discovery;
use envpair::error::{Error, ExitCode};
use envpair::pairing::{ExcludeMatcher, list_env_files, pair_files};
use envpair::report::format_report_to;
use envpair::runner::{self, Analyzer};

/// Run the check and return the process exit code.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let target = cli.target_dir();
    if !target.is_dir() {
        return Err(Error::NotADirectory(target).into());
    }
    let root = target
        .canonicalize()
        .with_context(|| format!("cannot resolve {}", target.display()))?;

    let config_path = cli.config.clone().or_else(|| discovery::find_config(&root));
    let mut config = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load(path)?
        }
        None => Config::default(),
    };
    cli.apply_env_overrides(&mut config.envs);
    config.validate()?;

    let analyzer = Analyzer::new(&config, &cli.allow)?;
    let exclude = ExcludeMatcher::new(&config.check.exclude)?;

    let files = list_env_files(&root, &config.envs)?;
    tracing::debug!("{} environment file(s) in {}", files.len(), root.display());
    if files.is_empty() {
        println!(
            "No {}-* or {}-* files found in: {}",
            config.envs.floating,
            config.envs.pinned,
            root.display()
        );
        return Ok(ExitCode::Success);
    }

    let pairs = exclude.apply(pair_files(files));
    let report = runner::run(&analyzer, &pairs, &root);

    let mut stdout = StandardStream::stdout(resolve_color(cli.color, cli.no_color));
    format_report_to(&mut stdout, cli.output, &report, cli.render_options())?;
    stdout.flush()?;

    Ok(report.exit_code())
}
