// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for pair analysis and findings.

use crate::prelude::*;

const IMAGE: &str = "123456789012.registry.example.com/app/svc";

// =============================================================================
// Clean Runs
// =============================================================================

#[test]
fn in_sync_fixture_passes() {
    envpair_cmd()
        .arg(fixture("in-sync"))
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "DIFF: env-only (after normalization: no diffs)",
        ))
        .stdout(predicates::str::contains("PAIR_KEY: worker.env"))
        .stdout(predicates::str::contains("DIFF: none"))
        .stdout(predicates::str::contains("No findings."))
        .stdout(predicates::str::contains("README").not());
}

#[test]
fn parameter_change_is_info_only() {
    let project = Project::with_files(&[
        ("dev-app.yaml", "env: dev\nmemory: 512\n"),
        ("demo-app.yaml", "env: demo\nmemory: 256\n"),
    ]);
    envpair_cmd()
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "DIFF: NON-ENV (after normalization) [INFO]",
        ))
        .stdout(predicates::str::contains("-memory: 256"))
        .stdout(predicates::str::contains("+memory: 512"));
}

// =============================================================================
// Findings Exit 2
// =============================================================================

#[test]
fn drift_fixture_reports_every_finding() {
    envpair_cmd()
        .arg(fixture("drift"))
        .assert()
        .code(2)
        .stdout(predicates::str::contains("Orphans (missing counterpart):"))
        .stdout(predicates::str::contains(
            "cache.yaml: dev-cache.yaml has no pinned counterpart",
        ))
        .stdout(predicates::str::contains(
            "DIFF: NON-ENV (after normalization) [SUSPICIOUS]",
        ))
        .stdout(predicates::str::contains("+trust: sts:AssumeRole  [AssumeRole]"))
        .stdout(predicates::str::contains(
            "TAG POLICY: demo-api.yaml:1: pinned environment files must NOT use :latest",
        ))
        .stdout(predicates::str::contains(
            "CROSS-ENV: dev-app.yaml:1: contains 'demo' | # copied from demo",
        ))
        .stdout(predicates::str::contains("Findings: 4"));
}

#[test]
fn orphan_alone_exits_two() {
    let project = Project::with_files(&[
        ("dev-a.yaml", "x: 1\n"),
        ("demo-a.yaml", "x: 1\n"),
        ("demo-b.yaml", "x: 1\n"),
    ]);
    envpair_cmd()
        .arg(project.path())
        .assert()
        .code(2)
        .stdout(predicates::str::contains(
            "b.yaml: demo-b.yaml has no floating counterpart",
        ));
}

#[test]
fn floating_file_must_use_floating_tag() {
    let project = Project::with_files(&[
        ("dev-a.yaml", format!("image: {IMAGE}:1.0.0\n").as_str()),
        ("demo-a.yaml", format!("image: {IMAGE}:1.0.0\n").as_str()),
    ]);
    envpair_cmd()
        .arg(project.path())
        .assert()
        .code(2)
        .stdout(predicates::str::contains(
            "dev-a.yaml:1: floating environment files must use :latest but found :1.0.0",
        ));
}

#[test]
fn cross_env_leftover_in_pinned_file() {
    let project = Project::with_files(&[
        ("dev-a.yaml", "queue: jobs\n"),
        ("demo-a.yaml", "queue: jobs\n# fallback: dev queue\n"),
    ]);
    envpair_cmd()
        .arg(project.path())
        .assert()
        .code(2)
        .stdout(predicates::str::contains(
            "demo-a.yaml:2: contains 'dev'",
        ));
}

#[test]
fn allow_flag_suppresses_leftover() {
    let project = Project::with_files(&[
        ("dev-a.yaml", "owner: demo-team\n"),
        ("demo-a.yaml", "owner: demo-team\n"),
    ]);
    envpair_cmd().arg(project.path()).assert().code(2);
    envpair_cmd()
        .arg(project.path())
        .args(["--allow", "demo-team"])
        .assert()
        .success();
}

#[test]
fn invalid_allow_regex_exits_one() {
    let project = Project::with_files(&[("dev-a.yaml", "x\n"), ("demo-a.yaml", "x\n")]);
    envpair_cmd()
        .arg(project.path())
        .args(["--allow", "("])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("invalid pattern `(`"));
}

#[test]
fn directories_named_like_env_files_are_ignored() {
    let project = Project::with_files(&[("demo-a.yaml", "x: 1\n"), ("dev-a.yaml", "x: 1\n")]);
    std::fs::create_dir(project.path().join("dev-b.yaml")).unwrap();
    envpair_cmd()
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("b.yaml").not());
}
