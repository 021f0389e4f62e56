// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for envpair.toml and the flags that override it.

use crate::prelude::*;

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn config_next_to_files_is_used() {
    envpair_cmd()
        .arg(fixture("custom-envs"))
        .assert()
        .success()
        .stdout(predicates::str::contains("Pair: prod-service.yaml  <->  qa-service.yaml"))
        .stdout(predicates::str::contains("stray").not());
}

#[test]
fn config_in_parent_directory_is_found() {
    let project = Project::with_files(&[
        ("envpair.toml", "[envs]\nfloating = \"qa\"\npinned = \"prod\"\n"),
        ("deploy/qa-a.env", "ENV=qa\n"),
        ("deploy/prod-a.env", "ENV=prod\n"),
    ]);
    envpair_cmd()
        .arg(project.path().join("deploy"))
        .assert()
        .success()
        .stdout(predicates::str::contains("PAIR_KEY: a.env"));
}

#[test]
fn explicit_config_flag_wins() {
    let project = Project::with_files(&[
        ("alt.toml", "[envs]\nfloating = \"qa\"\npinned = \"prod\"\n"),
        ("qa-a.env", "ENV=qa\n"),
        ("prod-a.env", "ENV=prod\n"),
    ]);
    envpair_cmd()
        .arg(project.path())
        .arg("-C")
        .arg(project.path().join("alt.toml"))
        .assert()
        .success()
        .stdout(predicates::str::contains("PAIR_KEY: a.env"));
}

#[test]
fn config_env_var_is_honored() {
    let project = Project::with_files(&[
        ("alt.toml", "[envs]\nfloating = \"qa\"\npinned = \"prod\"\n"),
        ("qa-a.env", "ENV=qa\n"),
        ("prod-a.env", "ENV=prod\n"),
    ]);
    envpair_cmd()
        .arg(project.path())
        .env("ENVPAIR_CONFIG", project.path().join("alt.toml"))
        .assert()
        .success()
        .stdout(predicates::str::contains("PAIR_KEY: a.env"));
}

// =============================================================================
// Validation Exits 1
// =============================================================================

#[test]
fn unknown_key_exits_one() {
    let project = Project::with_files(&[("envpair.toml", "[envs]\nstaging = \"stg\"\n")]);
    envpair_cmd()
        .arg(project.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("invalid config"));
}

#[test]
fn unsupported_version_exits_one() {
    let project = Project::with_files(&[("envpair.toml", "version = 7\n")]);
    envpair_cmd()
        .arg(project.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("unsupported version 7"));
}

#[test]
fn invalid_suspicious_regex_exits_one() {
    let project = Project::with_files(&[
        ("envpair.toml", "[check]\nsuspicious = [\"[unclosed\"]\n"),
        ("dev-a.yaml", "x\n"),
        ("demo-a.yaml", "x\n"),
    ]);
    envpair_cmd()
        .arg(project.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("[unclosed"));
}

#[test]
fn same_floating_and_pinned_exits_one() {
    let project = Project::empty();
    envpair_cmd()
        .arg(project.path())
        .args(["--floating", "dev", "--pinned", "dev"])
        .assert()
        .code(1);
}

#[test]
fn missing_config_file_exits_one() {
    let project = Project::empty();
    envpair_cmd()
        .arg(project.path())
        .arg("-C")
        .arg(project.path().join("absent.toml"))
        .assert()
        .code(1)
        .stderr(predicates::str::contains("absent.toml"));
}

// =============================================================================
// Check Tuning
// =============================================================================

#[test]
fn exclude_skips_matching_pairs() {
    let project = Project::with_files(&[
        ("envpair.toml", "[check]\nexclude = [\"*.lock\"]\n"),
        ("dev-deps.lock", "pin: demo\n"),
        ("demo-deps.lock", "pin: other\n"),
        ("dev-a.yaml", "x\n"),
        ("demo-a.yaml", "x\n"),
    ]);
    envpair_cmd()
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("deps.lock").not());
}

#[test]
fn configured_suspicious_pattern_escalates() {
    let files = [
        ("dev-a.yaml", "url: https://svc.corp.example.net/a\n"),
        ("demo-a.yaml", "url: https://svc.example.org/a\n"),
    ];
    let plain = Project::with_files(&files);
    envpair_cmd().arg(plain.path()).assert().success();

    let tuned = Project::with_files(&files);
    tuned.file(
        "envpair.toml",
        "[check]\nsuspicious = ['corp\\.example\\.net']\n",
    );
    envpair_cmd()
        .arg(tuned.path())
        .assert()
        .code(2)
        .stdout(predicates::str::contains("[SUSPICIOUS]"));
}

#[test]
fn flags_override_config_environments() {
    envpair_cmd()
        .arg(fixture("custom-envs"))
        .args(["--floating", "dev", "--pinned", "prod"])
        .assert()
        .code(2)
        .stdout(predicates::str::contains("stray.yaml: dev-stray.yaml has no pinned counterpart"));
}

#[test]
fn overlapping_tags_pair_env_only() {
    let project = Project::with_files(&[
        ("dev-app.yaml", "Env: dev\nStack: dev-network\n"),
        ("dev-eu-app.yaml", "Env: dev-eu\nStack: dev-eu-network\n"),
    ]);
    envpair_cmd()
        .arg(project.path())
        .args(["--pinned", "dev-eu"])
        .assert()
        .success()
        .stdout(predicates::str::contains("DIFF: env-only"))
        .stdout(predicates::str::contains("CROSS-ENV").not())
        .stdout(predicates::str::contains("No findings."));
}
