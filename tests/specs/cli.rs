// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the command line surface and exit codes.

use crate::prelude::*;

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn help_exits_successfully() {
    envpair_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("envpair"))
        .stdout(predicates::str::contains("--no-diff"))
        .stdout(predicates::str::contains("--allow"));
}

#[test]
fn version_exits_successfully() {
    envpair_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Usage Errors Exit 1
// =============================================================================

#[test]
fn unknown_flag_exits_one() {
    envpair_cmd()
        .arg("--frobnicate")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("--frobnicate"));
}

#[test]
fn positional_and_dir_flag_conflict() {
    let project = Project::empty();
    envpair_cmd()
        .arg(project.path())
        .arg("--dir")
        .arg(project.path())
        .assert()
        .code(1);
}

#[test]
fn missing_directory_exits_one() {
    let project = Project::empty();
    envpair_cmd()
        .arg(project.path().join("nope"))
        .assert()
        .code(1)
        .stderr(predicates::str::contains("not a directory"));
}

#[test]
fn file_instead_of_directory_exits_one() {
    let project = Project::with_files(&[("dev-app.yaml", "a: 1\n")]);
    envpair_cmd()
        .arg(project.path().join("dev-app.yaml"))
        .assert()
        .code(1)
        .stderr(predicates::str::starts_with("error:"));
}

// =============================================================================
// Directory Selection
// =============================================================================

#[test]
fn no_env_files_exits_zero_with_message() {
    let project = Project::with_files(&[("notes.txt", "hello\n")]);
    envpair_cmd()
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No dev-* or demo-* files found in:"));
}

#[test]
fn dir_flag_selects_directory() {
    envpair_cmd()
        .arg("--dir")
        .arg(fixture("in-sync"))
        .assert()
        .success()
        .stdout(predicates::str::contains("No findings."));
}

#[test]
fn defaults_to_current_directory() {
    envpair_cmd()
        .current_dir(fixture("in-sync"))
        .assert()
        .success()
        .stdout(predicates::str::contains("PAIR_KEY: app.yaml"));
}
