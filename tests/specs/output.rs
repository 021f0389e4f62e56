// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for report rendering.

use crate::prelude::*;

// =============================================================================
// Diff Visibility
// =============================================================================

fn non_env_project() -> Project {
    Project::with_files(&[
        ("dev-a.yaml", "env: dev\nmemory: 512\n"),
        ("demo-a.yaml", "env: demo\nmemory: 256\n"),
    ])
}

#[test]
fn raw_diff_is_shown_for_non_env_pairs_by_default() {
    let project = non_env_project();
    envpair_cmd()
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("NON-ENV DIFF (normalized):"))
        .stdout(predicates::str::contains("FULL DIFF (original files):"))
        .stdout(predicates::str::contains("-env: demo"));
}

#[test]
fn no_diff_hides_raw_diff_only() {
    let project = non_env_project();
    envpair_cmd()
        .arg(project.path())
        .arg("--no-diff")
        .assert()
        .success()
        .stdout(predicates::str::contains("NON-ENV DIFF (normalized):"))
        .stdout(predicates::str::contains("FULL DIFF").not());
}

#[test]
fn env_only_raw_diff_needs_flag() {
    envpair_cmd()
        .arg(fixture("in-sync"))
        .assert()
        .success()
        .stdout(predicates::str::contains("FULL DIFF").not());

    envpair_cmd()
        .arg(fixture("in-sync"))
        .arg("--show-env-only")
        .assert()
        .success()
        .stdout(predicates::str::contains("FULL DIFF (original files):"))
        .stdout(predicates::str::contains("+environment: dev"));
}

#[test]
fn diff_headers_name_pinned_then_floating() {
    let project = non_env_project();
    envpair_cmd()
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("--- demo-a.yaml.norm"))
        .stdout(predicates::str::contains("+++ dev-a.yaml.norm"))
        .stdout(predicates::str::contains("--- demo-a.yaml\n"))
        .stdout(predicates::str::contains("+++ dev-a.yaml\n"));
}

// =============================================================================
// Color
// =============================================================================

#[test]
fn piped_output_has_no_color() {
    envpair_cmd()
        .arg(fixture("drift"))
        .assert()
        .stdout(predicates::str::contains("\x1b[").not());
}

#[test]
fn color_always_emits_escapes() {
    envpair_cmd()
        .arg(fixture("drift"))
        .args(["--color", "always"])
        .assert()
        .stdout(predicates::str::contains("\x1b["));
}

#[test]
fn no_color_beats_color_always() {
    envpair_cmd()
        .arg(fixture("drift"))
        .args(["--color", "always", "--no-color"])
        .assert()
        .stdout(predicates::str::contains("\x1b[").not());
}

// =============================================================================
// JSON
// =============================================================================

#[test]
fn json_output_for_drift() {
    let value = json_output(&fixture("drift"), &[]);

    assert_eq!(value["exit_code"], 2);
    assert_eq!(value["finding_count"], 4);

    let kinds: Vec<&str> = value["findings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "policy_violation",
            "suspicious_diff",
            "cross_env_leftover",
            "orphan"
        ]
    );

    let sections = value["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0]["key"], "api.yaml");
    assert_eq!(sections[0]["kind"], "none");
    assert_eq!(sections[1]["key"], "app.yaml");
    assert_eq!(sections[1]["kind"], "non_env");
    assert_eq!(sections[1]["label"], "SUSPICIOUS");
}

#[test]
fn json_output_exit_code_matches_process() {
    envpair_cmd()
        .arg(fixture("in-sync"))
        .args(["-o", "json"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\"exit_code\": 0"));
}

#[test]
fn json_policy_finding_fields() {
    let value = json_output(&fixture("drift"), &[]);
    let policy = &value["findings"][0];
    assert_eq!(policy["line"], 1);
    assert_eq!(policy["tag"], "latest");
    assert_eq!(policy["reason"]["rule"], "floating_tag_forbidden");
    assert_eq!(policy["reason"]["forbidden"], "latest");
}
