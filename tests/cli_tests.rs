//! Integration tests for the verdict CLI
//!
//! These tests run the verdict binary and verify the full demo/judge
//! pipeline, format handling, and exit codes.

use std::fs;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::tempdir;

/// Get a Command for verdict
fn verdict() -> Command {
    cargo_bin_cmd!("verdict")
}

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_flag() {
    verdict()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: verdict"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("judge"))
        .stdout(predicate::str::contains("demo"));
}

#[test]
fn test_version_flag() {
    verdict()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("verdict"));
}

#[test]
fn test_subcommand_help() {
    verdict()
        .args(["judge", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade a submitted result"))
        .stdout(predicate::str::contains("--answer"))
        .stdout(predicate::str::contains("--result"));
}

// ============================================================================
// Exit code tests
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    verdict()
        .args(["--format", "records", "demo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_unknown_argument_json_usage_error() {
    verdict()
        .args(["--format", "json", "judge", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_duplicate_format_json_usage_error() {
    verdict()
        .args(["--format", "json", "--format", "human", "demo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"duplicate_format\""));
}

#[test]
fn test_unknown_command_exit_code_2() {
    verdict().arg("nonexistent").assert().code(2);
}

#[test]
fn test_unknown_command_json_usage_error() {
    verdict()
        .args(["--format", "json", "nonexistent"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

// ============================================================================
// Judge command tests
// ============================================================================

#[test]
fn test_judge_missing_files_grades_zero() {
    let dir = tempdir().unwrap();

    // Fail-soft: nothing to load still produces a grade and exit code 0
    verdict()
        .current_dir(dir.path())
        .arg("judge")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fault Count: 0. Result Count: 0"))
        .stdout(predicate::str::contains("Grade: 0"))
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn test_judge_quiet_prints_only_the_grade() {
    let dir = tempdir().unwrap();

    verdict()
        .current_dir(dir.path())
        .args(["--quiet", "judge"])
        .assert()
        .success()
        .stdout(predicate::eq("Grade: 0\n"));
}

#[test]
fn test_judge_rank_order_comes_from_the_rank_column() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("answer.json"),
        r#"{"1": ["os", "os_020", ["CPU_user_time"]]}"#,
    )
    .unwrap();
    // Correct entry stored first in the file but ranked second
    fs::write(
        dir.path().join("result.csv"),
        "fault_id,rank,category,component_id,indicator\n\
         1,1,os,os_020,CPU_user_time\n\
         1,0,os,os_020,WRONG\n",
    )
    .unwrap();

    verdict()
        .current_dir(dir.path())
        .arg("judge")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade: 20"));
}

// ============================================================================
// Demo command tests
// ============================================================================

#[test]
fn test_demo_then_judge_grades_120() {
    let dir = tempdir().unwrap();

    verdict()
        .current_dir(dir.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created sample ground truth"))
        .stdout(predicate::str::contains("Created submitted answer"))
        .stdout(predicate::str::contains("grade of 120"));

    assert!(dir.path().join("answer.json").exists());
    assert!(dir.path().join("result.csv").exists());

    verdict()
        .current_dir(dir.path())
        .arg("judge")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fault Count: 4. Result Count: 3"))
        .stdout(predicate::str::contains("Grade: 120"));
}

#[test]
fn test_demo_then_judge_in_yaml() {
    let dir = tempdir().unwrap();
    let paths = ["--answer", "truth.yaml", "--result", "ranked.yml"];

    verdict()
        .current_dir(dir.path())
        .arg("demo")
        .args(paths)
        .assert()
        .success();

    verdict()
        .current_dir(dir.path())
        .arg("judge")
        .args(paths)
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade: 120"));
}

#[test]
fn test_demo_leaves_existing_files_alone() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("answer.json"), "keep me").unwrap();

    verdict()
        .current_dir(dir.path())
        .arg("demo")
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(
        fs::read_to_string(dir.path().join("answer.json")).unwrap(),
        "keep me"
    );
    // The sibling write is independent
    assert!(dir.path().join("result.csv").exists());
}

// ============================================================================
// JSON output tests
// ============================================================================

#[test]
fn test_demo_json_envelope() {
    let dir = tempdir().unwrap();

    let output = verdict()
        .current_dir(dir.path())
        .args(["--format", "json", "demo"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let envelope: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(envelope["status"], "ok");
    assert_eq!(envelope["answer_written"], true);
    assert_eq!(envelope["result_written"], true);
    assert_eq!(envelope["expected_grade"], 120);
}

#[test]
fn test_judge_json_envelope() {
    let dir = tempdir().unwrap();

    verdict()
        .current_dir(dir.path())
        .arg("demo")
        .assert()
        .success();

    let output = verdict()
        .current_dir(dir.path())
        .args(["--format", "json", "judge"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let envelope: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(envelope["fault_count"], 4);
    assert_eq!(envelope["result_count"], 3);
    assert_eq!(envelope["grade"], 120);
    assert_eq!(envelope["diagnostics"].as_array().unwrap().len(), 0);
}

#[test]
fn test_judge_json_reports_diagnostics() {
    let dir = tempdir().unwrap();

    let output = verdict()
        .current_dir(dir.path())
        .args(["--format", "json", "judge"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let envelope: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(envelope["grade"], 0);
    let diagnostics = envelope["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics[0]
        .as_str()
        .unwrap()
        .contains("file not found"));
}
