//! Integration tests for the `check` command.
//!
//! Responsibilities:
//! - Prove that empty variables are reported without failing the command.

mod common;

use common::{FULL_ENV, dir_with_env, game_env_cmd};
use predicates::prelude::*;

#[test]
fn test_check_reports_empty_variables() {
    let temp_dir = dir_with_env("RPC_URL=https://example.test\n");

    game_env_cmd(temp_dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("RPC_URL                 set\n"))
        .stdout(predicate::str::contains("OPEN_AI_KEY             empty\n"))
        .stdout(predicate::str::contains("4 of 5 variables are empty\n"));
}

#[test]
fn test_check_complete_env() {
    let temp_dir = dir_with_env(FULL_ENV);

    game_env_cmd(temp_dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 of 5 variables are empty\n"));
}

#[test]
fn test_check_json_output() {
    let temp_dir = dir_with_env("ADMIN_ADDRESS=0x2\n");

    let output = game_env_cmd(temp_dir.path())
        .args(["check", "-o", "json"])
        .output()
        .expect("Failed to run command");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let statuses = value.as_array().unwrap();
    assert_eq!(statuses.len(), 5);
    assert_eq!(statuses[4]["name"], "ADMIN_ADDRESS");
    assert_eq!(statuses[4]["set"], true);
    assert_eq!(statuses[0]["set"], false);
}
