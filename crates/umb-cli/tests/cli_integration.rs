//! CLI integration tests
//!
//! Tests the unity-mcp-bridge CLI using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn unity_mcp_bridge() -> Command {
    Command::cargo_bin("unity-mcp-bridge")
        .expect("Failed to locate unity-mcp-bridge binary - ensure it's built before running tests")
}

#[test]
fn test_cli_help() {
    unity_mcp_bridge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("unity-mcp-bridge"))
        .stdout(predicate::str::contains("setup"));
}

#[test]
fn test_cli_version() {
    unity_mcp_bridge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("unity-mcp-bridge"));
}

#[test]
fn test_cli_setup_help() {
    unity_mcp_bridge()
        .args(["setup", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--foreground"))
        .stdout(predicate::str::contains("--bind"))
        .stdout(predicate::str::contains("--project"));
}

#[test]
fn test_cli_no_command_shows_usage() {
    unity_mcp_bridge()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_unknown_command() {
    unity_mcp_bridge()
        .arg("nonexistent-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_cli_setup_rejects_broken_config() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "[bridge\nbind_address = oops").expect("Failed to write config");

    unity_mcp_bridge()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "setup",
            "--foreground",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_cli_setup_rejects_missing_explicit_config() {
    unity_mcp_bridge()
        .args([
            "--config",
            "/definitely/not/here/config.toml",
            "setup",
            "--foreground",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
