use assert_cmd::Command;
use predicates::prelude::*;

/// Test CLI help output
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("mcp-server-timezone").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--transport"))
        .stdout(predicate::str::contains("--bind"));
}

/// Test CLI version output
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("mcp-server-timezone").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0.1"));
}

/// Test rejection of an unknown transport
#[test]
fn test_cli_invalid_transport() {
    let mut cmd = Command::cargo_bin("mcp-server-timezone").unwrap();
    cmd.args(["--transport", "carrier-pigeon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

/// Test rejection of a malformed bind address
#[test]
fn test_cli_invalid_bind() {
    let mut cmd = Command::cargo_bin("mcp-server-timezone").unwrap();
    cmd.args(["--bind", "localhost"]).assert().failure();
}
