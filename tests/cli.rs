use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("sks").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("sks").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_robot_mode_global() {
    let mut cmd = Command::cargo_bin("sks").unwrap();
    cmd.args(["--robot", "--help"]).assert().success();
}

#[test]
fn add_requires_name_and_platform() {
    let mut cmd = Command::cargo_bin("sks").unwrap();
    cmd.arg("add")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn add_rejects_invalid_resource_type_before_any_request() {
    let mut cmd = Command::cargo_bin("sks").unwrap();
    cmd.args([
        "add",
        "--name",
        "Rust",
        "--platform",
        "Udemy",
        "--resource-type",
        "podcast",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid resource type"));
}

#[test]
fn update_rejects_empty_patch() {
    let mut cmd = Command::cargo_bin("sks").unwrap();
    cmd.args(["update", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to update"));
}

#[test]
fn update_rejects_unknown_status() {
    let mut cmd = Command::cargo_bin("sks").unwrap();
    cmd.args(["update", "1", "--status", "done"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid progress status"));
}

#[test]
fn delete_aborts_when_not_confirmed() {
    let mut cmd = Command::cargo_bin("sks").unwrap();
    cmd.args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted"));
}

#[test]
fn unreachable_server_reports_transport_error() {
    let mut cmd = Command::cargo_bin("sks").unwrap();
    // Nothing listens on port 9; the request fails without retries.
    cmd.env("SKS_API_URL", "http://127.0.0.1:9")
        .env("SKS_TIMEOUT", "2s")
        .args(["--quiet", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("list goals failed"));
}

#[test]
fn robot_mode_errors_are_json_on_stdout() {
    let mut cmd = Command::cargo_bin("sks").unwrap();
    cmd.env("SKS_API_URL", "http://127.0.0.1:9")
        .env("SKS_TIMEOUT", "2s")
        .args(["--robot", "list"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"error\":true"));
}

#[test]
fn explicit_missing_config_file_fails() {
    let mut cmd = Command::cargo_bin("sks").unwrap();
    cmd.args(["--config", "/nonexistent/sks.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
