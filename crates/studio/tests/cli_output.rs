//! Integration tests for CLI output behavior
//!
//! Logs go to stderr as JSON; stdout carries only the rendered screen or listing.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_studio(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_studio"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute studio")
}

const FACTORS: &str = r#"{
    "data": {
        "all": [
            {
                "id": "f1",
                "friendly_name": "Phone app",
                "factor_type": "totp",
                "status": "verified",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-02T00:00:00Z"
            }
        ],
        "totp": [],
        "phone": []
    },
    "error": null
}"#;

#[test]
fn test_upgrade_status_exits_on_completion() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(
        temp_dir.path().join("status.json"),
        r#"{"databaseUpgradeStatus": {"status": "upgraded", "target_version": "15"}}"#,
    )
    .expect("Failed to write status file");
    fs::write(
        temp_dir.path().join("project.json"),
        r#"{"ref": "abcdefgh", "name": "billing", "status": "ACTIVE_HEALTHY"}"#,
    )
    .expect("Failed to write project file");

    let output = run_studio(
        temp_dir.path(),
        &[
            "-q",
            "upgrade-status",
            "--project",
            "abcdefgh",
            "--status-file",
            "status.json",
            "--project-file",
            "project.json",
        ],
    );

    assert!(
        output.status.success(),
        "upgrade-status failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("billing"), "got: {}", stdout);
    assert!(stdout.contains("Upgrade completed!"), "got: {}", stdout);
    assert!(stdout.contains("Postgres 15"), "got: {}", stdout);
    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
}

#[test]
fn test_upgrade_status_failed_shows_support_link() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(
        temp_dir.path().join("status.json"),
        r#"{"databaseUpgradeStatus": {"status": "failed", "error": "timeout", "target_version": "15"}}"#,
    )
    .expect("Failed to write status file");

    let output = run_studio(
        temp_dir.path(),
        &[
            "-q",
            "upgrade-status",
            "-p",
            "abcdefgh",
            "--status-file",
            "status.json",
        ],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("We ran into an issue while upgrading your project"),
        "got: {}",
        stdout
    );
    assert!(stdout.contains("/support/new?"), "got: {}", stdout);
    assert!(stdout.contains("Error%3A%20timeout"), "got: {}", stdout);
}

#[test]
fn test_mfa_factors_json_output() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("factors.json"), FACTORS).expect("Failed to write factors");

    let output = run_studio(
        temp_dir.path(),
        &["-q", "mfa-factors", "--factors-file", "factors.json", "--json"],
    );

    assert!(
        output.status.success(),
        "mfa-factors failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let list: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(list["all"][0]["id"], "f1");
    assert_eq!(list["all"][0]["status"], "verified");
}

#[test]
fn test_mfa_factors_backend_error_fails() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(
        temp_dir.path().join("factors.json"),
        r#"{"data": null, "error": {"message": "Invalid JWT", "code": "bad_jwt", "status": 401}}"#,
    )
    .expect("Failed to write factors");

    let output = run_studio(
        temp_dir.path(),
        &["-q", "mfa-factors", "--factors-file", "factors.json"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid JWT"), "got: {}", stderr);
}

#[test]
fn test_config_warning_on_invalid_toml() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join(".studio");
    fs::create_dir_all(&config_dir).expect("Failed to create .studio dir");
    fs::write(config_dir.join("config.toml"), "invalid toml [[[")
        .expect("Failed to write invalid config");
    fs::write(temp_dir.path().join("factors.json"), FACTORS).expect("Failed to write factors");

    let output = run_studio(
        temp_dir.path(),
        &["mfa-factors", "--factors-file", "factors.json"],
    );

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
    assert!(stderr.contains("Tip: Check"), "got: {}", stderr);
}

#[test]
fn test_upgrade_status_once_renders_when_first_poll_fails() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join(".studio");
    fs::create_dir_all(&config_dir).expect("Failed to create .studio dir");
    fs::write(
        config_dir.join("config.toml"),
        "[upgrade]\npoll_interval_secs = 1\n",
    )
    .expect("Failed to write config");

    // No status file: every poll fails, so the first-poll wait times out.
    let output = run_studio(
        temp_dir.path(),
        &[
            "-q",
            "upgrade-status",
            "-p",
            "abcdefgh",
            "--status-file",
            "missing.json",
            "--once",
        ],
    );

    assert!(
        output.status.success(),
        "upgrade-status --once failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Upgrading in progress"), "got: {}", stdout);
    assert!(stdout.contains("0.00%"), "got: {}", stdout);
}
