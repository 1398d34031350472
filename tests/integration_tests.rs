//! Integration tests for the yourOrbit CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Command isolated from the user's own config and environment
fn yourorbit(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("yourorbit").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .env_remove("YOURORBIT_SESSION__USER")
        .env_remove("YOURORBIT_SESSION__PENDING");
    cmd
}

fn workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("posting.png"), b"not really a png").unwrap();
    fs::write(temp_dir.path().join("large.jpg"), vec![0u8; 6 * 1024 * 1024]).unwrap();
    fs::write(temp_dir.path().join("resume.pdf"), b"%PDF-1.4").unwrap();
    temp_dir
}

#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().unwrap();
    yourorbit(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("drop"))
        .stdout(predicate::str::contains("tracker"));
}

#[test]
fn test_cli_version() {
    let temp_dir = TempDir::new().unwrap();
    yourorbit(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("yourorbit"));
}

#[test]
fn test_invalid_subcommand() {
    let temp_dir = TempDir::new().unwrap();
    yourorbit(temp_dir.path())
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_drop_accepts_images() {
    let temp_dir = workspace();
    yourorbit(temp_dir.path())
        .args(["drop", "posting.png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uploaded Files (1)"))
        .stdout(predicate::str::contains("posting.png"))
        .stderr(predicate::str::contains("Upload Failed").not());
}

#[test]
fn test_drop_reports_rejections() {
    let temp_dir = workspace();
    yourorbit(temp_dir.path())
        .args(["drop", "posting.png", "large.jpg", "resume.pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uploaded Files (1)"))
        .stderr(predicate::str::contains("2 Upload Failed"))
        .stderr(predicate::str::contains("File is too large (6.00MB). Max size is 5MB."))
        .stderr(predicate::str::contains("File type not supported"));
}

#[test]
fn test_drop_skips_duplicates() {
    let temp_dir = workspace();
    yourorbit(temp_dir.path())
        .args(["drop", "posting.png", "posting.png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 Duplicate Skipped"))
        .stdout(predicate::str::contains("Same file is already uploaded. Skipped duplicate upload."))
        .stdout(predicate::str::contains("Uploaded Files (1)"));
}

#[test]
fn test_drop_json_output() {
    let temp_dir = workspace();
    let assert = yourorbit(temp_dir.path())
        .args(["drop", "posting.png", "resume.pdf", "--format", "json"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["outcome"]["added"], 1);
    assert_eq!(report["outcome"]["rejections"][0]["errors"][0], "file-invalid-type");
    assert_eq!(report["files"][0]["name"], "posting.png");
    assert_eq!(report["toasts"][0]["title"], "1 Upload Failed");
}

#[test]
fn test_drop_single_file_mode() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.png"), b"a").unwrap();
    fs::write(temp_dir.path().join("b.png"), b"b").unwrap();

    yourorbit(temp_dir.path())
        .args(["drop", "a.png", "b.png", "--single"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No files uploaded"))
        .stderr(predicate::str::contains("2 Upload Failed"));
}

#[test]
fn test_drop_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    yourorbit(temp_dir.path())
        .args(["drop", "missing.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such file"));
}

#[test]
fn test_custom_config_limits_size() {
    let temp_dir = workspace();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(&config_path, "[dropzone]\nmax_size_bytes = 4\n").unwrap();

    yourorbit(temp_dir.path())
        .args(["drop", "posting.png", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("1 Upload Failed"));
}

#[test]
fn test_config_operations() {
    let temp_dir = TempDir::new().unwrap();

    yourorbit(temp_dir.path())
        .args(["config", "get", "dropzone.max_size_bytes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5242880"));

    yourorbit(temp_dir.path())
        .args(["config", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_size_bytes"));

    yourorbit(temp_dir.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));

    yourorbit(temp_dir.path())
        .args(["config", "get", "nope.missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_repo_config_is_picked_up() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("yourorbit.toml"), "[submit]\nmode = \"ftp\"\n").unwrap();

    yourorbit(temp_dir.path())
        .args(["config", "validate"])
        .assert()
        .failure();
}

#[test]
fn test_submit_requires_sign_in() {
    let temp_dir = TempDir::new().unwrap();
    yourorbit(temp_dir.path())
        .args(["submit", "--text", "Senior Rust Engineer"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Sign in required"));
}

#[test]
fn test_submit_signed_in() {
    let temp_dir = TempDir::new().unwrap();
    yourorbit(temp_dir.path())
        .args(["submit", "--text", "Senior Rust Engineer", "--user", "ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Job posting submitted"));
}

#[test]
fn test_submit_session_from_env() {
    let temp_dir = TempDir::new().unwrap();
    yourorbit(temp_dir.path())
        .env("YOURORBIT_SESSION__PENDING", "true")
        .args(["submit", "--text", "posting"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Please try again in a few seconds."));
}

#[test]
fn test_tracker_session_gates_inputs() {
    let temp_dir = workspace();
    yourorbit(temp_dir.path())
        .args(["tracker", "--user", "ada"])
        .write_stdin("text hello\ndrop posting.png\nclear\ndrop posting.png\ntext pasted\nlist\nremove 0\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clear text input to upload files instead"))
        .stdout(predicate::str::contains("Added 1 file(s)"))
        .stdout(predicate::str::contains("Remove uploaded files to paste job posting instead"))
        .stdout(predicate::str::contains("Uploaded Files (1)"))
        .stdout(predicate::str::contains("Removed posting.png"));
}

#[test]
fn test_tracker_reports_unknown_commands() {
    let temp_dir = TempDir::new().unwrap();
    yourorbit(temp_dir.path())
        .arg("tracker")
        .write_stdin("upload x\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown command"));
}
