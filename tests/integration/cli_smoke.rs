//! CLI behavior that needs no live deployment.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmskit() -> Command {
    Command::cargo_bin("cmskit").unwrap()
}

/// A config file that passes validation; nothing here is ever contacted.
fn write_config(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("cmskit.toml");
    fs::write(
        &path,
        r#"
host = "https://localhost:44331"
client_id = "umbraco-back-office-builder"
client_secret = "secret"
"#,
    )
    .unwrap();
    path
}

#[test]
fn test_help_lists_commands() {
    cmskit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("provision"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_missing_config_file_is_reported() {
    cmskit()
        .args(["--config", "/definitely/not/here.toml", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not found"));
}

#[test]
fn test_invalid_config_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cmskit.toml");
    fs::write(&path, "host = \"localhost\"\nclient_id = \"x\"\nclient_secret = \"y\"\n").unwrap();

    cmskit()
        .args(["--config", path.to_str().unwrap(), "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("http(s)"));
}

#[test]
fn test_unknown_phase_is_rejected_before_any_request() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    cmskit()
        .args(["--config", config.to_str().unwrap(), "provision", "--only", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown phase `bogus`"));
}

#[test]
fn test_check_reports_missing_assets() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);
    let empty_assets = dir.path().join("assets");
    fs::create_dir(&empty_assets).unwrap();

    cmskit()
        .args(["--config", config.to_str().unwrap(), "check"])
        .arg("--assets")
        .arg(&empty_assets)
        .assert()
        .failure()
        .stdout(predicate::str::contains("missing asset"))
        .stdout(predicate::str::contains("views/master.cshtml"));
}

#[test]
fn test_verbose_quiet_conflict_is_a_usage_error() {
    cmskit().args(["--verbose", "--quiet", "check"]).assert().failure().code(2);
}
