//! Integration tests for configuration handling.
//!
//! Covers the `numex config` subcommands and how the configuration file
//! feeds defaults into `numex extract`.

use assert_cmd::Command;
use numex_cli::constants::CONFIG_PATH_ENV;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn numex(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("numex").unwrap();
    cmd.env("HOME", home.path()).env_remove(CONFIG_PATH_ENV).env_remove("RUST_LOG");
    cmd
}

fn write_config(home: &TempDir, content: &str) -> PathBuf {
    let path = home.path().join("custom.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_config_show_defaults() {
    let home = TempDir::new().unwrap();

    numex(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("on_malformed = \"fail\""))
        .stdout(predicate::str::contains("format = \"text\""));
}

#[test]
fn test_config_path_default_location() {
    let home = TempDir::new().unwrap();

    numex(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".numex").and(predicate::str::contains("config.toml")));
}

#[test]
fn test_config_init_then_refuse_overwrite() {
    let home = TempDir::new().unwrap();

    numex(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));
    assert!(home.path().join(".numex").join("config.toml").exists());

    numex(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    numex(&home).args(["config", "init", "--force"]).assert().success();
}

#[test]
fn test_config_skip_policy_applies_to_extract() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, "on_malformed = \"skip\"\n");

    numex(&home)
        .args(["--quiet", "extract", "1", "1.2.3", "3"])
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout("1\n3\n");
}

#[test]
fn test_config_from_environment_variable() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, "format = \"json\"\n");

    numex(&home)
        .env(CONFIG_PATH_ENV, &path)
        .args(["extract", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"values\""));
}

#[test]
fn test_format_flag_overrides_config() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, "format = \"json\"\n");

    numex(&home)
        .arg("--config")
        .arg(&path)
        .args(["extract", "--format", "text", "5"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_explicit_missing_config_fails() {
    let home = TempDir::new().unwrap();

    numex(&home)
        .arg("--config")
        .arg(home.path().join("absent.toml"))
        .args(["extract", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"))
        .stderr(predicate::str::contains("numex config init"));
}

#[test]
fn test_invalid_config_reports_toml_error() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, "on_malformed = \"ignore\"\n");

    numex(&home)
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(path.display().to_string()))
        .stderr(predicate::str::contains("unknown variant"))
        .stderr(predicate::str::contains("TOML syntax"));
}
