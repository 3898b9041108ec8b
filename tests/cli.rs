//! Integration tests that run the `pandoric` binary.
//!
//! Every test passes a configuration path with a directory component so the
//! binary never touches the directory it was built into.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PRODUCT_NAME: &str = "Pandoric Interface for Discord";
const VERSION: &str = "v0.0 Conceptual Version";

fn pandoric() -> Command {
    let mut cmd = Command::cargo_bin("pandoric").expect("binary not built");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn config_path(dir: &TempDir) -> PathBuf {
    dir.path().join("config.json")
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read config")).expect("parse config")
}

#[test]
fn dump_creates_default_config_and_prints_it() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);

    let output = pandoric().arg("-d").arg("-c").arg(&path).output().unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let expected = json!({ "name": PRODUCT_NAME, "version": VERSION });
    let printed: Value = serde_json::from_slice(&output.stdout).expect("dump is JSON");
    assert_eq!(printed, expected);
    assert_eq!(read_json(&path), expected);
    assert!(String::from_utf8_lossy(&output.stdout).contains("\n    \"name\""));
}

#[test]
fn dump_preserves_unknown_keys_and_skips_token_check() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);
    let config = json!({
        "name": PRODUCT_NAME,
        "version": "v2",
        "command_prefix": "?",
        "favourite_colour": "teal",
    });
    fs::write(&path, config.to_string()).unwrap();

    let output = pandoric().arg("--dump").arg("--config").arg(&path).output().unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let printed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed, config);
}

#[test]
fn dump_prints_non_string_values_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);
    let contents = json!({ "name": PRODUCT_NAME, "version": 1.0, "discord_token": null }).to_string();
    fs::write(&path, &contents).unwrap();

    let output = pandoric().arg("-d").arg("-c").arg(&path).output().unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let printed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed, json!({ "name": PRODUCT_NAME, "version": 1.0, "discord_token": null }));
    assert_eq!(fs::read_to_string(&path).unwrap(), contents);
}

#[test]
fn wrong_name_fails_without_modifying_file() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);
    let contents = r#"{"name": "wrong", "version": "x"}"#;
    fs::write(&path, contents).unwrap();

    pandoric()
        .arg("-d")
        .arg("-c")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "The \"name\" variable must match \"{}\"",
            PRODUCT_NAME
        )));

    assert_eq!(fs::read_to_string(&path).unwrap(), contents);
}

#[test]
fn malformed_json_fails_naming_the_file() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);
    fs::write(&path, "not json at all").unwrap();

    pandoric()
        .arg("-d")
        .arg("-c")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid JSON file"))
        .stderr(predicate::str::contains(path.display().to_string()));
}

#[test]
fn inaccessible_directory_fails_naming_it() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");
    let path = missing.join("config.json");

    pandoric()
        .arg("-d")
        .arg("-c")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be read from or written to"))
        .stderr(predicate::str::contains(missing.display().to_string()));

    assert!(!path.exists());
}

#[test]
fn check_without_token_fails_after_creating_default() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);

    pandoric()
        .arg("--check")
        .arg("-c")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("discord_token"));

    assert_eq!(read_json(&path), json!({ "name": PRODUCT_NAME, "version": VERSION }));
}

#[test]
fn check_with_token_succeeds_without_connecting() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);
    let contents = json!({
        "name": PRODUCT_NAME,
        "version": VERSION,
        "discord_token": "not-a-real-token",
    })
    .to_string();
    fs::write(&path, &contents).unwrap();

    pandoric()
        .arg("--check")
        .arg("--verbose")
        .arg("-c")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&path).unwrap(), contents);
}

#[test]
fn dump_and_check_conflict() {
    let dir = TempDir::new().unwrap();

    pandoric()
        .arg("--dump")
        .arg("--check")
        .arg("-c")
        .arg(config_path(&dir))
        .assert()
        .failure();
}
