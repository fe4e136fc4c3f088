//! End-to-end tests for `lazykll key`, `custom`, and `header` commands.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

/// Path to the lazykll binary (set by cargo at compile time)
fn lazykll_bin() -> &'static str {
    env!("CARGO_BIN_EXE_lazykll")
}

fn run(args: &[&str], config: &Path, settings_dir: &TempDir) -> Output {
    Command::new(lazykll_bin())
        .env("LAZYKLL_CONFIG_DIR", settings_dir.path())
        .args(args)
        .args(["--config", config.to_str().unwrap()])
        .output()
        .expect("Failed to execute command")
}

// ============================================================================
// Key Set Tests
// ============================================================================

#[test]
fn test_key_set_changes_only_target_layer() {
    let (config, _temp_dir) = create_temp_config_file(&sample_raw_config());
    let settings = TempDir::new().unwrap();

    let output = run(
        &["key", "set", "--key", "0", "--layer", "1", "--code", "F5"],
        &config,
        &settings,
    );
    assert_eq!(
        output.status.code(),
        Some(0),
        "Key set should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["code"], "0x01");
    assert_eq!(response["assignment"]["label"], "F5");

    let saved = read_config_file(&config);
    let original = sample_raw_config();
    assert_eq!(saved["matrix"][0]["layers"]["1"]["key"], "F5");
    assert_eq!(
        saved["matrix"][0]["layers"]["0"],
        original["matrix"][0]["layers"]["0"]
    );
    for index in 1..5 {
        assert_eq!(saved["matrix"][index], original["matrix"][index]);
    }
}

#[test]
fn test_key_set_new_layer_entry() {
    let (config, _temp_dir) = create_temp_config_file(&sample_raw_config());
    let settings = TempDir::new().unwrap();

    let output = run(
        &["key", "set", "--key", "3", "--layer", "2", "--code", "ENTER"],
        &config,
        &settings,
    );
    assert_eq!(output.status.code(), Some(0));

    let saved = read_config_file(&config);
    assert_eq!(
        saved["matrix"][3]["layers"]["2"],
        serde_json::json!({ "key": "ENTER", "label": "Enter" })
    );
}

#[test]
fn test_key_set_unknown_key_name() {
    let (config, _temp_dir) = create_temp_config_file(&sample_raw_config());
    let settings = TempDir::new().unwrap();

    let output = run(
        &["key", "set", "--key", "0", "--code", "NOT_A_KEY"],
        &config,
        &settings,
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown key"));
}

#[test]
fn test_key_set_unknown_position() {
    let (config, _temp_dir) = create_temp_config_file(&sample_raw_config());
    let settings = TempDir::new().unwrap();

    let output = run(
        &["key", "set", "--key", "42", "--code", "A"],
        &config,
        &settings,
    );
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(read_config_file(&config), sample_raw_config());
}

// ============================================================================
// Custom KLL Tests
// ============================================================================

#[test]
fn test_custom_set_text() {
    let (config, _temp_dir) = create_temp_config_file(&sample_raw_config());
    let settings = TempDir::new().unwrap();

    let output = run(
        &["custom", "set", "--layer", "1", "--text", "U\"Z\" : U\"X\";"],
        &config,
        &settings,
    );
    assert_eq!(output.status.code(), Some(0));

    let saved = read_config_file(&config);
    assert_eq!(saved["custom"]["1"], "U\"Z\" : U\"X\";");
    assert_eq!(saved["custom"]["0"], sample_raw_config()["custom"]["0"]);
}

#[test]
fn test_custom_set_from_file() {
    let (config, temp_dir) = create_temp_config_file(&sample_raw_config());
    let settings = TempDir::new().unwrap();
    let kll = temp_dir.path().join("layer2.kll");
    fs::write(&kll, "U\"Q\" : U\"W\";\n").unwrap();

    let output = run(
        &["custom", "set", "--layer", "2", "--file", kll.to_str().unwrap()],
        &config,
        &settings,
    );
    assert_eq!(output.status.code(), Some(0));

    let saved = read_config_file(&config);
    assert_eq!(saved["custom"]["2"], "U\"Q\" : U\"W\";\n");
}

#[test]
fn test_custom_set_requires_text_or_file() {
    let (config, _temp_dir) = create_temp_config_file(&sample_raw_config());
    let settings = TempDir::new().unwrap();

    let output = run(&["custom", "set"], &config, &settings);
    assert!(!output.status.success());
}

// ============================================================================
// Header Tests
// ============================================================================

#[test]
fn test_header_set() {
    let (config, _temp_dir) = create_temp_config_file(&sample_raw_config());
    let settings = TempDir::new().unwrap();

    let output = run(
        &["header", "set", "--name", "Version", "--value", "0.4"],
        &config,
        &settings,
    );
    assert_eq!(output.status.code(), Some(0));

    let saved = read_config_file(&config);
    assert_eq!(saved["header"]["Version"], "0.4");
    assert_eq!(saved["header"]["Name"], "MD1");
    assert_eq!(saved["matrix"], sample_raw_config()["matrix"]);
}
