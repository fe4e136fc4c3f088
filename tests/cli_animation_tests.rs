//! End-to-end tests for `lazykll animation` commands.

use std::collections::BTreeMap;
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

fn assert_success(output: &Output, what: &str) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "{what} should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_animation_list_json() {
    let (config, _temp_dir) = create_temp_config_file(&sample_raw_config());
    let settings = TempDir::new().unwrap();

    let output = run(&["animation", "list", "--json"], &config, &settings);
    assert_success(&output, "List");

    let animations: BTreeMap<String, serde_json::Value> =
        serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        animations.keys().collect::<Vec<_>>(),
        vec!["lava", "rain"]
    );
    assert_eq!(animations["lava"]["settings"], "loop");
}

#[test]
fn test_animation_add_and_duplicate() {
    let (config, _temp_dir) = create_temp_config_file(&sample_raw_config());
    let settings = TempDir::new().unwrap();

    let output = run(&["animation", "add", "--name", "fade"], &config, &settings);
    assert_success(&output, "Add");

    let saved = read_config_file(&config);
    assert_eq!(
        saved["animations"]["fade"],
        serde_json::json!({ "settings": "", "frames": "" })
    );

    let output = run(&["animation", "add", "--name", "fade"], &config, &settings);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_animation_update_settings_only() {
    let (config, _temp_dir) = create_temp_config_file(&sample_raw_config());
    let settings = TempDir::new().unwrap();

    let output = run(
        &["animation", "update", "--name", "lava", "--settings", "framedelay:1"],
        &config,
        &settings,
    );
    assert_success(&output, "Update");

    let saved = read_config_file(&config);
    assert_eq!(saved["animations"]["lava"]["settings"], "framedelay:1");
    assert_eq!(saved["animations"]["lava"]["frames"], "P[1](255,0,0)");
}

#[test]
fn test_animation_update_requires_a_field() {
    let (config, _temp_dir) = create_temp_config_file(&sample_raw_config());
    let settings = TempDir::new().unwrap();

    let output = run(&["animation", "update", "--name", "lava"], &config, &settings);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_animation_rename() {
    let (config, _temp_dir) = create_temp_config_file(&sample_raw_config());
    let settings = TempDir::new().unwrap();

    let output = run(
        &["animation", "rename", "--from", "lava", "--to", "magma"],
        &config,
        &settings,
    );
    assert_success(&output, "Rename");

    let saved = read_config_file(&config);
    let animations = saved["animations"].as_object().unwrap();
    assert!(!animations.contains_key("lava"));
    assert_eq!(
        animations["magma"],
        sample_raw_config()["animations"]["lava"]
    );
}

#[test]
fn test_animation_rename_unknown_fails() {
    let (config, _temp_dir) = create_temp_config_file(&sample_raw_config());
    let settings = TempDir::new().unwrap();

    let output = run(
        &["animation", "rename", "--from", "nope", "--to", "lava"],
        &config,
        &settings,
    );
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(read_config_file(&config), sample_raw_config());
}

#[test]
fn test_animation_delete() {
    let (config, _temp_dir) = create_temp_config_file(&sample_raw_config());
    let settings = TempDir::new().unwrap();

    let output = run(&["animation", "delete", "--name", "rain"], &config, &settings);
    assert_success(&output, "Delete");

    let saved = read_config_file(&config);
    assert_eq!(saved["animations"].as_object().unwrap().len(), 1);
}
