//! Shared test fixtures for engine and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use lazykll::engine::IdGenerator;
use lazykll::models::RawConfig;
use lazykll::services::ConfigFileService;
use serde_json::json;
use std::cell::Cell;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A configuration exercising every modelled field.
///
/// Labels match the built-in `en-us` table, so normalizing and then
/// exporting the document gives back the same document.
pub fn sample_raw_config() -> RawConfig {
    json!({
        "header": {
            "Name": "MD1",
            "Layout": "Standard",
            "Base": "Blank",
            "Version": "0.3",
            "Author": "Test Suite"
        },
        "matrix": [
            {
                "code": "0x01", "x": 0, "y": 0, "w": 1, "h": 1,
                "layers": {
                    "0": { "key": "ESC", "label": "Esc" },
                    "1": { "key": "F1", "label": "F1" }
                }
            },
            {
                "code": "0x02", "x": 1, "y": 0, "w": 1, "h": 1,
                "layers": { "0": { "key": "1", "label": "1", "type": "hid" } }
            },
            {
                "code": "0x03", "x": 2, "y": 0, "w": 1, "h": 1,
                "layers": { "0": { "key": "2", "label": "2" } }
            },
            {
                "code": "0x04", "x": 0, "y": 1, "w": 2, "h": 1,
                "layers": { "0": { "key": "SPACE", "label": "Space" } }
            },
            { "code": "0x05", "x": 3, "y": 0, "w": 1, "h": 1 }
        ],
        "defines": [
            { "name": "usbProtocol_define", "value": "1" },
            { "name": "stateWordSize_define", "value": "16" }
        ],
        "leds": [
            { "id": 1, "x": 0, "y": 0 },
            { "id": 2, "x": 1, "y": 0 }
        ],
        "custom": {
            "0": "U\"A\" : U\"B\";",
            "1": ""
        },
        "animations": {
            "lava": { "settings": "loop", "frames": "P[1](255,0,0)" },
            "rain": { "settings": "framedelay:2", "frames": "" }
        },
        "macros": { "hello": ["H", "I"] }
    })
    .as_object()
    .cloned()
    .expect("fixture is an object")
}

/// The smallest document the format accepts.
pub fn minimal_raw_config() -> RawConfig {
    json!({ "header": {}, "matrix": [] })
        .as_object()
        .cloned()
        .expect("fixture is an object")
}

/// Writes a configuration to a path.
pub fn write_config_file(raw: &RawConfig, path: &Path) -> anyhow::Result<()> {
    ConfigFileService::save(raw, path)
}

/// Creates a temporary configuration file.
///
/// # Returns
/// The file path and the directory guard that keeps it alive.
pub fn create_temp_config_file(raw: &RawConfig) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.json");
    write_config_file(raw, &path).expect("Failed to write config file");
    (path, temp_dir)
}

/// Reads a configuration file back for assertions.
pub fn read_config_file(path: &Path) -> RawConfig {
    ConfigFileService::load(path).expect("Failed to read config file")
}

/// Deterministic identifiers: `id-0`, `id-1`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: Cell<usize>,
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        let id = self.next.get();
        self.next.set(id + 1);
        format!("id-{id}")
    }
}
