//! Raw configuration file I/O service.
//!
//! This module centralizes reading and writing raw configuration documents,
//! so every command handles paths, errors, and atomic writes the same way.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{Headers, RawConfig};

/// Service for loading and saving raw configuration documents.
pub struct ConfigFileService;

impl ConfigFileService {
    /// Loads a raw configuration document from a JSON file.
    ///
    /// # Returns
    ///
    /// * `Ok(RawConfig)` - The top-level JSON object
    /// * `Err(...)` - File not found, invalid JSON, or not a JSON object
    pub fn load(path: &Path) -> Result<RawConfig> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;

        match value {
            serde_json::Value::Object(raw) => Ok(raw),
            _ => anyhow::bail!(
                "Configuration in {} must be a JSON object",
                path.display()
            ),
        }
    }

    /// Saves a raw configuration document as pretty-printed JSON.
    ///
    /// Writes to a temp file first and renames it over the target, so the
    /// file is never left half-written.
    pub fn save(raw: &RawConfig, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(raw).context("Failed to serialize configuration")?;

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp file {}", temp_path.display()))?;

        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to move temp file to {}", path.display()))?;

        Ok(())
    }

    /// Builds the file path an export of this configuration gets in `dir`.
    ///
    /// Uses the `Name` and `Layout` headers, e.g. `md1-standard.json`;
    /// falls back to `keyboard.json` when neither is set.
    #[must_use]
    pub fn export_path(dir: &Path, headers: &Headers) -> PathBuf {
        let parts: Vec<&str> = ["Name", "Layout"]
            .iter()
            .filter_map(|field| headers.get(*field))
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .collect();

        let stem = if parts.is_empty() {
            "keyboard".to_string()
        } else {
            sanitize_filename(&parts.join("-"))
        };

        dir.join(format!("{stem}.json"))
    }
}

/// Sanitizes a header value for use as a filename.
///
/// Replaces problematic characters with underscores and converts to lowercase.
///
/// # Examples
///
/// ```
/// # use lazykll::services::config_files::sanitize_filename;
/// assert_eq!(sanitize_filename("MD1 Standard"), "md1_standard");
/// assert_eq!(sanitize_filename("K-Type/ISO:v2"), "k-type_iso_v2");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    name.replace(['/', '\\', ':', ' '], "_").to_lowercase()
}
