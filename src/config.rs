//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application settings
//! in TOML format with platform-specific directory resolution. These are
//! settings of the tool itself, not of a keyboard configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::APP_DIR_NAME;
use crate::format::locale::{LocaleRegistry, DEFAULT_LOCALE};
use crate::models::UiConstants;

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "LAZYKLL_CONFIG_DIR";

/// Locale settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Locale used when a command does not name one (e.g., "en-us")
    #[serde(default = "default_locale")]
    pub default: String,
    /// Directory with additional `<name>.json` locale tables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables_dir: Option<PathBuf>,
}

/// Default locale name
fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default: default_locale(),
            tables_dir: None,
        }
    }
}

/// Keyboard drawing constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Padding around the keyboard backdrop
    #[serde(default = "default_backdrop_padding")]
    pub backdrop_padding: u32,
    /// Pixels per key unit
    #[serde(default = "default_size_factor")]
    pub size_factor: u32,
    /// Pixels per LED unit
    #[serde(default = "default_led_factor")]
    pub led_factor: u32,
}

fn default_backdrop_padding() -> u32 {
    UiConstants::default().backdrop_padding
}

fn default_size_factor() -> u32 {
    UiConstants::default().size_factor
}

fn default_led_factor() -> u32 {
    UiConstants::default().led_factor
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            backdrop_padding: default_backdrop_padding(),
            size_factor: default_size_factor(),
            led_factor: default_led_factor(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/LazyKLL/config.toml`
/// - macOS: `~/Library/Application Support/LazyKLL/config.toml`
/// - Windows: `%APPDATA%\LazyKLL\config.toml`
///
/// # Validation
///
/// - default locale must be non-empty
/// - `tables_dir`, if set, must be an existing directory
/// - UI factors must be non-zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Locale settings
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Drawing constants
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// `LAZYKLL_CONFIG_DIR` overrides the platform location.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.locale.default.trim().is_empty() {
            anyhow::bail!("Default locale cannot be empty");
        }

        if let Some(dir) = &self.locale.tables_dir {
            if !dir.is_dir() {
                anyhow::bail!("Locale tables directory does not exist: {}", dir.display());
            }
        }

        if self.ui.size_factor == 0 || self.ui.led_factor == 0 {
            anyhow::bail!("UI size and LED factors must be greater than zero");
        }

        Ok(())
    }

    /// Display constants for a new state container.
    #[must_use]
    pub fn ui_constants(&self) -> UiConstants {
        UiConstants {
            backdrop_padding: self.ui.backdrop_padding,
            size_factor: self.ui.size_factor,
            led_factor: self.ui.led_factor,
        }
    }

    /// Locale registry over the built-in tables and `tables_dir`.
    #[must_use]
    pub fn locale_registry(&self) -> LocaleRegistry {
        match &self.locale.tables_dir {
            Some(dir) => LocaleRegistry::with_dir(dir),
            None => LocaleRegistry::new(),
        }
    }
}
