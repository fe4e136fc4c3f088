//! Shared plumbing for CLI commands.
//!
//! Every editing command follows the same cycle: load the raw file into a
//! fresh engine, apply one edit, and write the reassembled document back.
//! [`EditSession`] packages that cycle.

use crate::config::Config;
use crate::engine::Configurator;
use crate::format::LocaleTable;
use crate::services::ConfigFileService;
use clap::Args;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Process exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Invalid input or target not found
    Validation = 1,
    /// File system or serialization failure
    Io = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error reported by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Message printed on stderr
    pub message: String,
}

impl CliError {
    /// Invalid input or unknown target.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// File system or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Io,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Arguments shared by every command that reads a configuration file.
#[derive(Debug, Clone, Args)]
pub struct ConfigFileArgs {
    /// Path to raw configuration JSON file
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Locale table for key labels (defaults to the configured locale)
    #[arg(long, value_name = "NAME")]
    pub locale: Option<String>,
}

/// A configuration file loaded into an engine.
pub struct EditSession {
    /// Engine holding the loaded configuration
    pub configurator: Configurator,
    /// Locale the file was loaded with
    pub locale: LocaleTable,
    path: PathBuf,
}

impl EditSession {
    /// Loads the file named by `args` using the application settings.
    pub fn open(args: &ConfigFileArgs) -> CliResult<Self> {
        // A broken settings file should not block editing
        let settings = Config::load().unwrap_or_else(|e| {
            warn!("Ignoring application settings: {e:#}");
            Config::default()
        });

        let locale_name = args
            .locale
            .as_deref()
            .unwrap_or(settings.locale.default.as_str());
        let locale = settings
            .locale_registry()
            .resolve(locale_name)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let raw = ConfigFileService::load(&args.config)
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

        let configurator = Configurator::with_ui(settings.ui_constants());
        configurator
            .update_config(raw, &locale)
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        Ok(Self {
            configurator,
            locale,
            path: args.config.clone(),
        })
    }

    /// Path the session was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the current configuration back to the loaded file.
    pub fn save(&self) -> CliResult<()> {
        self.save_as(&self.path)
    }

    /// Writes the current configuration to another file.
    pub fn save_as(&self, path: &Path) -> CliResult<()> {
        ConfigFileService::save(&self.configurator.current_config(), path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))
    }
}

/// Prints a value as JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("x").exit_code.code(), 1);
        assert_eq!(CliError::io("x").exit_code.code(), 2);
    }

    #[test]
    fn test_cli_error_display() {
        assert_eq!(CliError::io("disk full").to_string(), "disk full");
    }
}
