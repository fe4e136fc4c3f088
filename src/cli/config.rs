//! Application settings commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use tracing::warn;

/// Application settings commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current settings
    Show(ConfigShowArgs),
    /// Set settings values
    Set(ConfigSetArgs),
}

/// Display current settings
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set settings values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Default locale name
    #[arg(long, value_name = "NAME")]
    locale: Option<String>,

    /// Directory with additional locale tables
    #[arg(long, value_name = "DIR")]
    tables_dir: Option<PathBuf>,

    /// Padding around the keyboard backdrop
    #[arg(long, value_name = "PX")]
    backdrop_padding: Option<u32>,

    /// Pixels per key unit
    #[arg(long, value_name = "PX")]
    size_factor: Option<u32>,

    /// Pixels per LED unit
    #[arg(long, value_name = "PX")]
    led_factor: Option<u32>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.locale.is_none()
            && self.tables_dir.is_none()
            && self.backdrop_padding.is_none()
            && self.size_factor.is_none()
            && self.led_factor.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one option must be specified: --locale, --tables-dir, \
                 --backdrop-padding, --size-factor, or --led-factor",
            ));
        }

        let mut config = Config::load().unwrap_or_else(|e| {
            warn!("Replacing unreadable settings: {e:#}");
            Config::default()
        });

        if let Some(dir) = &self.tables_dir {
            if !dir.is_dir() {
                return Err(CliError::validation(format!(
                    "Locale tables directory does not exist: {}",
                    dir.display()
                )));
            }
            config.locale.tables_dir = Some(dir.clone());
        }

        if let Some(locale) = &self.locale {
            config
                .locale_registry()
                .resolve(locale)
                .map_err(|e| CliError::validation(format!("{e:#}")))?;
            config.locale.default.clone_from(locale);
        }

        if let Some(padding) = self.backdrop_padding {
            config.ui.backdrop_padding = padding;
        }
        if let Some(size) = self.size_factor {
            config.ui.size_factor = size;
        }
        if let Some(led) = self.led_factor {
            config.ui.led_factor = led;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output settings in human-readable format
fn output_human_readable(config: &Config) {
    println!("{} Configuration", APP_NAME);
    println!("=====================");
    println!();

    println!("Locale:");
    println!("  Default: {}", config.locale.default);
    match &config.locale.tables_dir {
        Some(dir) => println!("  Tables Directory: {}", dir.display()),
        None => println!("  Tables Directory: (not configured)"),
    }
    println!();

    println!("UI:");
    println!("  Backdrop Padding: {}", config.ui.backdrop_padding);
    println!("  Size Factor: {}", config.ui.size_factor);
    println!("  LED Factor: {}", config.ui.led_factor);
    println!();
}
