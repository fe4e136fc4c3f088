//! Locale table commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};

/// Inspect locale tables
#[derive(Debug, Clone, Args)]
pub struct LocaleArgs {
    /// Locale subcommand
    #[command(subcommand)]
    pub command: LocaleCommand,
}

/// Locale subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum LocaleCommand {
    /// List available locales
    List(ListLocalesArgs),
}

/// List available locales
#[derive(Debug, Clone, Args)]
pub struct ListLocalesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl LocaleArgs {
    /// Execute the locale command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            LocaleCommand::List(args) => args.execute(),
        }
    }
}

impl ListLocalesArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let names = config
            .locale_registry()
            .available()
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        if self.json {
            return print_json(&names);
        }

        for name in &names {
            if *name == config.locale.default {
                println!("{name} (default)");
            } else {
                println!("{name}");
            }
        }
        Ok(())
    }
}
