//! Custom KLL commands.

use crate::cli::common::{CliError, CliResult, ConfigFileArgs, EditSession};
use crate::store::slots;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Edit per-layer custom KLL text
#[derive(Debug, Clone, Args)]
pub struct CustomArgs {
    /// Custom subcommand
    #[command(subcommand)]
    pub command: CustomCommand,
}

/// Custom subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum CustomCommand {
    /// Replace the custom KLL of one layer
    Set(SetCustomArgs),
}

/// Replace the custom KLL of one layer
#[derive(Debug, Clone, Args)]
pub struct SetCustomArgs {
    #[command(flatten)]
    pub file: ConfigFileArgs,

    /// Layer index
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub layer: usize,

    /// KLL text
    #[arg(long, conflicts_with = "from_file", required_unless_present = "from_file")]
    pub text: Option<String>,

    /// Read KLL text from a file
    #[arg(long = "file", value_name = "PATH")]
    pub from_file: Option<PathBuf>,
}

impl CustomArgs {
    /// Execute the custom command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            CustomCommand::Set(args) => args.execute(),
        }
    }
}

impl SetCustomArgs {
    /// Execute the set command
    pub fn execute(&self) -> CliResult<()> {
        let text = match (&self.text, &self.from_file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => std::fs::read_to_string(path).map_err(|e| {
                CliError::io(format!("Failed to read {}: {}", path.display(), e))
            })?,
            (None, None) => {
                return Err(CliError::validation("Either --text or --file is required"))
            }
        };

        let session = EditSession::open(&self.file)?;
        session.configurator.set_layer(self.layer);
        session.configurator.update_custom_kll(text);
        session.save()?;

        let layers = session
            .configurator
            .store()
            .get::<slots::Custom>()
            .map_or(0, |custom| custom.len());
        println!(
            "Custom KLL for layer {} set ({} layers with custom KLL).",
            self.layer, layers
        );
        Ok(())
    }
}
