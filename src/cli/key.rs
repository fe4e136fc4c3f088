//! Keymap commands.

use crate::cli::common::{print_json, CliError, CliResult, ConfigFileArgs, EditSession};
use crate::models::{KeyAssignment, KeyId};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Edit key assignments
#[derive(Debug, Clone, Args)]
pub struct KeyArgs {
    /// Key subcommand
    #[command(subcommand)]
    pub command: KeyCommand,
}

/// Key subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum KeyCommand {
    /// Assign a key name to one key on one layer
    Set(SetKeyArgs),
}

/// Assign a key name to one key on one layer
#[derive(Debug, Clone, Args)]
pub struct SetKeyArgs {
    #[command(flatten)]
    pub file: ConfigFileArgs,

    /// Key position in the matrix (0-based)
    #[arg(long, value_name = "ID")]
    pub key: usize,

    /// Layer index
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub layer: usize,

    /// Key name from the locale table (e.g., "ESC", "A", "F5")
    #[arg(long, value_name = "KEY")]
    pub code: String,
}

#[derive(Debug, Serialize)]
struct SetKeyResponse {
    key: usize,
    code: String,
    layer: usize,
    assignment: KeyAssignment,
}

impl KeyArgs {
    /// Execute the key command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            KeyCommand::Set(args) => args.execute(),
        }
    }
}

impl SetKeyArgs {
    /// Execute the set command
    pub fn execute(&self) -> CliResult<()> {
        let session = EditSession::open(&self.file)?;

        let label = session.locale.label(&self.code).ok_or_else(|| {
            CliError::validation(format!(
                "Unknown key '{}' for locale {}",
                self.code, session.locale.name
            ))
        })?;
        let assignment = KeyAssignment::new(&self.code, label);

        session.configurator.set_layer(self.layer);
        let key = session
            .configurator
            .update_keymap(KeyId(self.key), assignment.clone())
            .ok_or_else(|| CliError::validation(format!("Key {} not found", self.key)))?;
        session.save()?;

        print_json(&SetKeyResponse {
            key: self.key,
            code: key.code.clone(),
            layer: self.layer,
            assignment,
        })
    }
}
