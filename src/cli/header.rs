//! Header field commands.

use crate::cli::common::{CliResult, ConfigFileArgs, EditSession};
use clap::{Args, Subcommand};

/// Manage header fields
#[derive(Debug, Clone, Args)]
pub struct HeaderArgs {
    /// Header subcommand
    #[command(subcommand)]
    pub command: HeaderCommand,
}

/// Header subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum HeaderCommand {
    /// Set a header field, creating it if absent
    Set(SetHeaderArgs),
}

/// Set a header field
#[derive(Debug, Clone, Args)]
pub struct SetHeaderArgs {
    #[command(flatten)]
    pub file: ConfigFileArgs,

    /// Header field name (e.g., "Author")
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// New value
    #[arg(long, value_name = "VALUE")]
    pub value: String,
}

impl HeaderArgs {
    /// Execute the header command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            HeaderCommand::Set(args) => args.execute(),
        }
    }
}

impl SetHeaderArgs {
    /// Execute the set command
    pub fn execute(&self) -> CliResult<()> {
        let session = EditSession::open(&self.file)?;
        session.configurator.update_header(&self.name, &self.value);
        session.save()?;

        println!("Header '{}' set.", self.name);
        Ok(())
    }
}
