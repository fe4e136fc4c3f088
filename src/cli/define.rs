//! Define registry commands.

use crate::cli::common::{print_json, CliError, CliResult, ConfigFileArgs, EditSession};
use crate::models::Define;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Manage named constants
#[derive(Debug, Clone, Args)]
pub struct DefineArgs {
    /// Define subcommand
    #[command(subcommand)]
    pub command: DefineCommand,
}

/// Define subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum DefineCommand {
    /// List all defines
    List(ListDefinesArgs),
    /// Add a define
    Add(AddDefineArgs),
    /// Update a define's name and value
    Update(UpdateDefineArgs),
    /// Delete a define
    Delete(DeleteDefineArgs),
}

/// List all defines
#[derive(Debug, Clone, Args)]
pub struct ListDefinesArgs {
    #[command(flatten)]
    pub file: ConfigFileArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add a define
#[derive(Debug, Clone, Args)]
pub struct AddDefineArgs {
    #[command(flatten)]
    pub file: ConfigFileArgs,

    /// Constant name
    #[arg(long)]
    pub name: String,

    /// Constant value
    #[arg(long, default_value = "")]
    pub value: String,
}

/// Update a define
#[derive(Debug, Clone, Args)]
pub struct UpdateDefineArgs {
    #[command(flatten)]
    pub file: ConfigFileArgs,

    /// Define ID (from `define list`)
    #[arg(long)]
    pub id: String,

    /// New constant name
    #[arg(long)]
    pub name: String,

    /// New constant value
    #[arg(long)]
    pub value: String,
}

/// Delete a define
#[derive(Debug, Clone, Args)]
pub struct DeleteDefineArgs {
    #[command(flatten)]
    pub file: ConfigFileArgs,

    /// Define ID (from `define list`)
    #[arg(long)]
    pub id: String,
}

#[derive(Debug, Serialize)]
struct DefineListResponse {
    defines: Vec<Define>,
    count: usize,
}

#[derive(Debug, Serialize)]
struct AddDefineResponse {
    id: String,
}

impl DefineArgs {
    /// Execute the define command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            DefineCommand::List(args) => args.execute(),
            DefineCommand::Add(args) => args.execute(),
            DefineCommand::Update(args) => args.execute(),
            DefineCommand::Delete(args) => args.execute(),
        }
    }
}

/// Fails unless a define with `id` is loaded.
fn require_define(session: &EditSession, id: &str) -> CliResult<()> {
    if session
        .configurator
        .defines()
        .iter()
        .any(|define| define.id == id)
    {
        Ok(())
    } else {
        Err(CliError::validation(format!("Define '{id}' not found")))
    }
}

impl ListDefinesArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let session = EditSession::open(&self.file)?;
        let defines = session.configurator.defines();

        if self.json {
            return print_json(&DefineListResponse {
                count: defines.len(),
                defines,
            });
        }

        if defines.is_empty() {
            println!("No defines.");
            return Ok(());
        }

        println!("{:<40} {:<24} Value", "ID", "Name");
        println!("{}", "-".repeat(80));
        for define in &defines {
            println!("{:<40} {:<24} {}", define.id, define.name, define.value);
        }
        println!();
        println!("Total: {} defines", defines.len());

        Ok(())
    }
}

impl AddDefineArgs {
    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        if self.name.trim().is_empty() {
            return Err(CliError::validation("Define name cannot be empty"));
        }

        let session = EditSession::open(&self.file)?;
        let id = session.configurator.add_define(&self.name, &self.value);
        session.save()?;

        print_json(&AddDefineResponse { id })
    }
}

impl UpdateDefineArgs {
    /// Execute the update command
    pub fn execute(&self) -> CliResult<()> {
        let session = EditSession::open(&self.file)?;
        require_define(&session, &self.id)?;

        session
            .configurator
            .update_define(&self.id, &self.name, &self.value);
        session.save()?;

        println!("Define '{}' updated.", self.id);
        Ok(())
    }
}

impl DeleteDefineArgs {
    /// Execute the delete command
    pub fn execute(&self) -> CliResult<()> {
        let session = EditSession::open(&self.file)?;
        require_define(&session, &self.id)?;

        session.configurator.delete_define(&self.id);
        session.save()?;

        println!("Define '{}' deleted.", self.id);
        Ok(())
    }
}
