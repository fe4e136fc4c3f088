//! Animation registry commands.

use crate::cli::common::{print_json, CliError, CliResult, ConfigFileArgs, EditSession};
use crate::models::{AnimationUpdate, Animations};
use clap::{Args, Subcommand};

/// Manage LED animations
#[derive(Debug, Clone, Args)]
pub struct AnimationArgs {
    /// Animation subcommand
    #[command(subcommand)]
    pub command: AnimationCommand,
}

/// Animation subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum AnimationCommand {
    /// List all animations
    List(ListAnimationsArgs),
    /// Add an empty animation
    Add(AddAnimationArgs),
    /// Update an animation's settings or frames
    Update(UpdateAnimationArgs),
    /// Rename an animation
    Rename(RenameAnimationArgs),
    /// Delete an animation
    Delete(DeleteAnimationArgs),
}

/// List all animations
#[derive(Debug, Clone, Args)]
pub struct ListAnimationsArgs {
    #[command(flatten)]
    pub file: ConfigFileArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add an empty animation
#[derive(Debug, Clone, Args)]
pub struct AddAnimationArgs {
    #[command(flatten)]
    pub file: ConfigFileArgs,

    /// Animation name
    #[arg(long)]
    pub name: String,
}

/// Update an animation
#[derive(Debug, Clone, Args)]
pub struct UpdateAnimationArgs {
    #[command(flatten)]
    pub file: ConfigFileArgs,

    /// Animation name
    #[arg(long)]
    pub name: String,

    /// New settings text
    #[arg(long)]
    pub settings: Option<String>,

    /// New frames text
    #[arg(long)]
    pub frames: Option<String>,
}

/// Rename an animation
#[derive(Debug, Clone, Args)]
pub struct RenameAnimationArgs {
    #[command(flatten)]
    pub file: ConfigFileArgs,

    /// Current name
    #[arg(long)]
    pub from: String,

    /// New name (replaces any animation already using it)
    #[arg(long)]
    pub to: String,
}

/// Delete an animation
#[derive(Debug, Clone, Args)]
pub struct DeleteAnimationArgs {
    #[command(flatten)]
    pub file: ConfigFileArgs,

    /// Animation name
    #[arg(long)]
    pub name: String,
}

impl AnimationArgs {
    /// Execute the animation command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            AnimationCommand::List(args) => args.execute(),
            AnimationCommand::Add(args) => args.execute(),
            AnimationCommand::Update(args) => args.execute(),
            AnimationCommand::Rename(args) => args.execute(),
            AnimationCommand::Delete(args) => args.execute(),
        }
    }
}

/// Fails unless an animation called `name` is loaded.
fn require_animation(session: &EditSession, name: &str) -> CliResult<()> {
    if session.configurator.animations().contains_key(name) {
        Ok(())
    } else {
        Err(CliError::validation(format!("Animation '{name}' not found")))
    }
}

fn validate_name(name: &str) -> CliResult<()> {
    if name.trim().is_empty() {
        return Err(CliError::validation("Animation name cannot be empty"));
    }
    Ok(())
}

impl ListAnimationsArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let session = EditSession::open(&self.file)?;
        let animations: Animations = session.configurator.animations();

        if self.json {
            return print_json(&animations);
        }

        if animations.is_empty() {
            println!("No animations.");
            return Ok(());
        }

        for (name, spec) in &animations {
            println!("{name}");
            println!("  settings: {}", spec.settings);
            println!("  frames:   {} lines", spec.frames.lines().count());
        }

        Ok(())
    }
}

impl AddAnimationArgs {
    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        validate_name(&self.name)?;

        let session = EditSession::open(&self.file)?;
        if session.configurator.animations().contains_key(&self.name) {
            return Err(CliError::validation(format!(
                "Animation '{}' already exists",
                self.name
            )));
        }

        session.configurator.add_animation(&self.name);
        session.save()?;

        println!("Animation '{}' added.", self.name);
        Ok(())
    }
}

impl UpdateAnimationArgs {
    /// Execute the update command
    pub fn execute(&self) -> CliResult<()> {
        let mut update = AnimationUpdate::new();
        if let Some(settings) = &self.settings {
            update = update.settings(settings);
        }
        if let Some(frames) = &self.frames {
            update = update.frames(frames);
        }
        if update.is_empty() {
            return Err(CliError::validation(
                "At least one of --settings or --frames must be specified",
            ));
        }

        let session = EditSession::open(&self.file)?;
        require_animation(&session, &self.name)?;

        session.configurator.update_animation(&self.name, &update);
        session.save()?;

        println!("Animation '{}' updated.", self.name);
        Ok(())
    }
}

impl RenameAnimationArgs {
    /// Execute the rename command
    pub fn execute(&self) -> CliResult<()> {
        validate_name(&self.to)?;

        let session = EditSession::open(&self.file)?;
        require_animation(&session, &self.from)?;

        session.configurator.rename_animation(&self.from, &self.to);
        session.save()?;

        println!("Animation '{}' renamed to '{}'.", self.from, self.to);
        Ok(())
    }
}

impl DeleteAnimationArgs {
    /// Execute the delete command
    pub fn execute(&self) -> CliResult<()> {
        let session = EditSession::open(&self.file)?;
        require_animation(&session, &self.name)?;

        session.configurator.delete_animation(&self.name);
        session.save()?;

        println!("Animation '{}' deleted.", self.name);
        Ok(())
    }
}
