//! LazyKLL - command-line editor for KLL keyboard configurations
//!
//! Every command loads a raw configuration file into the editing engine,
//! applies one edit, and writes the file back.

use clap::{Parser, Subcommand};
use lazykll::cli::{
    AnimationArgs, CliResult, ConfigArgs, CustomArgs, DefineArgs, ExportArgs, HeaderArgs,
    InspectArgs, KeyArgs, LocaleArgs,
};
use lazykll::constants::APP_BINARY_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// LazyKLL - command-line editor for KLL keyboard configurations
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize a configuration file
    Inspect(InspectArgs),
    /// Manage header fields
    Header(HeaderArgs),
    /// Manage named constants
    Define(DefineArgs),
    /// Manage LED animations
    Animation(AnimationArgs),
    /// Edit key assignments
    Key(KeyArgs),
    /// Edit per-layer custom KLL text
    Custom(CustomArgs),
    /// Inspect locale tables
    Locale(LocaleArgs),
    /// Write a normalized copy of a configuration file
    Export(ExportArgs),
    /// Application settings
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Inspect(args) => args.execute(),
            Self::Header(args) => args.execute(),
            Self::Define(args) => args.execute(),
            Self::Animation(args) => args.execute(),
            Self::Key(args) => args.execute(),
            Self::Custom(args) => args.execute(),
            Self::Locale(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries command output
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }
}
