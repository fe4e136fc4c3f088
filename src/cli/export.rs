//! Export command.

use crate::cli::common::{CliError, CliResult, ConfigFileArgs, EditSession};
use crate::services::ConfigFileService;
use crate::store::slots;
use clap::Args;
use std::path::PathBuf;

/// Write a normalized copy of a configuration file into a directory
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub file: ConfigFileArgs,

    /// Destination directory (created if missing)
    #[arg(short, long, value_name = "DIR")]
    pub dir: PathBuf,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let session = EditSession::open(&self.file)?;

        std::fs::create_dir_all(&self.dir).map_err(|e| {
            CliError::io(format!(
                "Failed to create directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let headers = session
            .configurator
            .store()
            .get::<slots::Headers>()
            .unwrap_or_default();
        let target = ConfigFileService::export_path(&self.dir, &headers);
        session.save_as(&target)?;

        println!("{}", target.display());
        Ok(())
    }
}
