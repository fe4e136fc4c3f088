//! Read-only summary of a configuration file.

use crate::cli::common::{print_json, CliResult, ConfigFileArgs, EditSession};
use crate::models::Headers;
use clap::Args;
use serde::Serialize;

/// Summarize a configuration file
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub file: ConfigFileArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct InspectResponse {
    locale: String,
    headers: Headers,
    key_count: usize,
    layers: Vec<usize>,
    define_count: usize,
    animations: Vec<String>,
    custom_layers: Vec<String>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let session = EditSession::open(&self.file)?;
        let state = session.configurator.store().snapshot();

        let matrix = state.matrix.unwrap_or_default();
        let response = InspectResponse {
            locale: session.locale.name.clone(),
            headers: state.headers.unwrap_or_default(),
            key_count: matrix.len(),
            layers: matrix.layer_indices(),
            define_count: state.defines.map_or(0, |defines| defines.len()),
            animations: state
                .animations
                .map(|animations| animations.into_keys().collect())
                .unwrap_or_default(),
            custom_layers: state
                .custom
                .map(|custom| custom.into_keys().collect())
                .unwrap_or_default(),
        };

        if self.json {
            return print_json(&response);
        }

        println!("Configuration: {}", session.path().display());
        println!("Locale: {}", response.locale);
        println!();
        println!("Headers:");
        for (name, value) in &response.headers {
            println!("  {:<20} {}", name, value);
        }
        println!();
        println!("Keys: {}", response.key_count);
        println!(
            "Layers: {}",
            response
                .layers
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("Defines: {}", response.define_count);
        println!("Animations: {}", response.animations.join(", "));
        println!("Custom KLL layers: {}", response.custom_layers.join(", "));

        Ok(())
    }
}
