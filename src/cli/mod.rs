//! CLI command handlers for LazyKLL.
//!
//! Each editing command loads a configuration file, applies one edit
//! through the engine, and writes the file back, which makes the engine
//! scriptable for automation and testing.

pub mod animation;
pub mod common;
pub mod config;
pub mod custom;
pub mod define;
pub mod export;
pub mod header;
pub mod inspect;
pub mod key;
pub mod locale;

// Re-export types used by main.rs and tests
pub use animation::AnimationArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use custom::CustomArgs;
pub use define::DefineArgs;
pub use export::ExportArgs;
pub use header::HeaderArgs;
pub use inspect::InspectArgs;
pub use key::KeyArgs;
pub use locale::LocaleArgs;
