//! Service layer for file I/O.
//!
//! This module contains services that sit between the editing engine and
//! the file system.

pub mod config_files;

// Re-export commonly used types and functions
pub use config_files::ConfigFileService;
