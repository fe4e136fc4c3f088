//! LazyKLL Library
//!
//! In-memory editing engine for layered keyboard configurations written in
//! KLL. A raw configuration document is normalized into an observable state
//! store, edited through [`engine::Configurator`], and reassembled into the
//! raw document shape for persistence.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod format;
pub mod models;
pub mod services;
pub mod store;
