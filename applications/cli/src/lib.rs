//! Mixtape CLI Library
//!
//! Configuration, wiring and subcommands behind the `mixtape` binary.
//!
//! This library exposes the core components for testing purposes.

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::{CliError, Result};
pub use state::{AppState, Service};
