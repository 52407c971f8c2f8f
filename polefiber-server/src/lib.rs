//! Command-line front end and HTTP API for `polefiber_core`.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;

pub use config::AppConfig;
pub use error::CliError;
