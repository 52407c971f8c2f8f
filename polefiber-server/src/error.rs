//! CLI error handling with user-friendly messages.

use std::path::PathBuf;
use std::process;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Failed to process poles: {0}")]
    Plan(#[from] polefiber_core::Error),
    #[error("Failed to write file '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to render output: {0}")]
    Output(String),
    #[error("Installation prompt failed: {0}")]
    Prompt(std::io::Error),
    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {self}");

        match self {
            CliError::Plan(polefiber_core::Error::InputMissing(_)) => {
                eprintln!();
                eprintln!("No marked poles were found. Mark the poles on the map,");
                eprintln!("export them as GeoJSON and pass the file to `polefiber plan`.");
            }
            CliError::Plan(polefiber_core::Error::InputMalformed(_)) => {
                eprintln!();
                eprintln!("The point file must be a GeoJSON FeatureCollection of Point markers.");
            }
            _ => {}
        }

        process::exit(1)
    }
}
