use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Point file not found: {}", .0.display())]
    InputMissing(PathBuf),
    #[error("Malformed point input: {0}")]
    InputMalformed(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}

impl Error {
    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InputMissing(_) => "input_missing",
            Error::InputMalformed(_) => "input_malformed",
            Error::InvalidInput(_) => "invalid_input",
            Error::ConfigurationError(_) => "configuration_error",
            Error::IoError(_) => "io_error",
            Error::GeoJsonError(_) => "geojson_error",
        }
    }
}
