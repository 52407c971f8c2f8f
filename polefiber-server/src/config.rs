//! `polefiber.toml` configuration
//!
//! ```toml
//! default_method = "aerial"
//!
//! [input]
//! path = "postes.geojson"
//! strict = false
//!
//! [costs]
//! pole = 100.0
//! [costs.fiber]
//! "Fibra 50m" = 0.45
//! [costs.installation]
//! underground = 2.5
//!
//! [server]
//! bind = "127.0.0.1:8080"
//! request_timeout_secs = 30
//! concurrency_limit = 64
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use polefiber_core::cost::{CostOverrides, CostTable};
use polefiber_core::{InstallationMethod, PointSourceConfig};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

pub const DEFAULT_CONFIG_FILE: &str = "polefiber.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Method used when no per-connection choice is given
    pub default_method: InstallationMethod,
    pub input: PointSourceConfig,
    pub costs: CostOverrides,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_method: InstallationMethod::Aerial,
            input: PointSourceConfig::default(),
            costs: CostOverrides::default(),
            server: ServerSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    pub bind: String,
    pub request_timeout_secs: u64,
    pub concurrency_limit: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            request_timeout_secs: 30,
            concurrency_limit: 64,
        }
    }
}

impl AppConfig {
    /// Loads the configuration file.
    ///
    /// An explicitly named file must exist. Without a name the default
    /// `polefiber.toml` is used when present, otherwise built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !path.exists() {
            if required {
                return Err(CliError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            CliError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml(&content)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))?;
        // Surface bad price keys at load time rather than on the first request
        config.cost_table()?;
        Ok(config)
    }

    /// Default prices with the configured overrides applied
    pub fn cost_table(&self) -> Result<CostTable, CliError> {
        CostTable::default()
            .with_overrides(&self.costs)
            .map_err(|e| CliError::Config(e.to_string()))
    }
}
