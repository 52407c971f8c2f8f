use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where pole markers are read from and how strictly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointSourceConfig {
    /// `GeoJSON` file exported by the map drawing tool
    pub path: PathBuf,
    /// Reject features that are not points instead of skipping them
    pub strict: bool,
}

impl Default for PointSourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("postes.geojson"),
            strict: false,
        }
    }
}
