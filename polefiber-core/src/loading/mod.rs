//! This module is responsible for reading marked pole locations
//! from `GeoJSON` point-marker files.

mod config;
mod points;

pub use config::PointSourceConfig;
pub use points::{points_from_geojson, points_from_str, read_points};
