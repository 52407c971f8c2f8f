//! Geodesic computations on pole coordinates

pub mod distance;

pub use distance::{EARTH_RADIUS_KM, haversine, haversine_distance};
