use geo::{Distance, HaversineMeasure, Point};

use crate::Error;
use crate::model::Coordinate;

/// Mean Earth radius used by the great-circle formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in meters between two coordinates
pub fn haversine_distance(from: Coordinate, to: Coordinate) -> f64 {
    HaversineMeasure::new(EARTH_RADIUS_KM * 1000.0).distance(Point::from(from), Point::from(to))
}

/// Great-circle distance in meters between two `(lat, lon)` pairs given in degrees
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if any component is not finite.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64, Error> {
    let from = Coordinate::new(lat1, lon1)?;
    let to = Coordinate::new(lat2, lon2)?;
    Ok(haversine_distance(from, to))
}
