//! Poles, their coordinates and the connections between them

use geo::Point;
use serde::{Deserialize, Serialize};

use super::{FiberBracket, InstallationMethod};
use crate::Error;

/// 1-based position of a pole in the chain
pub type PoleId = usize;

/// WGS84 position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either value is NaN or infinite.
    pub fn new(lat: f64, lon: f64) -> Result<Self, Error> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(Error::InvalidInput(format!(
                "coordinate ({lat}, {lon}) is not a finite number pair"
            )));
        }
        Ok(Self { lat, lon })
    }

    /// Creates a coordinate from a GeoJSON position, which is `[lon, lat]`.
    pub fn from_lon_lat(lon: f64, lat: f64) -> Result<Self, Error> {
        Self::new(lat, lon)
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coord: Coordinate) -> Self {
        Point::new(coord.lon, coord.lat)
    }
}

impl TryFrom<Point<f64>> for Coordinate {
    type Error = Error;

    fn try_from(point: Point<f64>) -> Result<Self, Self::Error> {
        Self::from_lon_lat(point.x(), point.y())
    }
}

/// A marked pole location
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pole {
    pub id: PoleId,
    pub location: Coordinate,
}

/// Fiber run between two consecutive poles
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Connection {
    pub from: PoleId,
    pub to: PoleId,
    /// Great-circle length in meters
    pub distance: f64,
    pub fiber: FiberBracket,
    pub method: InstallationMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite_values() {
        assert!(matches!(
            Coordinate::new(f64::NAN, 0.0),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            Coordinate::new(19.0, f64::INFINITY),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn geojson_order_is_swapped() {
        let coord = Coordinate::from_lon_lat(-98.95, 19.27).unwrap();
        assert_eq!(coord.lat(), 19.27);
        assert_eq!(coord.lon(), -98.95);

        let point: Point<f64> = coord.into();
        assert_eq!(point.x(), -98.95);
        assert_eq!(point.y(), 19.27);
        assert_eq!(Coordinate::try_from(point).unwrap(), coord);
    }
}
