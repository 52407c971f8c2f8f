use std::fs;

use geo::Point;
use geojson::{Feature, GeoJson, Geometry, Value as GeoJsonValue};
use log::{info, warn};

use super::PointSourceConfig;
use crate::Error;
use crate::model::Coordinate;

/// Reads pole coordinates from the file named by `config`, in document order.
///
/// # Errors
///
/// - [`Error::InputMissing`] if the file does not exist
/// - [`Error::InputMalformed`] if it is not a `GeoJSON` `FeatureCollection`
/// - [`Error::InvalidInput`] if a point has non-finite coordinates
pub fn read_points(config: &PointSourceConfig) -> Result<Vec<Coordinate>, Error> {
    if !config.path.exists() {
        return Err(Error::InputMissing(config.path.clone()));
    }

    info!("Reading pole markers: {}", config.path.display());
    let content = fs::read_to_string(&config.path)?;
    let points = points_from_str(&content, config.strict)?;
    info!(
        "Read {} poles from {}",
        points.len(),
        config.path.display()
    );
    Ok(points)
}

/// Parses pole coordinates from `GeoJSON` text.
pub fn points_from_str(content: &str, strict: bool) -> Result<Vec<Coordinate>, Error> {
    let geojson = content
        .parse::<GeoJson>()
        .map_err(|e| Error::InputMalformed(e.to_string()))?;
    points_from_geojson(&geojson, strict)
}

/// Extracts pole coordinates from a parsed `GeoJSON` document.
///
/// Only `Point` features are consumed. Other features are skipped unless
/// `strict` is set, in which case they make the whole input malformed.
pub fn points_from_geojson(geojson: &GeoJson, strict: bool) -> Result<Vec<Coordinate>, Error> {
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(Error::InputMalformed(
            "expected a FeatureCollection of point markers".to_string(),
        ));
    };

    let mut points = Vec::with_capacity(collection.features.len());
    for (idx, feature) in collection.features.iter().enumerate() {
        match point_geometry(feature) {
            Some(geometry) => points.push(coordinate_of(idx, geometry)?),
            None if strict => {
                return Err(Error::InputMalformed(format!(
                    "feature {idx} is {}, only Point features are allowed",
                    geometry_name(feature)
                )));
            }
            None => warn!(
                "Skipping feature {idx}: {} is not a pole marker",
                geometry_name(feature)
            ),
        }
    }
    Ok(points)
}

fn point_geometry(feature: &Feature) -> Option<&Geometry> {
    feature
        .geometry
        .as_ref()
        .filter(|geometry| matches!(geometry.value, GeoJsonValue::Point { .. }))
}

fn geometry_name(feature: &Feature) -> &'static str {
    feature
        .geometry
        .as_ref()
        .map_or("a feature without geometry", |g| match g.value {
            GeoJsonValue::Point { .. } => "Point",
            GeoJsonValue::MultiPoint { .. } => "MultiPoint",
            GeoJsonValue::LineString { .. } => "LineString",
            GeoJsonValue::MultiLineString { .. } => "MultiLineString",
            GeoJsonValue::Polygon { .. } => "Polygon",
            GeoJsonValue::MultiPolygon { .. } => "MultiPolygon",
            GeoJsonValue::GeometryCollection { .. } => "GeometryCollection",
        })
}

/// Reads a `[lon, lat, ...]` position; altitude is ignored.
fn coordinate_of(idx: usize, geometry: &Geometry) -> Result<Coordinate, Error> {
    if let GeoJsonValue::Point { coordinates: position } = &geometry.value
        && position.len() < 2
    {
        return Err(Error::InputMalformed(format!(
            "point feature {idx} needs at least longitude and latitude"
        )));
    }

    let point = Point::<f64>::try_from(geometry.value.clone())
        .map_err(|e| Error::InputMalformed(format!("point feature {idx}: {e}")))?;
    Coordinate::try_from(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [-98.9537, 19.2745]}},
            {"type": "Feature", "properties": {}, "geometry": {"type": "LineString", "coordinates": [[-98.95, 19.27], [-98.96, 19.28]]}},
            {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [-98.9529, 19.2750, 2240.0]}}
        ]
    }"#;

    #[test]
    fn swaps_lon_lat_and_keeps_order() {
        let points = points_from_str(MIXED, false).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].lat(), 19.2745);
        assert_eq!(points[0].lon(), -98.9537);
        assert_eq!(points[1].lat(), 19.2750);
        assert_eq!(points[1].lon(), -98.9529);
    }

    #[test]
    fn strict_mode_rejects_non_point_features() {
        let err = points_from_str(MIXED, true).unwrap_err();
        assert!(matches!(err, Error::InputMalformed(msg) if msg.contains("LineString")));
    }

    #[test]
    fn non_collection_documents_are_malformed() {
        let single = r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#;
        assert!(matches!(
            points_from_str(single, false),
            Err(Error::InputMalformed(_))
        ));
        assert!(matches!(
            points_from_str("not json at all", false),
            Err(Error::InputMalformed(_))
        ));
    }

    #[test]
    fn point_without_latitude_is_malformed() {
        let short = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [-98.95]}}
        ]}"#;
        assert!(matches!(
            points_from_str(short, false),
            Err(Error::InputMalformed(_))
        ));
    }

    #[test]
    fn empty_collection_yields_no_points() {
        let empty = r#"{"type": "FeatureCollection", "features": []}"#;
        assert!(points_from_str(empty, true).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_reported() {
        let config = PointSourceConfig {
            path: std::env::temp_dir().join("polefiber-does-not-exist.geojson"),
            strict: false,
        };
        assert!(matches!(read_points(&config), Err(Error::InputMissing(_))));
    }
}
