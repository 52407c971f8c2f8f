use geo::{LineString, Point, line_string};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value as GeoJsonValue};
use serde_json::json;

use crate::Error;
use crate::cost::ConnectionCost;
use crate::model::Pole;
use crate::report::PlanReport;

impl PlanReport {
    /// Converts the planned chain to a `GeoJSON` `FeatureCollection`.
    ///
    /// Poles become `Point` features, connections become `LineString`
    /// features carrying their fiber, installation and cost annotations.
    pub fn to_geojson(&self) -> Result<FeatureCollection, Error> {
        let mut features = Vec::with_capacity(self.chain.poles.len() + self.costs.items.len());

        for pole in &self.chain.poles {
            features.push(create_pole_feature(pole)?);
        }
        for (idx, item) in self.costs.items.iter().enumerate() {
            let from = &self.chain.poles[item.from - 1];
            let to = &self.chain.poles[item.to - 1];
            features.push(create_connection_feature(idx, item, from, to)?);
        }

        let mut foreign_members = JsonObject::new();
        foreign_members.insert("total_cost".to_string(), json!(self.costs.total));
        foreign_members.insert("pole_cost".to_string(), json!(self.costs.pole_cost));
        foreign_members.insert("poles_charged".to_string(), json!(self.costs.poles_charged));
        foreign_members.insert(
            "generated_at".to_string(),
            json!(self.generated_at.to_rfc3339()),
        );

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: Some(foreign_members),
        })
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

fn create_pole_feature(pole: &Pole) -> Result<Feature, Error> {
    let point: Point<f64> = pole.location.into();
    let geometry = Geometry::new(GeoJsonValue::from(&point));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "kind": "pole",
            "pole": pole.id,
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn create_connection_feature(
    idx: usize,
    item: &ConnectionCost,
    from: &Pole,
    to: &Pole,
) -> Result<Feature, Error> {
    let line: LineString<f64> = line_string![
        (x: from.location.lon(), y: from.location.lat()),
        (x: to.location.lon(), y: to.location.lat())
    ];
    let geometry = Geometry::new(GeoJsonValue::from(&line));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "kind": "connection",
            "connection_index": idx,
            "from_pole": item.from,
            "to_pole": item.to,
            "distance_m": item.distance,
            "fiber": item.fiber,
            "installation": item.method,
            "stroke": item.fiber.color(),
            "line_style": item.method.line_style(),
            "fiber_cost": item.fiber_cost,
            "installation_cost": item.installation_cost,
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::chain::InstallationPlan;
    use crate::cost::CostTable;
    use crate::model::{Coordinate, InstallationMethod};
    use crate::report::plan;

    #[test]
    fn exports_poles_and_annotated_connections() {
        let points = [
            Coordinate::new(19.2745, -98.9537).unwrap(),
            Coordinate::new(19.2747, -98.9533).unwrap(),
        ];
        let report = plan(
            &points,
            &InstallationPlan::Uniform(InstallationMethod::Underground),
            &CostTable::default(),
        )
        .unwrap();

        let collection = report.to_geojson().unwrap();
        assert_eq!(collection.features.len(), 3);

        let line = &collection.features[2];
        assert_eq!(
            line.property("installation").and_then(|v| v.as_str()),
            Some("underground")
        );
        assert_eq!(
            line.property("line_style").and_then(|v| v.as_str()),
            Some("solid")
        );
        assert_eq!(line.property("from_pole").and_then(|v| v.as_u64()), Some(1));

        let total = collection
            .foreign_members
            .as_ref()
            .and_then(|m| m.get("total_cost"))
            .and_then(|v| v.as_f64());
        assert_eq!(total, Some(report.total_cost()));
    }

    #[test]
    fn exported_text_reads_back_as_the_same_poles() {
        let points = [
            Coordinate::new(19.2745, -98.9537).unwrap(),
            Coordinate::new(19.2747, -98.9533).unwrap(),
            Coordinate::new(19.2751, -98.9530).unwrap(),
        ];
        let report = plan(&points, &InstallationPlan::default(), &CostTable::default()).unwrap();
        let text = report.to_geojson_string().unwrap();

        let reread = crate::loading::points_from_str(&text, false).unwrap();
        assert_eq!(reread.len(), points.len());
        for (got, want) in reread.iter().zip(&points) {
            assert!((got.lat() - want.lat()).abs() < 1e-12);
            assert!((got.lon() - want.lon()).abs() < 1e-12);
        }
    }
}
