use std::fs;
use std::path::PathBuf;

use polefiber_core::prelude::*;

const THREE_POLES: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {"order": 3}, "geometry": {"type": "Point", "coordinates": [-98.95378718298933, 19.274528609523216]}},
        {"type": "Feature", "properties": {"order": 1}, "geometry": {"type": "Point", "coordinates": [-98.95330, 19.27470]}},
        {"type": "Feature", "properties": {"order": 2}, "geometry": {"type": "Point", "coordinates": [-98.95200, 19.27600]}}
    ]
}"#;

fn write_fixture(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("polefiber-core-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn three_points_give_two_connections_in_document_order() {
    let source = PointSourceConfig {
        path: write_fixture("three.geojson", THREE_POLES),
        strict: true,
    };
    let report = plan_from_file(
        &source,
        &InstallationPlan::Uniform(InstallationMethod::Aerial),
        &CostTable::default(),
    )
    .unwrap();

    let connections = &report.chain.connections;
    assert_eq!(connections.len(), 2);
    assert_eq!((connections[0].from, connections[0].to), (1, 2));
    assert_eq!((connections[1].from, connections[1].to), (2, 3));

    // Ordering follows the document, not the "order" property
    let first = report.chain.poles[0].location;
    assert!((first.lat() - 19.274528609523216).abs() < 1e-12);
    assert!((first.lon() - -98.95378718298933).abs() < 1e-12);

    let expected = haversine(19.274528609523216, -98.95378718298933, 19.27470, -98.95330).unwrap();
    assert!((connections[0].distance - expected).abs() < 1e-6);
    assert_eq!(connections[0].fiber, FiberBracket::classify(expected));
}

#[test]
fn total_cost_matches_hand_computation() {
    let points = points_from_str(THREE_POLES, false).unwrap();
    let methods = InstallationPlan::PerConnection(vec![
        InstallationMethod::Aerial,
        InstallationMethod::Underground,
    ]);
    let table = CostTable::default();
    let report = plan(&points, &methods, &table).unwrap();

    let mut expected = 3.0 * table.pole_price();
    for conn in &report.chain.connections {
        expected += table.fiber_rate(conn.fiber) * conn.distance
            + table.installation_rate(conn.method) * conn.distance;
    }
    assert!((report.total_cost() - expected).abs() < 1e-9);
    assert_eq!(report.costs.poles_charged, report.chain.pole_count());
}

#[test]
fn configured_prices_change_the_total() {
    let points = points_from_str(THREE_POLES, false).unwrap();
    let overrides: CostOverrides = serde_json::from_str(
        r#"{"pole": 0.0, "installation": {"aerial": 0.0}, "fiber": {}}"#,
    )
    .unwrap();
    let table = CostTable::default().with_overrides(&overrides).unwrap();
    let report = plan(&points, &InstallationPlan::default(), &table).unwrap();

    let fiber_only: f64 = report
        .chain
        .connections
        .iter()
        .map(|c| table.fiber_rate(c.fiber) * c.distance)
        .sum();
    assert!((report.total_cost() - fiber_only).abs() < 1e-9);
}

#[test]
fn single_marker_plans_to_nothing() {
    let single = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}}
    ]}"#;
    let source = PointSourceConfig {
        path: write_fixture("single.geojson", single),
        strict: false,
    };
    let report = plan_from_file(&source, &InstallationPlan::default(), &CostTable::default()).unwrap();
    assert_eq!(report.chain.pole_count(), 1);
    assert!(report.chain.connections.is_empty());
    assert_eq!(report.total_cost(), 0.0);
}

#[test]
fn broken_file_is_malformed_input() {
    let source = PointSourceConfig {
        path: write_fixture("broken.geojson", "{\"type\": \"FeatureCollection\", \"features\": ["),
        strict: false,
    };
    let err = plan_from_file(&source, &InstallationPlan::default(), &CostTable::default())
        .unwrap_err();
    assert!(matches!(err, Error::InputMalformed(_)));
}
