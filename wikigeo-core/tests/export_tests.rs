// Tests for render-state dataset export

use wikigeo_core::export::{DatasetFormat, render_link_dataset, write_dataset};
use wikigeo_fetcher::{Link, LinkGraph, Page};

fn sample_graph() -> LinkGraph {
    LinkGraph {
        seed_title: "Tehran".to_string(),
        pages: vec![
            Page {
                title: "Tehran".to_string(),
                coordinates: [51.4, 35.7],
            },
            Page {
                title: "Iran".to_string(),
                coordinates: [53.688, 32.4279],
            },
        ],
        links: vec![Link {
            start: [53.688, 32.4279],
            end: [51.4, 35.7],
            title: "Iran".to_string(),
            distance: 1,
            start_title: "Tehran".to_string(),
        }],
        skipped: vec![],
    }
}

#[test]
fn test_format_from_str() {
    assert!(matches!(
        DatasetFormat::from_str("json"),
        Some(DatasetFormat::Json)
    ));
    assert!(matches!(
        DatasetFormat::from_str("GeoJSON"),
        Some(DatasetFormat::GeoJson)
    ));
    assert!(DatasetFormat::from_str("yaml").is_none());
}

#[test]
fn test_json_export_has_both_arrays() {
    let rendered = render_link_dataset(&sample_graph(), &DatasetFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["pages"].as_array().unwrap().len(), 2);
    assert_eq!(value["links"].as_array().unwrap().len(), 1);
    // Renderer contract: camel-cased startTitle, [lon, lat] arrays.
    assert_eq!(value["links"][0]["startTitle"], "Tehran");
    assert_eq!(value["pages"][0]["coordinates"][0], 51.4);
}

#[test]
fn test_json_export_omits_skipped_titles() {
    let mut graph = sample_graph();
    graph.skipped.push("Stub".to_string());
    let rendered = render_link_dataset(&graph, &DatasetFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert!(value.get("skipped").is_none());
    assert!(!rendered.contains("Stub"));
}

#[test]
fn test_geojson_export_feature_shapes() {
    let rendered = render_link_dataset(&sample_graph(), &DatasetFormat::GeoJson).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["type"], "FeatureCollection");
    let features = value["features"].as_array().unwrap();
    assert_eq!(features.len(), 3);

    let points: Vec<_> = features
        .iter()
        .filter(|f| f["geometry"]["type"] == "Point")
        .collect();
    let lines: Vec<_> = features
        .iter()
        .filter(|f| f["geometry"]["type"] == "LineString")
        .collect();
    assert_eq!(points.len(), 2);
    assert_eq!(lines.len(), 1);

    assert_eq!(lines[0]["properties"]["distance"], 1);
    assert_eq!(lines[0]["properties"]["startTitle"], "Tehran");
    assert_eq!(lines[0]["geometry"]["coordinates"][1][0], 51.4);
}

#[test]
fn test_write_dataset_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.json");

    let rendered = render_link_dataset(&sample_graph(), &DatasetFormat::Json).unwrap();
    write_dataset(&rendered, Some(&path)).unwrap();

    let read_back = std::fs::read_to_string(&path).unwrap();
    assert_eq!(read_back, rendered);
}
