// Render-state dataset export: serializes the pipeline output into the shapes
// an external scene renderer consumes.

use crate::heatmap::HeatmapScene;
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::Path;
use wikigeo_fetcher::LinkGraph;

#[derive(Debug, Clone, Serialize)]
pub enum DatasetFormat {
    Json,
    GeoJson,
}

impl DatasetFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(DatasetFormat::Json),
            "geojson" => Some(DatasetFormat::GeoJson),
            _ => None,
        }
    }
}

/// The two flat arrays the scatter-point and arc layers take.
#[derive(Serialize)]
struct SceneData<'a> {
    pages: &'a [wikigeo_fetcher::Page],
    links: &'a [wikigeo_fetcher::Link],
}

pub fn render_link_dataset(graph: &LinkGraph, format: &DatasetFormat) -> Result<String, String> {
    match format {
        DatasetFormat::Json => {
            let scene = SceneData {
                pages: &graph.pages,
                links: &graph.links,
            };
            serde_json::to_string_pretty(&scene).map_err(|e| format!("JSON export failed: {}", e))
        }
        DatasetFormat::GeoJson => render_link_geojson(graph),
    }
}

fn render_link_geojson(graph: &LinkGraph) -> Result<String, String> {
    let mut features = Vec::new();

    for page in &graph.pages {
        features.push(json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": page.coordinates,
            },
            "properties": { "title": page.title },
        }));
    }

    for link in &graph.links {
        features.push(json!({
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": [link.start, link.end],
            },
            "properties": {
                "title": link.title,
                "startTitle": link.start_title,
                "distance": link.distance,
            },
        }));
    }

    let collection = json!({
        "type": "FeatureCollection",
        "features": features,
    });
    serde_json::to_string_pretty(&collection).map_err(|e| format!("GeoJSON export failed: {}", e))
}

pub fn render_heatmap_dataset(scene: &HeatmapScene) -> Result<String, String> {
    serde_json::to_string_pretty(scene).map_err(|e| format!("JSON export failed: {}", e))
}

/// Write a rendered dataset to the given path, or stdout when no path is set.
pub fn write_dataset(contents: &str, path: Option<&Path>) -> Result<(), String> {
    match path {
        Some(path) => fs::write(path, contents)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e)),
        None => {
            println!("{}", contents);
            Ok(())
        }
    }
}
