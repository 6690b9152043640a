use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// External bike-parking dataset consumed by the second heatmap layer.
pub const BIKE_PARKING_DATA_URL: &str =
    "https://raw.githubusercontent.com/visgl/deck.gl-data/master/website/sf-bike-parking.json";

/// Geotagged edit records bundled at build time; no network calls are needed
/// to produce the edit layer.
const BUNDLED_EDITS: &str = include_str!("../assets/changes_with_locations.json");

/// One geotagged recent-changes record.
#[derive(Debug, Clone, Deserialize)]
pub struct EditRecord {
    pub title: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub longitude: f64,
    pub latitude: f64,
}

/// One record of the bike-parking dataset, as published upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct BikeRack {
    #[serde(rename = "ADDRESS")]
    pub address: String,
    #[serde(rename = "SPACES")]
    pub spaces: f64,
    #[serde(rename = "COORDINATES")]
    pub coordinates: [f64; 2],
}

/// The position/weight pair a density layer aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapPoint {
    pub position: [f64; 2],
    pub weight: f64,
}

/// Everything the heatmap view needs: the edit layer's points plus the URL of
/// the bike-parking layer (fetched by whoever renders it).
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapScene {
    pub edits: Vec<HeatmapPoint>,
    pub rack_data_url: String,
    /// Present only when the caller materialized the rack layer itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub racks: Option<Vec<HeatmapPoint>>,
}

pub fn load_bundled_edits() -> Result<Vec<EditRecord>, String> {
    serde_json::from_str(BUNDLED_EDITS)
        .map_err(|e| format!("Failed to parse bundled edit records: {}", e))
}

/// Each edit contributes unit weight at its location.
pub fn edits_to_points(edits: &[EditRecord]) -> Vec<HeatmapPoint> {
    edits
        .iter()
        .map(|edit| HeatmapPoint {
            position: [edit.longitude, edit.latitude],
            weight: 1.0,
        })
        .collect()
}

/// A rack's weight is its capacity.
pub fn racks_to_points(racks: &[BikeRack]) -> Vec<HeatmapPoint> {
    racks
        .iter()
        .map(|rack| HeatmapPoint {
            position: rack.coordinates,
            weight: rack.spaces,
        })
        .collect()
}

pub fn load_heatmap_scene() -> Result<HeatmapScene, String> {
    let edits = load_bundled_edits()?;
    debug!("Loaded {} bundled edit records", edits.len());
    Ok(HeatmapScene {
        edits: edits_to_points(&edits),
        rack_data_url: BIKE_PARKING_DATA_URL.to_string(),
        racks: None,
    })
}

/// Materialize the bike-parking layer for renderers that cannot fetch the
/// dataset URL themselves.
pub async fn fetch_bike_racks(url: &str) -> Result<Vec<HeatmapPoint>, String> {
    let racks: Vec<BikeRack> = reqwest::get(url)
        .await
        .map_err(|e| format!("Failed to fetch bike-parking dataset: {}", e))?
        .json()
        .await
        .map_err(|e| format!("Failed to parse bike-parking dataset: {}", e))?;

    debug!("Fetched {} bike-parking records", racks.len());
    Ok(racks_to_points(&racks))
}
