use wikigeo_core::export::DatasetFormat;

// Helper functions for the globe and heatmap handlers

/// Validate and normalize a seed title before it reaches the query API.
/// Pipe is the API's bulk-title separator and cannot appear in a title.
pub fn sanitize_seed_title(raw: &str) -> Result<String, String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err("Seed title must not be empty".to_string());
    }
    if title.contains('|') {
        return Err(format!(
            "Seed title '{}' contains '|', which the query API reserves as a title separator",
            title
        ));
    }
    Ok(title.to_string())
}

/// Parse a dataset format name from the CLI
pub fn parse_format(name: &str) -> Result<DatasetFormat, String> {
    DatasetFormat::from_str(name)
        .ok_or_else(|| format!("Unknown dataset format '{}' (expected json or geojson)", name))
}
