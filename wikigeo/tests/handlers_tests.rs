// Tests for CLI handler helpers

use wikigeo::handlers::{parse_format, sanitize_seed_title};
use wikigeo_core::export::DatasetFormat;

// ============================================================================
// Seed Title Sanitization Tests
// ============================================================================

#[test]
fn test_sanitize_plain_title() {
    assert_eq!(sanitize_seed_title("Tehran").unwrap(), "Tehran");
}

#[test]
fn test_sanitize_trims_whitespace() {
    assert_eq!(sanitize_seed_title("  Tehran \n").unwrap(), "Tehran");
}

#[test]
fn test_sanitize_keeps_inner_spaces() {
    assert_eq!(
        sanitize_seed_title("New York City").unwrap(),
        "New York City"
    );
}

#[test]
fn test_sanitize_rejects_empty() {
    assert!(sanitize_seed_title("").is_err());
    assert!(sanitize_seed_title("   ").is_err());
}

#[test]
fn test_sanitize_rejects_pipe_separator() {
    let err = sanitize_seed_title("Tehran|Iran").unwrap_err();
    assert!(err.contains("'|'"));
}

// ============================================================================
// Format Parsing Tests
// ============================================================================

#[test]
fn test_parse_format_json() {
    assert!(matches!(parse_format("json"), Ok(DatasetFormat::Json)));
}

#[test]
fn test_parse_format_geojson_case_insensitive() {
    assert!(matches!(
        parse_format("GeoJSON"),
        Ok(DatasetFormat::GeoJson)
    ));
}

#[test]
fn test_parse_format_unknown() {
    let err = parse_format("yaml").unwrap_err();
    assert!(err.contains("yaml"));
}
