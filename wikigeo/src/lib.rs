// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{parse_format, sanitize_seed_title};

// Re-export pipeline orchestration from wikigeo-core
pub use wikigeo_core::geocode::{
    GeocodeOptions, GeocodeStatusCallback, execute_geocode, generate_geocode_report,
};
