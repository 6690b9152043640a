pub mod batch;
pub mod client;
pub mod error;
pub mod graph;
pub mod pipeline;

pub use client::WikiClient;
pub use error::GeocodeError;
pub use graph::{Link, LinkGraph, Page};
pub use pipeline::{CancelFlag, Geocoder, UngeocodedPolicy};
