use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Geocoding run cancelled")]
    Cancelled,

    #[error("Other error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GeocodeError>;
