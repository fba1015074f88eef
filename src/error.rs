use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrecipitationError {
    #[error("Invalid location block_no: {0}")]
    UnknownStation(String),

    #[error("Precipitation query did not complete within {0:?}")]
    Timeout(Duration),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl PrecipitationError {
    /// The HTTP status a server should answer with for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            PrecipitationError::UnknownStation(_) => StatusCode::BAD_REQUEST,
            PrecipitationError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            PrecipitationError::HttpClient(_) | PrecipitationError::InvalidConfiguration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
