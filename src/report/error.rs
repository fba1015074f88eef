use thiserror::Error;

/// Failure to retrieve one month's report page.
///
/// Never surfaced to callers of the aggregation: the monthly cache logs it and
/// treats the month as having no records.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Empty response body from {0}")]
    EmptyBody(String),

    #[error("Failed to read response body from {0}")]
    Body(String, #[source] reqwest::Error),
}
