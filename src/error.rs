use reqwest::StatusCode;

/// Upstream fetch failures. Callers treat every variant as "upstream unavailable".
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request error: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Request failed with status: {0}")]
    Status(StatusCode),
    #[error("Decode error: {0}")]
    Decode(#[source] reqwest::Error),
}
