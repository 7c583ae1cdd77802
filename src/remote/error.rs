use thiserror::Error;

/// Errors from the remote users endpoint.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Users endpoint returned status {status}")]
    Status { status: u16 },

    #[error("Failed to decode users payload: {0}")]
    Decode(#[source] serde_json::Error),
}
