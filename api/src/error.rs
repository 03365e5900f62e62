use thiserror::Error;

/// Failures on the request path. The public fetch collapses these into a
/// missing envelope after logging them.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("base url `{0}` is not a valid http(s) url")]
    InvalidBaseUrl(String),

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("response body is not a response envelope: {0}")]
    Decode(#[from] serde_json::Error),
}
