//! HTTP calls against the backend.

use tracing::{debug, warn};

use crate::{ApiConfig, ApiError, Credential, ResponseEnvelope};

/// Relative path of the recent concentration-history endpoint.
pub const RECENT_HISTORY_PATH: &str = "/api/v1/test/concentration/recently";

/// Fetch the user's recent concentration-test history.
///
/// Resolves even on server or auth errors: those arrive as envelope codes.
/// Transport failures and undecodable bodies resolve to `None`.
pub async fn fetch_recent_history(
    config: &ApiConfig,
    credential: &Credential,
) -> Option<ResponseEnvelope> {
    match request_recent_history(config, credential).await {
        Ok(envelope) => {
            debug!(code = envelope.code(), "recent history response");
            Some(envelope)
        }
        Err(err) => {
            warn!(error = %err, "recent history request failed");
            None
        }
    }
}

/// Issue the request and decode whatever body comes back, regardless of
/// HTTP status: error bodies carry `DBE`/`AF` codes too.
pub async fn request_recent_history(
    config: &ApiConfig,
    credential: &Credential,
) -> Result<ResponseEnvelope, ApiError> {
    let url = recent_history_url(config)?;

    let response = reqwest::Client::new()
        .get(url)
        .bearer_auth(credential.as_str())
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        debug!(%status, "recent history returned non-success status");
    }

    Ok(serde_json::from_str(&body)?)
}

fn recent_history_url(config: &ApiConfig) -> Result<String, ApiError> {
    let base = config.base_url.as_str();
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(ApiError::InvalidBaseUrl(base.to_string()));
    }
    Ok(config.endpoint(RECENT_HISTORY_PATH))
}
