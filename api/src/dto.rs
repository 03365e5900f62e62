//! Wire types exchanged with the backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque access token identifying the user's session.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token. Only an empty token counts as "not logged in".
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// One historical concentration-test result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcentrationTestRecord {
    pub test_date: String,
    pub measurement_score: f64,
    pub error_count: f64,
}

/// Status codes carried in every backend response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseCode {
    Success,
    DatabaseError,
    AuthFailure,
    Other(String),
}

impl ResponseCode {
    pub fn parse(code: &str) -> Self {
        match code {
            "SU" => Self::Success,
            "DBE" => Self::DatabaseError,
            "AF" => Self::AuthFailure,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Decoded response to the recent-history request.
///
/// The backend sends `{ "code": ..., "message": ..., "concentrationTests": [...] }`;
/// only the success variant carries records, in backend (newest-first) order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawEnvelope")]
pub enum ResponseEnvelope {
    Success(Vec<ConcentrationTestRecord>),
    DatabaseError,
    AuthFailure,
    Unknown(String),
}

impl ResponseEnvelope {
    pub fn code(&self) -> &str {
        match self {
            Self::Success(_) => "SU",
            Self::DatabaseError => "DBE",
            Self::AuthFailure => "AF",
            Self::Unknown(code) => code,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvelope {
    code: String,
    #[serde(default)]
    concentration_tests: Option<Vec<ConcentrationTestRecord>>,
}

impl From<RawEnvelope> for ResponseEnvelope {
    fn from(raw: RawEnvelope) -> Self {
        match ResponseCode::parse(&raw.code) {
            ResponseCode::Success => Self::Success(raw.concentration_tests.unwrap_or_default()),
            ResponseCode::DatabaseError => Self::DatabaseError,
            ResponseCode::AuthFailure => Self::AuthFailure,
            ResponseCode::Other(code) => Self::Unknown(code),
        }
    }
}
