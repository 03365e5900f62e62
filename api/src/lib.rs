//! Backend client for Focuslog: response envelopes, DTOs and the HTTP calls
//! the UI crate issues against the concentration-test API.

mod client;
mod config;
mod dto;
mod error;

pub use client::{fetch_recent_history, request_recent_history, RECENT_HISTORY_PATH};
pub use config::ApiConfig;
pub use dto::{ConcentrationTestRecord, Credential, ResponseCode, ResponseEnvelope};
pub use error::ApiError;
