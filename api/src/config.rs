//! API endpoint configuration.

/// Environment variable consulted for the backend base url.
pub const API_URL_VAR: &str = "FOCUSLOG_API_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:4000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base url. Native builds read `FOCUSLOG_API_URL` at runtime;
    /// wasm builds only see the value baked in at compile time.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(url) = std::env::var(API_URL_VAR) {
                if !url.trim().is_empty() {
                    return Self::new(url.trim());
                }
            }
        }

        match option_env!("FOCUSLOG_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
