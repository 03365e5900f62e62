//! Session reader: where the access token lives on each platform.
//!
//! Components only see the [`CredentialProvider`] seam (through the
//! [`CredentialSource`] context value), so the storage backend can change
//! without touching fetch or render code.

use std::rc::Rc;

use api::Credential;

/// Fixed key the access token is stored under.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

pub trait CredentialProvider {
    /// Current credential, or `None` when the user is not logged in.
    fn credential(&self) -> Option<Credential>;
}

/// Cloneable handle to a provider, suitable for Dioxus context.
#[derive(Clone)]
pub struct CredentialSource(Rc<dyn CredentialProvider>);

impl CredentialSource {
    pub fn new(provider: impl CredentialProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn credential(&self) -> Option<Credential> {
        self.0.credential()
    }
}

/// Cookie store on web, the session file on native.
pub fn default_source() -> CredentialSource {
    #[cfg(target_arch = "wasm32")]
    {
        CredentialSource::new(CookieCredentials::new(ACCESS_TOKEN_KEY))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileCredentials::default_location() {
            Some(file) => CredentialSource::new(file),
            None => CredentialSource::new(StaticCredentials::none()),
        }
    }
}

/// A fixed credential; used for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(Option<Credential>);

impl StaticCredentials {
    pub fn new(token: &str) -> Self {
        Self(Credential::new(token))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredentials {
    fn credential(&self) -> Option<Credential> {
        self.0.clone()
    }
}

/// Look up `key` in a `document.cookie` style string (`a=1; b=2`).
pub fn cookie_value(cookies: &str, key: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| name.trim() == key)
        .map(|(_, value)| value.trim().to_string())
}

#[cfg(target_arch = "wasm32")]
pub struct CookieCredentials {
    key: &'static str,
}

#[cfg(target_arch = "wasm32")]
impl CookieCredentials {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

#[cfg(target_arch = "wasm32")]
impl CredentialProvider for CookieCredentials {
    fn credential(&self) -> Option<Credential> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let document: web_sys::HtmlDocument = document.dyn_into().ok()?;
        let cookies = document.cookie().ok()?;
        let raw = cookie_value(&cookies, self.key)?;
        let decoded = js_sys::decode_uri_component(&raw)
            .map(String::from)
            .unwrap_or(raw);
        Credential::new(decoded)
    }
}

/// Token persisted as a plain file by the desktop login flow.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileCredentials {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileCredentials {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/session/accessToken` for the current user.
    pub fn default_location() -> Option<Self> {
        let dirs = directories::ProjectDirs::from("app", "Focuslog", "focuslog")?;
        Some(Self::new(
            dirs.data_dir().join("session").join(ACCESS_TOKEN_KEY),
        ))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl CredentialProvider for FileCredentials {
    fn credential(&self) -> Option<Credential> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Credential::new(raw.trim()),
            Err(err) => {
                tracing::debug!(path = %self.path.display(), error = %err, "no session file");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_lookup_finds_exact_key() {
        let cookies = "theme=dark; accessTokenOld=stale; accessToken=abc.def.ghi";
        assert_eq!(
            cookie_value(cookies, ACCESS_TOKEN_KEY).as_deref(),
            Some("abc.def.ghi")
        );
        assert_eq!(cookie_value(cookies, "missing"), None);
        assert_eq!(cookie_value("", ACCESS_TOKEN_KEY), None);
    }

    #[test]
    fn cookie_value_may_contain_equals() {
        assert_eq!(
            cookie_value("accessToken=a=b==", ACCESS_TOKEN_KEY).as_deref(),
            Some("a=b==")
        );
    }

    #[test]
    fn static_source_round_trips() {
        let source = CredentialSource::new(StaticCredentials::new("token"));
        assert_eq!(source.credential().unwrap().as_str(), "token");
        assert!(CredentialSource::new(StaticCredentials::none())
            .credential()
            .is_none());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_credentials_trim_and_skip_missing() {
        let dir = std::env::temp_dir().join(format!("focuslog-session-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(ACCESS_TOKEN_KEY);

        let provider = FileCredentials::new(&path);
        assert!(provider.credential().is_none());

        std::fs::write(&path, "  jwt-token\n").unwrap();
        assert_eq!(provider.credential().unwrap().as_str(), "jwt-token");

        std::fs::write(&path, "\n").unwrap();
        assert!(provider.credential().is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
