//! Localization for `focuslog-ui`.
//!
//! Built on `i18n-embed` (language negotiation + asset loading), `fluent`
//! (message formatting), `rust-embed` (compile-time embedding of `.ftl`
//! files) and `i18n-embed-fl` (`fl!` macro with compile-time key checks).
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   ko-KR/focuslog-ui.ftl   (fallback/reference)
//!   en-US/focuslog-ui.ftl   (additional locale)
//! ```
//!
//! Usage in a component (after `i18n::init()` at app start):
//! ```ignore
//! use crate::t;
//! let title = t!("recent-title");
//! ```
//!
//! Desktop negotiates against the OS locale list, web against
//! `navigator.languages`. Assets are always embedded on wasm (`debug-embed`).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Ergonomic translation macro; arguments are passed as `name = value` pairs.
///
/// Expands to `fl!(&*LOADER, ...)` so every lookup routes through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/ko-KR/{DOMAIN}.ftl`.
const DOMAIN: &str = "focuslog-ui";

/// Product language and fallback for every lookup.
pub const FALLBACK_LANGUAGE: &str = "ko-KR";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => debug!(?selected, "localization bundles loaded"),
            Err(err) => warn!(error = %err, "failed selecting languages; continuing with fallback"),
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Language the loader currently resolves messages in.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Embedded language identifiers, sorted (for a picker).
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Load bundles and pin the fallback locale so string assertions are stable
/// regardless of the OS locale.
#[cfg(test)]
pub(crate) fn init_fallback_for_tests() {
    init();
    set_language(FALLBACK_LANGUAGE).expect("fallback locale loads");
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
