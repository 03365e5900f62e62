//! Platform-specific side effects.

use tracing::info;

/// Show a blocking alert dialog with `message`.
///
/// Web calls `window.alert`; desktop asks the webview to do the same.
pub fn show_alert(message: &str) {
    info!(message, "showing alert");

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                tracing::warn!(?err, "window.alert failed");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dioxus::document::eval(&alert_script(message));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn alert_script(message: &str) -> String {
    // JSON string literals are valid JS string literals.
    let literal = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
    format!("window.alert({literal});")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn alert_script_escapes_message() {
        assert_eq!(
            alert_script("서버에 \"문제\""),
            r#"window.alert("서버에 \"문제\"");"#
        );
    }
}
