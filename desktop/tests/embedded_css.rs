#![cfg(test)]
//! The desktop shell inlines `ui/assets/theme/main.css` with `include_str!`.
//! A truncated or moved theme would only show up as unstyled windows at
//! runtime, so check it here. Keep the path in sync with `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = [
        "--color-bg",
        "--color-primary",
        "body {",
        ".button--primary",
        ".recent__chart-box",
    ];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
