use std::collections::{BTreeSet, HashSet};

/// Locale sources, embedded at compile time. Register new locales here.
const LOCALES: &[(&str, &str)] = &[
    ("ko-KR", include_str!("../i18n/ko-KR/focuslog-ui.ftl")),
    ("en-US", include_str!("../i18n/en-US/focuslog-ui.ftl")),
];

/// `(key, value)` for every single-line message definition.
fn messages(src: &str) -> Vec<(&str, &str)> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('.'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty() && !key.contains(char::is_whitespace))
        .collect()
}

#[test]
fn no_locale_defines_a_key_twice() {
    for (locale, src) in LOCALES {
        let mut seen = HashSet::new();
        let dups: BTreeSet<&str> = messages(src)
            .into_iter()
            .map(|(key, _)| key)
            .filter(|key| !seen.insert(*key))
            .collect();
        assert!(dups.is_empty(), "duplicate keys in {locale}: {dups:?}");
    }
}

#[test]
fn no_message_is_blank() {
    for (locale, src) in LOCALES {
        let blank: Vec<&str> = messages(src)
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(key, _)| key)
            .collect();
        assert!(blank.is_empty(), "blank messages in {locale}: {blank:?}");
    }
}

#[test]
fn alert_messages_keep_their_korean_wording() {
    let (_, fallback) = LOCALES[0];
    let messages = messages(fallback);
    let lookup = |key: &str| {
        messages
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or_default()
    };

    assert_eq!(lookup("alert-server-problem"), "서버에 문제가 있습니다.");
    assert_eq!(lookup("alert-auth-failed"), "인증에 실패했습니다.");
    assert_eq!(lookup("recent-title"), "집중력 검사 기록");
    assert_eq!(lookup("recent-take-test"), "검사하러가기");
}

#[test]
fn fluent_domain_matches_catalog_file_name() {
    let config = include_str!("../i18n.toml");
    let domain = config
        .lines()
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| key.trim() == "domain")
        .map(|(_, value)| value.trim().trim_matches('"'));
    // fl! derives `focuslog_ui` from the package name when no domain is set.
    assert_eq!(domain, Some("focuslog-ui"));

    let catalog = concat!(env!("CARGO_MANIFEST_DIR"), "/i18n/ko-KR/focuslog-ui.ftl");
    assert!(std::path::Path::new(catalog).is_file());
}
