//! Cross-checks translation usage in `src/` against the embedded locales.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::FALLBACK_LANGUAGE;

const FTL_FILENAME: &str = "focuslog-ui.ftl";

fn crate_path(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(rel)
}

/// Message ids defined in a Fluent file (terms and comments skipped).
fn ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(is_key_char))
        .map(str::to_string)
        .collect()
}

fn is_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
            out.push(path);
        }
    }
}

/// Literal first arguments of the translation macro.
fn referenced_keys(sources: &[PathBuf]) -> BTreeSet<String> {
    let needle = concat!("t!", "(\"");
    let mut keys = BTreeSet::new();
    for path in sources {
        let content = fs::read_to_string(path).unwrap_or_default();
        for (start, _) in content.match_indices(needle) {
            let rest = &content[start + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if key.chars().all(is_key_char) {
                    keys.insert(key.to_string());
                }
            }
        }
    }
    keys
}

fn locale_keys(locale: &str) -> BTreeSet<String> {
    let path = crate_path("i18n").join(locale).join(FTL_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read {}: {err}", path.display()));
    ftl_keys(&content)
}

#[test]
fn every_referenced_key_exists_in_fallback() {
    let mut sources = Vec::new();
    rust_sources(&crate_path("src"), &mut sources);
    assert!(!sources.is_empty(), "no Rust sources found under src/");

    let fallback = locale_keys(FALLBACK_LANGUAGE);
    let missing: Vec<_> = referenced_keys(&sources)
        .into_iter()
        .filter(|key| !fallback.contains(key))
        .collect();

    assert!(
        missing.is_empty(),
        "keys used in src/ but missing from {FALLBACK_LANGUAGE}: {missing:?}"
    );
}

#[test]
fn locales_match_fallback_key_set() {
    let fallback = locale_keys(FALLBACK_LANGUAGE);
    assert!(!fallback.is_empty());

    for locale in crate::i18n::available_languages() {
        let keys = locale_keys(&locale);
        let missing: Vec<_> = fallback.difference(&keys).collect();
        let extra: Vec<_> = keys.difference(&fallback).collect();
        assert!(
            missing.is_empty() && extra.is_empty(),
            "{locale}: missing {missing:?}, not in fallback {extra:?}"
        );
    }
}

#[test]
fn key_parser_ignores_comments_and_terms() {
    let keys = ftl_keys("# note = x\n-brand = Focuslog\nrecent-title = 기록\n  .attr = y\n");
    assert_eq!(keys.into_iter().collect::<Vec<_>>(), vec!["recent-title"]);
}
