//! Free-text tag splitting and normalization.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("static regex");
    static ref RADIO_WORD: Regex = Regex::new(r"\bradio\b").expect("static regex");
}

/// Splits a raw tag string into trimmed, non-empty pieces.
///
/// Comma-separated when the string contains a comma, whitespace-separated otherwise.
pub fn split_tags(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    let pieces: Vec<&str> = if raw.contains(',') {
        raw.split(',').collect()
    } else {
        raw.split_whitespace().collect()
    };

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s, " ").trim().to_string()
}

/// Normalizes a single tag: lowercase, whitespace collapsed, `local news` → `news`,
/// `local radio` dropped, and the standalone word `radio` removed.
///
/// Returns an empty string when nothing is left; callers filter those out.
pub fn normalize_tag(tag: &str) -> String {
    let mut tag = collapse_whitespace(&tag.trim().to_lowercase());
    if tag == "local news" {
        tag = "news".to_string();
    }
    if tag == "local radio" {
        return String::new();
    }

    let stripped = RADIO_WORD.replace_all(&tag, "");
    collapse_whitespace(&stripped)
}
