// src/utils/mod.rs

//! Utility functions and helpers.

pub mod http;
pub mod url;

use scraper::Html;

/// Turn an HTML fragment into plain text.
///
/// Tags are dropped, entities decoded and whitespace runs collapsed to a
/// single space.
pub fn clean_text(fragment: &str) -> String {
    if !fragment.contains(['<', '&']) {
        return normalize_whitespace(fragment);
    }

    let parsed = Html::parse_fragment(fragment);
    let text: String = parsed.root_element().text().collect();
    normalize_whitespace(&text)
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
