//! `src` attribute substitution.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::PathMap;

static SRC_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"src="([^"]*)""#).unwrap());

/// Point every `src="ORIG"` found in `map` at its thumbnail.
///
/// Single left-to-right pass: a substituted value is never looked up
/// again, so chained mappings can't cascade. Text outside `src="…"` is left
/// alone, including the full-size path passed to `openLightbox(...)`.
///
/// Returns the new document and the number of substitutions.
pub fn rewrite_sources(doc: &str, map: &PathMap) -> (String, usize) {
    if map.is_empty() {
        return (doc.to_owned(), 0);
    }

    let mut count = 0;
    let out = SRC_ATTR.replace_all(doc, |caps: &Captures<'_>| match map.get(&caps[1]) {
        Some(thumb) => {
            count += 1;
            format!(r#"src="{thumb}""#)
        }
        None => caps[0].to_owned(),
    });

    (out.into_owned(), count)
}
