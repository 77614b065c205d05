//! Original → thumbnail path lookup for the rewriter.

use std::collections::BTreeMap;

use crate::asset::ThumbRoute;
use crate::report::Outcome;

/// Maps the literal `src` value of an original image to its thumbnail.
///
/// Originals containing spaces are also registered in their `%20`-encoded
/// form, since pages may reference such a path either way:
///
/// ```text
/// assets/ARES Photos/a.jpg      →  assets/thumbnails/a.jpg
/// assets/ARES%20Photos/a.jpg    →  assets/thumbnails/a.jpg
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMap {
    entries: BTreeMap<String, String>,
}

impl PathMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the map from materialized routes.
    ///
    /// `outcomes[i]` belongs to `routes[i]`. Failed routes get no entry, so
    /// their pages keep pointing at the original.
    pub fn from_outcomes(routes: &[ThumbRoute], outcomes: &[Outcome]) -> Self {
        let mut map = Self::new();
        for (route, outcome) in routes.iter().zip(outcomes) {
            if !outcome.is_failed() {
                map.insert(&route.asset.rel, &route.thumb_rel);
            }
        }
        map
    }

    /// Register `original → thumb`, plus the encoded pair when the original
    /// has spaces.
    pub fn insert(&mut self, original: &str, thumb: &str) {
        self.entries.insert(original.to_owned(), thumb.to_owned());

        let encoded = encode_spaces(original);
        if encoded != original {
            self.entries.insert(encoded, encode_spaces(thumb));
        }
    }

    pub fn get(&self, original: &str) -> Option<&str> {
        self.entries.get(original).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[inline]
fn encode_spaces(path: &str) -> String {
    path.replace(' ', "%20")
}
