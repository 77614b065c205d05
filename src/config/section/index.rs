//! `[index]` section configuration.
//!
//! Settings of the gallery indexer.
//!
//! # Example
//!
//! ```toml
//! [index]
//! document = "gallery.html"   # Page receiving the gallery (relative to site root)
//! section = "section"         # class of the <section> wrapping the placeholder
//! container = "container"     # class of the <div> whose content is replaced
//! title = "Gallery"           # Heading above the grid (empty = no heading)
//! alt = "Gallery Image"       # alt text of every tile
//! lightbox = true             # Inject the lightbox overlay before </body>
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Field paths of `[index]`.
pub struct IndexFields {
    pub document: FieldPath,
    pub section: FieldPath,
    pub container: FieldPath,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Document holding the placeholder region.
    pub document: PathBuf,

    /// Class attribute value of the `<section>` marker.
    pub section: String,

    /// Class attribute value of the container `<div>` marker.
    pub container: String,

    /// Heading rendered above the grid.
    pub title: String,

    /// Alt text of every tile image.
    pub alt: String,

    /// Inject the lightbox overlay.
    pub lightbox: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            document: "gallery.html".into(),
            section: "section".into(),
            container: "container".into(),
            title: "Gallery".into(),
            alt: "Gallery Image".into(),
            lightbox: true,
        }
    }
}

impl IndexConfig {
    pub const FIELDS: IndexFields = IndexFields {
        document: FieldPath::new("index.document"),
        section: FieldPath::new("index.section"),
        container: FieldPath::new("index.container"),
    };

    /// Validate `[index]` config.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.section.trim().is_empty() {
            diag.error(Self::FIELDS.section, "marker class must not be empty");
        }
        if self.container.trim().is_empty() {
            diag.error(Self::FIELDS.container, "marker class must not be empty");
        }
        if self.document.as_os_str().is_empty() {
            diag.error(Self::FIELDS.document, "no target document configured");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_markers() {
        let config = IndexConfig::default();
        assert_eq!(config.section, "section");
        assert_eq!(config.container, "container");
        assert!(config.lightbox);
    }

    #[test]
    fn test_validate_empty_markers() {
        let config = IndexConfig {
            section: " ".into(),
            container: String::new(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }
}
