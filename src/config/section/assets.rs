//! `[assets]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [assets]
//! root = "assets/photos"                       # Full-resolution images (relative to site root)
//! extensions = ["jpg", "jpeg", "png", "webp"]  # Accepted image extensions (case-insensitive)
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Field paths of `[assets]`.
pub struct AssetsFields {
    pub root: FieldPath,
    pub extensions: FieldPath,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Asset root directory.
    pub root: PathBuf,

    /// Accepted image extensions, without the leading dot.
    pub extensions: Vec<String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: "assets/photos".into(),
            extensions: ["jpg", "jpeg", "png", "webp"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl AssetsConfig {
    pub const FIELDS: AssetsFields = AssetsFields {
        root: FieldPath::new("assets.root"),
        extensions: FieldPath::new("assets.extensions"),
    };

    /// Check whether `path` carries one of the accepted extensions.
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|accepted| accepted.trim_start_matches('.').eq_ignore_ascii_case(ext))
            })
    }

    /// Validate `[assets]` config.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.extensions.iter().all(|e| e.trim_start_matches('.').is_empty()) {
            diag.error_with_hint(
                Self::FIELDS.extensions,
                "no image extensions configured",
                format!("set {} = [\"jpg\", \"jpeg\", \"png\"]", Self::FIELDS.extensions),
            );
        }
        if !self.root.is_dir() {
            diag.warn(
                Self::FIELDS.root,
                format!("`{}` is not a directory, nothing will be found", self.root.display()),
            );
        }
    }
}
