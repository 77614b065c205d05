//! `[thumbs]` section configuration.
//!
//! Thumbnail generation and `src` rewriting settings.
//!
//! # Example
//!
//! ```toml
//! [thumbs]
//! root = "assets/thumbnails"      # Mirrors the asset tree (relative to site root)
//! width = 600                     # Target width in pixels, aspect ratio preserved
//! refresh = "missing"             # missing | always
//! resizer = "builtin"             # builtin | magick | sips | ffmpeg
//! timeout = 60                    # Seconds per external resize, 0 = no limit
//! jobs = 0                        # Resize threads, 0 = one per core
//! documents = ["gallery.html"]    # Pages whose src attributes are rewritten
//! ```
//!
//! # Refresh policy
//!
//! - `missing` only creates thumbnails that don't exist yet. Cheap, but a
//!   changed `width` has no effect on existing files.
//! - `always` regenerates every thumbnail. Use it (or `--force`) after
//!   changing `width`.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// When to (re)generate a thumbnail.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RefreshPolicy {
    /// Generate only when no thumbnail exists yet.
    #[default]
    Missing,
    /// Regenerate every thumbnail.
    Always,
}

/// Thumbnail resize backend.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Resizer {
    /// Use the built-in `image` crate.
    #[default]
    Builtin,
    /// Use ImageMagick (`magick` command).
    Magick,
    /// Use macOS `sips`.
    Sips,
    /// Use FFmpeg.
    Ffmpeg,
}

impl Resizer {
    /// External program this backend runs, if any.
    pub const fn program(self) -> Option<&'static str> {
        match self {
            Self::Builtin => None,
            Self::Magick => Some("magick"),
            Self::Sips => Some("sips"),
            Self::Ffmpeg => Some("ffmpeg"),
        }
    }

    const fn install_hint(self) -> &'static str {
        match self {
            Self::Builtin => "",
            Self::Magick => "install ImageMagick",
            Self::Sips => "sips ships with macOS only",
            Self::Ffmpeg => "install FFmpeg",
        }
    }
}

/// Field paths of `[thumbs]`.
pub struct ThumbsFields {
    pub root: FieldPath,
    pub width: FieldPath,
    pub resizer: FieldPath,
    pub documents: FieldPath,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbsConfig {
    /// Thumbnail root directory.
    pub root: PathBuf,

    /// Target width in pixels.
    pub width: u32,

    /// Thumbnail refresh policy.
    pub refresh: RefreshPolicy,

    /// Resize backend.
    pub resizer: Resizer,

    /// Per-invocation limit for external resizers, in seconds (0 = none).
    pub timeout: u64,

    /// Worker threads for resizing (0 = rayon default).
    pub jobs: usize,

    /// Documents whose `src` attributes are rewritten, in order.
    pub documents: Vec<PathBuf>,
}

impl Default for ThumbsConfig {
    fn default() -> Self {
        Self {
            root: "assets/thumbnails".into(),
            width: 600,
            refresh: RefreshPolicy::Missing,
            resizer: Resizer::Builtin,
            timeout: 60,
            jobs: 0,
            documents: vec!["gallery.html".into()],
        }
    }
}

impl ThumbsConfig {
    pub const FIELDS: ThumbsFields = ThumbsFields {
        root: FieldPath::new("thumbs.root"),
        width: FieldPath::new("thumbs.width"),
        resizer: FieldPath::new("thumbs.resizer"),
        documents: FieldPath::new("thumbs.documents"),
    };

    /// Per-invocation limit for external resizers.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }

    /// Validate `[thumbs]` config.
    ///
    /// # Checks
    /// - `width` must be positive.
    /// - An external resizer must be installed.
    /// - At least one document should be listed.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.width == 0 {
            diag.error(Self::FIELDS.width, "must be greater than 0");
        }

        if let Some(program) = self.resizer.program()
            && which::which(program).is_err()
        {
            diag.error_with_hint(
                Self::FIELDS.resizer,
                format!("`{program}` command not found"),
                format!(
                    "{} or set {} = \"builtin\"",
                    self.resizer.install_hint(),
                    Self::FIELDS.resizer
                ),
            );
        }

        if self.documents.is_empty() {
            diag.warn(
                Self::FIELDS.documents,
                "no documents listed, thumbnails will be generated but nothing rewritten",
            );
        }
    }
}
