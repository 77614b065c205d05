//! Project configuration management for `gallerize.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── assets     # [assets]
//! │   ├── index      # [index]
//! │   └── thumbs     # [thumbs]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # GalleryConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                            |
//! |------------|----------------------------------------------------|
//! | `[assets]` | Asset root, accepted extensions                    |
//! | `[index]`  | Indexer document, placeholder markers, tile markup |
//! | `[thumbs]` | Thumbnail root, width, refresh policy, resizer     |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{AssetsConfig, IndexConfig, RefreshPolicy, Resizer, ThumbsConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, DEFAULT_CONFIG},
    debug, log,
    utils::path::{normalize_path, resolve_in_root},
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing gallerize.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Absolute path to the config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Asset discovery settings
    pub assets: AssetsConfig,

    /// Indexer settings
    pub index: IndexConfig,

    /// Thumbnail settings
    pub thumbs: ThumbsConfig,
}

impl GalleryConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent directory; without a config file the defaults
    /// apply and the project root is cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let (mut config, config_path, root) = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                let config = Self::from_path(&path)?;
                let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                (config, path, root)
            }
            None if cli.config != Path::new(DEFAULT_CONFIG) => {
                bail!(ConfigError::Validation(format!(
                    "config file `{}` not found",
                    cli.config.display()
                )));
            }
            None => {
                debug!("config"; "no {} found, using defaults in {}", DEFAULT_CONFIG, cwd.display());
                (Self::default(), PathBuf::new(), cwd)
            }
        };

        config.config_path = config_path;
        config.apply_cli(cli);
        config.finalize(&root);
        config.validate(cli.runs_index(), cli.runs_thumbs())?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {} are ignored: {}", display_path, fields.join(", "));
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply CLI overrides. Paths stay relative until `finalize`.
    fn apply_cli(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        Self::update_option(&mut self.assets.root, cli.common().assets.as_ref());

        if let Some(args) = cli.index_args() {
            Self::update_option(&mut self.index.document, args.document.as_ref());
            Self::update_option(&mut self.index.lightbox, args.lightbox.as_ref());
        }

        if let Some(args) = cli.thumbs_args() {
            Self::update_option(&mut self.thumbs.root, args.output.as_ref());
            Self::update_option(&mut self.thumbs.width, args.width.as_ref());
            Self::update_option(&mut self.thumbs.refresh, args.refresh_policy().as_ref());
            Self::update_option(&mut self.thumbs.resizer, args.resizer.as_ref());
            Self::update_option(&mut self.thumbs.jobs, args.jobs.as_ref());
            if !args.documents.is_empty() {
                self.thumbs.documents = args.documents.clone();
            }
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve every configured path against the project root.
    pub fn finalize(&mut self, root: &Path) {
        let root = normalize_path(root);
        self.assets.root = resolve_in_root(&self.assets.root, &root);
        self.thumbs.root = resolve_in_root(&self.thumbs.root, &root);
        self.index.document = resolve_in_root(&self.index.document, &root);
        self.thumbs.documents = self
            .thumbs
            .documents
            .iter()
            .map(|p| resolve_in_root(p, &root))
            .collect();
        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration for the commands about to run.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self, index: bool, thumbs: bool) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.assets.validate(&mut diag);
        if index {
            self.index.validate(&mut diag);
        }
        if thumbs {
            self.thumbs.validate(&mut diag);
            self.validate_roots(&mut diag);
        }

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// The thumbnail root must be distinct from the asset root.
    fn validate_roots(&self, diag: &mut ConfigDiagnostics) {
        if self.thumbs.root == self.assets.root {
            diag.error_with_hint(
                ThumbsConfig::FIELDS.root,
                "thumbnail root is the asset root, thumbnails would overwrite originals",
                format!("point {} at a separate directory", ThumbsConfig::FIELDS.root),
            );
        } else if self.assets.root.starts_with(&self.thumbs.root) {
            diag.error(
                ThumbsConfig::FIELDS.root,
                "thumbnail root contains the asset root",
            );
        } else if self.thumbs.root.starts_with(&self.assets.root) {
            diag.warn(
                ThumbsConfig::FIELDS.root,
                "thumbnail root lies inside the asset root, it is excluded from discovery",
            );
        }
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Build a config rooted at `root` with default sections and resolved paths.
#[cfg(test)]
pub fn test_config(root: &Path) -> GalleryConfig {
    let mut config = GalleryConfig::default();
    config.finalize(root);
    config
}

// ============================================================================
// tests
// ============================================================================
