//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{RefreshPolicy, Resizer};

/// Default config file name, searched upward from the current directory.
pub const DEFAULT_CONFIG: &str = "gallerize.toml";

/// Gallery indexing and thumbnail rewriting for static sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: gallerize.toml)
    #[arg(short = 'C', long, global = true, default_value = DEFAULT_CONFIG, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scan the asset tree and splice a gallery into the target page
    #[command(visible_alias = "i")]
    Index {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        index: IndexArgs,
    },

    /// Generate thumbnails and point src attributes at them
    #[command(visible_alias = "t")]
    Thumbs {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        thumbs: ThumbsArgs,
    },

    /// Run `index`, then `thumbs`
    #[command(visible_alias = "a")]
    All {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        index: IndexArgs,

        #[command(flatten)]
        thumbs: ThumbsArgs,
    },
}

/// Arguments shared by every subcommand.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Asset root directory (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub assets: Option<PathBuf>,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry: bool,
}

/// Indexer arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct IndexArgs {
    /// Page receiving the gallery (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub document: Option<PathBuf>,

    /// Inject the lightbox overlay before </body>
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub lightbox: Option<bool>,
}

/// Thumbnail rewriter arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ThumbsArgs {
    /// Thumbnail root directory (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Target thumbnail width in pixels
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Regenerate every thumbnail (same as --refresh always)
    #[arg(short, long, conflicts_with = "refresh")]
    pub force: bool,

    /// Thumbnail refresh policy
    #[arg(long, value_enum)]
    pub refresh: Option<RefreshPolicy>,

    /// Resize backend
    #[arg(short, long, value_enum)]
    pub resizer: Option<Resizer>,

    /// Resize worker threads (0 = one per core)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Document to rewrite (repeatable, replaces the configured list)
    #[arg(long = "doc", value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub documents: Vec<PathBuf>,
}

impl ThumbsArgs {
    /// Refresh policy requested on the command line, if any.
    pub fn refresh_policy(&self) -> Option<RefreshPolicy> {
        if self.force {
            Some(RefreshPolicy::Always)
        } else {
            self.refresh
        }
    }
}

impl Cli {
    /// Arguments shared by every subcommand.
    pub const fn common(&self) -> &CommonArgs {
        match &self.command {
            Commands::Index { common, .. }
            | Commands::Thumbs { common, .. }
            | Commands::All { common, .. } => common,
        }
    }

    pub const fn index_args(&self) -> Option<&IndexArgs> {
        match &self.command {
            Commands::Index { index, .. } | Commands::All { index, .. } => Some(index),
            Commands::Thumbs { .. } => None,
        }
    }

    pub const fn thumbs_args(&self) -> Option<&ThumbsArgs> {
        match &self.command {
            Commands::Thumbs { thumbs, .. } | Commands::All { thumbs, .. } => Some(thumbs),
            Commands::Index { .. } => None,
        }
    }

    pub const fn runs_index(&self) -> bool {
        self.index_args().is_some()
    }

    pub const fn runs_thumbs(&self) -> bool {
        self.thumbs_args().is_some()
    }
}
