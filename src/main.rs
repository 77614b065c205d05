//! Gallerize - gallery indexing and thumbnail rewriting for static sites.

mod asset;
mod cli;
mod config;
mod gallery;
mod logger;
mod report;
mod thumbs;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::GalleryConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = GalleryConfig::load(&cli)?;
    let dry = cli.common().dry;

    match &cli.command {
        Commands::Index { .. } => cli::index::run_index(&config, dry)?.print(),
        Commands::Thumbs { .. } => cli::thumbs::run_thumbs(&config, dry)?.print(),
        Commands::All { .. } => {
            cli::index::run_index(&config, dry)?.print();
            cli::thumbs::run_thumbs(&config, dry)?.print();
        }
    }

    Ok(())
}
