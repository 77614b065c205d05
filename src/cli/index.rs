//! `gallerize index`: splice a gallery of every asset into the target page.

use anyhow::{Context, Result};

use super::common::{UNCHANGED, read_document, write_document};
use crate::asset::discover;
use crate::config::GalleryConfig;
use crate::gallery::{MarkerSplicer, build_page};
use crate::log;
use crate::report::{Outcome, RunReport};
use crate::utils::{path::root_relative, plural_count};

/// Outcome of one indexer run.
#[derive(Debug)]
pub struct IndexReport {
    /// Single entry for the target page.
    pub document: RunReport,
    /// Project-relative path of the target page.
    pub name: String,
    /// Number of tiles in the gallery.
    pub images: usize,
    pub dry: bool,
}

impl IndexReport {
    /// Summary line, absent when the page was not touched.
    pub fn summary(&self) -> Option<String> {
        match self.document.outcome_of(&self.name)? {
            Outcome::Done => Some(format!(
                "generated gallery with {}",
                plural_count(self.images, "image")
            )),
            Outcome::Skipped(reason) if reason == UNCHANGED => Some(format!(
                "gallery with {} is up to date",
                plural_count(self.images, "image")
            )),
            Outcome::Skipped(_) | Outcome::Failed(_) => None,
        }
    }

    pub fn print(&self) {
        self.document.print_details();
        if let Some(summary) = self.summary() {
            log!("index"; "{}", summary);
        }
        if self.dry {
            log!("index"; "dry run, nothing written");
        }
    }
}

/// Rebuild the gallery of `[index].document`.
///
/// Only invalid marker classes are fatal; a missing page or placeholder
/// region ends up in the returned report.
pub fn run_index(config: &GalleryConfig, dry: bool) -> Result<IndexReport> {
    let index = &config.index;
    let splicer = MarkerSplicer::new(&index.section, &index.container)
        .context("invalid placeholder marker classes")?;

    let mut report = RunReport::new("index");
    let assets = discover(&config.assets, config.get_root(), Some(config.thumbs.root.as_path()));
    let name = root_relative(&index.document, config.get_root());

    if let Some(doc) = read_document(&index.document, &name, &mut report) {
        let page = build_page(&doc, &assets, index, &splicer);

        if !page.spliced {
            report.warn(format!(
                "no placeholder region in `{name}`, expected <section class=\"{}\"> containing <div class=\"{}\">",
                index.section, index.container
            ));
            report.push(&name, Outcome::skipped("no placeholder region"));
        } else {
            if index.lightbox && !page.lightbox {
                report.warn(format!("no </body> in `{name}`, lightbox not injected"));
            }
            report.push(&name, write_document(&index.document, &doc, &page.html, dry));
        }
    }

    Ok(IndexReport {
        document: report,
        name,
        images: assets.len(),
        dry,
    })
}
