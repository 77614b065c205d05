//! `gallerize thumbs`: generate thumbnails and point pages at them.

use anyhow::Result;

use super::common::{read_document, write_document};
use crate::asset::{ThumbRoute, discover};
use crate::config::{GalleryConfig, RefreshPolicy};
use crate::report::RunReport;
use crate::thumbs::{PathMap, materialize_all, rewrite_sources};
use crate::utils::{path::root_relative, plural_count};
use crate::{debug, log};

/// Outcomes of one rewriter run.
#[derive(Debug)]
pub struct ThumbsReport {
    /// One entry per asset, keyed by its project-relative path.
    pub assets: RunReport,
    /// One entry per configured document.
    pub documents: RunReport,
    pub refresh: RefreshPolicy,
    pub dry: bool,
}

impl ThumbsReport {
    pub fn summary(&self) -> String {
        format!(
            "processed {} ({} generated, {} up to date, {} failed), updated {}",
            plural_count(self.assets.len(), "image"),
            self.assets.done(),
            self.assets.skipped(),
            self.assets.failed(),
            plural_count(self.documents.done(), "document")
        )
    }

    /// Reminder that kept thumbnails ignore a changed width.
    pub fn hint(&self) -> Option<String> {
        let kept = self.assets.skipped();
        (kept > 0 && self.refresh == RefreshPolicy::Missing).then(|| {
            format!(
                "kept {}, run with --force after changing the width",
                plural_count(kept, "existing thumbnail")
            )
        })
    }

    pub fn print(&self) {
        self.assets.print_details();
        self.documents.print_details();
        log!("thumbs"; "{}", self.summary());
        if let Some(hint) = self.hint() {
            log!("thumbs"; "{}", hint);
        }
        if self.dry {
            log!("thumbs"; "dry run, nothing written");
        }
    }
}

/// Materialize thumbnails for every asset, then rewrite `[thumbs].documents`.
pub fn run_thumbs(config: &GalleryConfig, dry: bool) -> Result<ThumbsReport> {
    let root = config.get_root();
    let thumbs = &config.thumbs;

    let routes: Vec<_> = discover(&config.assets, root, Some(thumbs.root.as_path()))
        .iter()
        .filter_map(|asset| ThumbRoute::new(asset, &config.assets.root, &thumbs.root, root))
        .collect();

    let outcomes = materialize_all(&routes, thumbs, dry);
    let map = PathMap::from_outcomes(&routes, &outcomes);

    let mut assets = RunReport::new("thumbs");
    for (route, outcome) in routes.iter().zip(outcomes) {
        assets.push(&route.asset.rel, outcome);
    }

    let mut documents = RunReport::new("thumbs");
    for path in &thumbs.documents {
        let name = root_relative(path, root);
        let Some(doc) = read_document(path, &name, &mut documents) else {
            continue;
        };
        let (html, count) = rewrite_sources(&doc, &map);
        debug!("thumbs"; "{}: {} rewritten", name, plural_count(count, "src attribute"));
        documents.push(&name, write_document(path, &doc, &html, dry));
    }

    Ok(ThumbsReport {
        assets,
        documents,
        refresh: thumbs.refresh,
        dry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::index::run_index;
    use crate::cli::index::tests::{site, write_image};
    use crate::report::Outcome;
    use image::GenericImageView;
    use std::fs;

    fn gallery(config: &GalleryConfig) -> String {
        fs::read_to_string(&config.index.document).unwrap()
    }

    #[test]
    fn test_thumbs_after_index() {
        let (dir, mut config) = site();
        config.thumbs.width = 60;
        run_index(&config, false).unwrap();

        let report = run_thumbs(&config, false).unwrap();
        assert_eq!(report.assets.done(), 2);
        assert_eq!(report.documents.outcome_of("gallery.html"), Some(&Outcome::Done));

        let a = dir.path().join("assets/thumbnails/a.jpg");
        let b = dir.path().join("assets/thumbnails/sub/b.png");
        assert_eq!(image::open(&a).unwrap().dimensions(), (60, 40));
        assert_eq!(image::open(&b).unwrap().dimensions(), (60, 60));

        let html = gallery(&config);
        assert!(html.contains(r#"src="assets/thumbnails/a.jpg""#));
        assert!(html.contains(r#"src="assets/thumbnails/sub/b.png""#));
        assert!(!html.contains(r#"src="assets/photos/a.jpg""#));
        // the lightbox still opens the full-size image
        assert!(html.contains("openLightbox('assets/photos/a.jpg')"));
        assert!(html.contains("openLightbox('assets/photos/sub/b.png')"));
    }

    #[test]
    fn test_thumbs_rerun_changes_nothing() {
        let (_dir, config) = site();
        run_index(&config, false).unwrap();
        run_thumbs(&config, false).unwrap();
        let first = gallery(&config);

        let report = run_thumbs(&config, false).unwrap();
        assert_eq!(gallery(&config), first);
        assert_eq!(report.assets.skipped(), 2);
        assert_eq!(report.documents.done(), 0);
        assert_eq!(
            report.summary(),
            "processed 2 images (0 generated, 2 up to date, 0 failed), updated 0 documents"
        );
        assert!(report.hint().is_some());
    }

    #[test]
    fn test_force_regenerates_existing_thumbnail() {
        let (dir, mut config) = site();
        let thumb = dir.path().join("assets/thumbnails/a.jpg");
        write_image(&thumb, 10, 10);

        run_thumbs(&config, false).unwrap();
        assert_eq!(image::open(&thumb).unwrap().dimensions(), (10, 10));

        config.thumbs.refresh = RefreshPolicy::Always;
        config.thumbs.width = 60;
        run_thumbs(&config, false).unwrap();
        assert_eq!(image::open(&thumb).unwrap().dimensions(), (60, 40));
    }

    #[test]
    fn test_failed_resize_keeps_original_src() {
        let (dir, config) = site();
        fs::write(dir.path().join("assets/photos/broken.jpg"), b"not an image").unwrap();
        run_index(&config, false).unwrap();

        let report = run_thumbs(&config, false).unwrap();
        assert!(
            report
                .assets
                .outcome_of("assets/photos/broken.jpg")
                .is_some_and(Outcome::is_failed)
        );

        let html = gallery(&config);
        assert!(html.contains(r#"src="assets/photos/broken.jpg""#));
        assert!(html.contains(r#"src="assets/thumbnails/a.jpg""#));
        assert!(!dir.path().join("assets/thumbnails/broken.jpg").exists());
    }

    #[test]
    fn test_missing_documents_are_skipped() {
        let (_dir, mut config) = site();
        run_index(&config, false).unwrap();
        config.thumbs.documents = vec![
            config.get_root().join("nope.html"),
            config.index.document.clone(),
        ];

        let report = run_thumbs(&config, false).unwrap();
        assert_eq!(
            report.documents.outcome_of("nope.html"),
            Some(&Outcome::skipped("not found"))
        );
        assert_eq!(report.documents.outcome_of("gallery.html"), Some(&Outcome::Done));
    }

    #[test]
    fn test_rewrites_encoded_spaces() {
        let (dir, mut config) = site();
        write_image(&dir.path().join("assets/ARES Photos/My Photo.jpg"), 120, 80);
        config.assets.root = dir.path().join("assets/ARES Photos").canonicalize().unwrap();
        fs::write(
            &config.index.document,
            "<img src=\"assets/ARES%20Photos/My%20Photo.jpg\">\n<img src=\"assets/ARES Photos/My Photo.jpg\">\n",
        )
        .unwrap();

        run_thumbs(&config, false).unwrap();
        assert_eq!(
            gallery(&config),
            "<img src=\"assets/thumbnails/My%20Photo.jpg\">\n<img src=\"assets/thumbnails/My Photo.jpg\">\n"
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let (dir, config) = site();
        run_index(&config, false).unwrap();
        let before = gallery(&config);

        let report = run_thumbs(&config, true).unwrap();
        assert_eq!(report.assets.done(), 2);
        assert_eq!(gallery(&config), before);
        assert!(!dir.path().join("assets/thumbnails").exists());
    }
}
