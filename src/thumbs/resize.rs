//! Thumbnail materialization.
//!
//! Each asset is resized into its mirrored location under the thumbnail
//! root. Jobs run in parallel and never share an output path, so one
//! failing image can't affect another.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use rayon::prelude::*;

use crate::asset::ThumbRoute;
use crate::config::{RefreshPolicy, Resizer, ThumbsConfig};
use crate::debug;
use crate::logger::ProgressLine;
use crate::report::Outcome;
use crate::utils::exec::{Cmd, SILENT_FILTER};

/// Skip reason of thumbnails kept under the `missing` policy.
pub const UP_TO_DATE: &str = "up to date";

/// Materialize every route, returning outcomes in input order.
pub fn materialize_all(routes: &[ThumbRoute], config: &ThumbsConfig, dry: bool) -> Vec<Outcome> {
    let progress = ProgressLine::new("thumbs", &[("resize", routes.len())]);

    let run = || {
        routes
            .par_iter()
            .map(|route| {
                let outcome = materialize(route, config, dry);
                progress.inc("resize");
                outcome
            })
            .collect::<Vec<_>>()
    };

    let outcomes = match build_pool(config.jobs) {
        Some(pool) => pool.install(run),
        None => run(),
    };

    progress.finish();
    outcomes
}

/// Dedicated pool for an explicit `jobs` count, `None` for rayon's default.
fn build_pool(jobs: usize) -> Option<rayon::ThreadPool> {
    if jobs == 0 {
        return None;
    }
    match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
        Ok(pool) => Some(pool),
        Err(e) => {
            debug!("thumbs"; "falling back to the global pool: {}", e);
            None
        }
    }
}

/// Bring one thumbnail up to date.
///
/// Errors are folded into [`Outcome::Failed`]; nothing propagates.
pub fn materialize(route: &ThumbRoute, config: &ThumbsConfig, dry: bool) -> Outcome {
    materialize_with(route, config, dry, |route| generate(route, config))
}

/// [`materialize`] with the resize step supplied by the caller.
fn materialize_with(
    route: &ThumbRoute,
    config: &ThumbsConfig,
    dry: bool,
    resize: impl FnOnce(&ThumbRoute) -> Result<()>,
) -> Outcome {
    if route.thumb.exists() && config.refresh == RefreshPolicy::Missing {
        return Outcome::skipped(UP_TO_DATE);
    }

    if dry {
        debug!("thumbs"; "would generate {}", route.thumb_rel);
        return Outcome::Done;
    }

    let result = prepare_dir(route).and_then(|()| resize(route));
    match result {
        Ok(()) => {
            debug!("thumbs"; "{} -> {}", route.asset.rel, route.thumb_rel);
            Outcome::Done
        }
        Err(e) => {
            // a half-written file would pass for up to date next run
            fs::remove_file(&route.thumb).ok();
            Outcome::failed(format!("{e:#}"))
        }
    }
}

fn prepare_dir(route: &ThumbRoute) -> Result<()> {
    if let Some(parent) = route.thumb.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create `{}`", parent.display()))?;
    }
    Ok(())
}

fn generate(route: &ThumbRoute, config: &ThumbsConfig) -> Result<()> {
    let (src, dst) = (route.asset.source.as_path(), route.thumb.as_path());
    match resize_command(config.resizer, src, dst, config.width) {
        Some(cmd) => {
            debug!("thumbs"; "running {}", cmd);
            cmd.timeout(config.timeout()).filter(&SILENT_FILTER).run()?;
            Ok(())
        }
        None => resize_builtin(src, dst, config.width),
    }
}

/// Resize with the `image` crate. Images no wider than `width` are copied.
fn resize_builtin(src: &Path, dst: &Path, width: u32) -> Result<()> {
    let img = image::open(src).with_context(|| format!("failed to decode `{}`", src.display()))?;

    if img.width() <= width {
        fs::copy(src, dst).with_context(|| format!("failed to copy to `{}`", dst.display()))?;
        return Ok(());
    }

    let height = scaled_height(img.width(), img.height(), width);
    let thumb = img.resize_exact(width, height, FilterType::Lanczos3);

    let format = ImageFormat::from_path(dst)?;
    let thumb = match format {
        // JPEG has no alpha channel
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(thumb.to_rgb8()),
        _ => thumb,
    };
    thumb
        .save_with_format(dst, format)
        .with_context(|| format!("failed to encode `{}`", dst.display()))?;
    Ok(())
}

/// Height keeping the aspect ratio at `width`, never below one pixel.
#[allow(clippy::cast_possible_truncation)] // result <= height, which is u32
fn scaled_height(src_width: u32, src_height: u32, width: u32) -> u32 {
    let height = u64::from(src_height) * u64::from(width) / u64::from(src_width.max(1));
    (height as u32).max(1)
}

/// External command producing a thumbnail at most `width` pixels wide.
///
/// `None` for the builtin resizer.
fn resize_command(resizer: Resizer, src: &Path, dst: &Path, width: u32) -> Option<Cmd> {
    let cmd = match resizer {
        Resizer::Builtin => return None,
        Resizer::Magick => Cmd::new("magick")
            .arg(src)
            .arg("-resize")
            .arg(format!("{width}x>"))
            .arg(dst),
        Resizer::Sips => Cmd::new("sips")
            .arg("--resampleWidth")
            .arg(width.to_string())
            .arg(src)
            .arg("--out")
            .arg(dst),
        Resizer::Ffmpeg => Cmd::new("ffmpeg")
            .args(["-y", "-loglevel", "error", "-i"])
            .arg(src)
            .arg("-vf")
            .arg(format!("scale='min({width},iw)':-1"))
            .arg(dst),
    };
    Some(cmd)
}
