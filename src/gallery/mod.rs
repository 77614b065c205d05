//! Gallery indexer.
//!
//! Renders one tile per discovered image and splices the grid into the
//! placeholder region of the target page, then (optionally) injects the
//! lightbox overlay before `</body>`.
//!
//! ```text
//! <section class="section">        <section class="section">
//!   <div class="container">    →     <div class="container">
//!     placeholder                      <h2>…</h2> <div class="gallery-container">…
//!   </div>                           </div>
//! </section>                       </section>
//! ```

mod render;
mod splice;

pub use render::{render_gallery, render_lightbox};
pub use splice::{MarkerSplicer, Splicer, inject_lightbox};

#[cfg(test)]
pub use render::{LIGHTBOX_BEGIN, LIGHTBOX_END};

use crate::asset::AssetPath;
use crate::config::IndexConfig;

/// Result of rebuilding a gallery page in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryPage {
    pub html: String,
    /// The placeholder region was found and replaced.
    pub spliced: bool,
    /// The lightbox was (re)injected.
    pub lightbox: bool,
}

/// Rebuild `doc` with a gallery of `assets`.
///
/// Without a placeholder region the document comes back unchanged. A
/// missing `</body>` only drops the lightbox.
pub fn build_page(
    doc: &str,
    assets: &[AssetPath],
    config: &IndexConfig,
    splicer: &impl Splicer,
) -> GalleryPage {
    let fragment = render_gallery(assets, config);

    let Some(html) = splicer.splice_region(doc, &fragment) else {
        return GalleryPage {
            html: doc.to_owned(),
            spliced: false,
            lightbox: false,
        };
    };

    if !config.lightbox {
        return GalleryPage {
            html,
            spliced: true,
            lightbox: false,
        };
    }

    match inject_lightbox(&html, render_lightbox()) {
        Some(html) => GalleryPage {
            html,
            spliced: true,
            lightbox: true,
        },
        None => GalleryPage {
            html,
            spliced: true,
            lightbox: false,
        },
    }
}
