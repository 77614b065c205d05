//! Gallery and lightbox markup.
//!
//! Tiles carry the asset's project-relative path twice: once as the
//! lightbox argument (full resolution) and once as the `<img src>` (later
//! pointed at a thumbnail by `gallerize thumbs`). Paths are embedded
//! literally so the rewriter can find `src="PATH"` byte for byte.

use std::fmt::Write;

use crate::asset::AssetPath;
use crate::config::IndexConfig;
use crate::utils::html::escape;

/// Opening marker of the injected lightbox block.
pub const LIGHTBOX_BEGIN: &str = "<!-- gallerize:lightbox -->";

/// Closing marker of the injected lightbox block.
pub const LIGHTBOX_END: &str = "<!-- /gallerize:lightbox -->";

/// Lightbox overlay: modal, close control, and open/close wiring.
///
/// Closes on backdrop click and on Escape; page scroll is locked while
/// open and restored on close.
const LIGHTBOX: &str = r#"<!-- gallerize:lightbox -->
    <div id="lightbox" class="lightbox">
        <button class="lightbox-close" onclick="closeLightbox()">&times;</button>
        <img id="lightbox-img" src="" alt="Enlarged Image">
    </div>

    <script>
        function openLightbox(src) {
            const lightbox = document.getElementById('lightbox');
            const img = document.getElementById('lightbox-img');
            img.src = src;
            lightbox.classList.add('active');
            document.body.style.overflow = 'hidden';
        }

        function closeLightbox() {
            const lightbox = document.getElementById('lightbox');
            lightbox.classList.remove('active');
            document.body.style.overflow = 'auto';
            document.getElementById('lightbox-img').src = '';
        }

        document.getElementById('lightbox').addEventListener('click', (e) => {
            if (e.target.id === 'lightbox') {
                closeLightbox();
            }
        });

        document.addEventListener('keydown', (e) => {
            if (e.key === 'Escape') {
                closeLightbox();
            }
        });
    </script>
<!-- /gallerize:lightbox -->
"#;

/// Render the gallery fragment that replaces the placeholder content.
///
/// ```html
/// <h2 class="section__title">Gallery</h2>
/// <div class="gallery-container">
///     <div class="gallery-item" onclick="openLightbox('assets/photos/a.jpg')">
///         <img src="assets/photos/a.jpg" alt="Gallery Image" loading="lazy">
///     </div>
/// </div>
/// ```
pub fn render_gallery(assets: &[AssetPath], config: &IndexConfig) -> String {
    let alt = escape(&config.alt);
    let mut html = String::with_capacity(256 + assets.len() * 192);

    html.push('\n');
    if !config.title.is_empty() {
        let _ = writeln!(
            html,
            r#"                <h2 class="section__title">{}</h2>"#,
            escape(&config.title)
        );
    }
    html.push_str("                <div class=\"gallery-container\">\n");

    for asset in assets {
        let src = &asset.rel;
        let _ = write!(
            html,
            r#"
                    <div class="gallery-item" onclick="openLightbox('{src}')">
                        <img src="{src}" alt="{alt}" loading="lazy">
                    </div>
"#
        );
    }

    html.push_str("\n                </div>\n            ");
    html
}

/// Render the lightbox block, wrapped in its begin/end markers.
pub fn render_lightbox() -> &'static str {
    LIGHTBOX
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn asset(rel: &str) -> AssetPath {
        AssetPath::new(PathBuf::from("/site").join(rel), Path::new("/site"))
    }

    #[test]
    fn test_render_tiles_in_order() {
        let assets = [asset("assets/a.jpg"), asset("assets/sub/b.png")];
        let html = render_gallery(&assets, &IndexConfig::default());

        let first = html.find("src=\"assets/a.jpg\"").unwrap();
        let second = html.find("src=\"assets/sub/b.png\"").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("class=\"gallery-item\"").count(), 2);
        assert!(html.contains("onclick=\"openLightbox('assets/sub/b.png')\""));
        assert!(html.contains("loading=\"lazy\""));
    }

    #[test]
    fn test_render_keeps_spaces_literal() {
        let html = render_gallery(&[asset("assets/ARES Photos/My Photo.jpg")], &IndexConfig::default());
        assert!(html.contains("src=\"assets/ARES Photos/My Photo.jpg\""));
        assert!(html.contains("openLightbox('assets/ARES Photos/My Photo.jpg')"));
    }

    #[test]
    fn test_render_empty_gallery() {
        let html = render_gallery(&[], &IndexConfig::default());
        assert!(html.contains("gallery-container"));
        assert!(!html.contains("gallery-item"));
    }

    #[test]
    fn test_render_escapes_title_and_alt() {
        let config = IndexConfig {
            title: "Launches & Tests".into(),
            alt: "\"Rocket\"".into(),
            ..Default::default()
        };
        let html = render_gallery(&[asset("a.jpg")], &config);
        assert!(html.contains("Launches &amp; Tests"));
        assert!(html.contains("alt=\"&quot;Rocket&quot;\""));
    }

    #[test]
    fn test_render_without_title() {
        let config = IndexConfig {
            title: String::new(),
            ..Default::default()
        };
        assert!(!render_gallery(&[], &config).contains("<h2"));
    }

    #[test]
    fn test_lightbox_is_wrapped_in_markers() {
        let block = render_lightbox();
        assert!(block.starts_with(LIGHTBOX_BEGIN));
        assert!(block.trim_end().ends_with(LIGHTBOX_END));
        assert!(block.contains("id=\"lightbox\""));
        assert!(block.contains("'Escape'"));
        assert!(block.contains("document.body.style.overflow = 'auto'"));
    }
}
