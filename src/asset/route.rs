//! Asset routes: source → project-relative path → thumbnail path.

use std::path::{Path, PathBuf};

use crate::utils::path::root_relative;

/// A discovered image.
///
/// Identity is `rel`, the path relative to the project root; that string is
/// what ends up in the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPath {
    /// Source file path (absolute)
    pub source: PathBuf,
    /// Project-relative web path (e.g., "assets/photos/launch/01.jpg")
    pub rel: String,
}

impl AssetPath {
    pub fn new(source: PathBuf, project_root: &Path) -> Self {
        let rel = root_relative(&source, project_root);
        Self { source, rel }
    }
}

/// An asset paired with its mirrored thumbnail location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbRoute {
    pub asset: AssetPath,
    /// Thumbnail file path (absolute)
    pub thumb: PathBuf,
    /// Project-relative web path of the thumbnail
    pub thumb_rel: String,
}

impl ThumbRoute {
    /// Route `asset` into the thumbnail tree.
    ///
    /// Returns `None` if the asset does not live under `asset_root`.
    pub fn new(
        asset: &AssetPath,
        asset_root: &Path,
        thumb_root: &Path,
        project_root: &Path,
    ) -> Option<Self> {
        let thumb = mirror(asset_root, thumb_root, &asset.source)?;
        let thumb_rel = root_relative(&thumb, project_root);
        Some(Self {
            asset: asset.clone(),
            thumb,
            thumb_rel,
        })
    }
}

/// Re-root `path` from `asset_root` to `thumb_root`.
///
/// Only the root prefix changes; the filename and every subdirectory below
/// the root are kept.
///
/// ```text
/// assets/photos/launch/01.jpg  →  assets/thumbnails/launch/01.jpg
/// ```
pub fn mirror(asset_root: &Path, thumb_root: &Path, path: &Path) -> Option<PathBuf> {
    let rel = path.strip_prefix(asset_root).ok()?;
    if rel.as_os_str().is_empty() {
        return None;
    }
    Some(thumb_root.join(rel))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_top_level() {
        let thumb = mirror(
            Path::new("/site/assets/photos"),
            Path::new("/site/assets/thumbnails"),
            Path::new("/site/assets/photos/a.jpg"),
        );
        assert_eq!(thumb, Some(PathBuf::from("/site/assets/thumbnails/a.jpg")));
    }

    #[test]
    fn test_mirror_keeps_subdirectories_and_name() {
        let source = Path::new("/site/assets/photos/2024/launch day/IMG 01.JPG");
        let thumb = mirror(
            Path::new("/site/assets/photos"),
            Path::new("/site/thumbnails"),
            source,
        )
        .unwrap();

        assert_eq!(thumb, PathBuf::from("/site/thumbnails/2024/launch day/IMG 01.JPG"));
        assert_eq!(thumb.file_name(), source.file_name());
        assert_eq!(
            thumb.strip_prefix("/site/thumbnails").unwrap(),
            source.strip_prefix("/site/assets/photos").unwrap()
        );
    }

    #[test]
    fn test_mirror_outside_root() {
        let thumb = mirror(
            Path::new("/site/assets/photos"),
            Path::new("/site/thumbnails"),
            Path::new("/elsewhere/a.jpg"),
        );
        assert_eq!(thumb, None);
    }

    #[test]
    fn test_mirror_root_itself() {
        let root = Path::new("/site/assets/photos");
        assert_eq!(mirror(root, Path::new("/site/thumbnails"), root), None);
    }

    #[test]
    fn test_thumb_route_relative_paths() {
        let root = Path::new("/site");
        let asset = AssetPath::new(PathBuf::from("/site/assets/photos/sub/b.png"), root);
        let route = ThumbRoute::new(
            &asset,
            Path::new("/site/assets/photos"),
            Path::new("/site/thumbnails"),
            root,
        )
        .unwrap();

        assert_eq!(route.asset.rel, "assets/photos/sub/b.png");
        assert_eq!(route.thumb, PathBuf::from("/site/thumbnails/sub/b.png"));
        assert_eq!(route.thumb_rel, "thumbnails/sub/b.png");
    }
}
