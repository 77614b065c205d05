//! Asset scanning (pure, no side effects).

use std::path::Path;

use jwalk::WalkDir;

use crate::config::AssetsConfig;
use crate::log;

use super::AssetPath;

/// Collect every accepted image under the asset root.
///
/// - extensions are matched case-insensitively against `[assets].extensions`
/// - anything under `exclude` is skipped (a thumbnail root nested inside the
///   asset root must never feed back into itself)
/// - paths containing `'` or `"` are skipped with a warning, since tiles
///   embed the path literally in quoted attributes and JS strings
/// - the result is sorted by project-relative path and free of duplicates
///
/// A missing asset root yields an empty list and a warning.
///
/// ```text
/// assets/photos/
/// ├── a.jpg              -> assets/photos/a.jpg
/// ├── notes.txt          -> (skipped)
/// └── sub/
///     └── b.PNG          -> assets/photos/sub/b.PNG
/// ```
pub fn discover(
    assets: &AssetsConfig,
    project_root: &Path,
    exclude: Option<&Path>,
) -> Vec<AssetPath> {
    if !assets.root.is_dir() {
        log!("warning"; "asset root `{}` not found", assets.root.display());
        return Vec::new();
    }

    let mut found: Vec<_> = WalkDir::new(&assets.root)
        .skip_hidden(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| !exclude.is_some_and(|ex| p.starts_with(ex)))
        .filter(|p| assets.accepts(p))
        .map(|p| AssetPath::new(p, project_root))
        .filter(embeddable)
        .collect();

    found.sort_by(|a, b| a.rel.cmp(&b.rel));
    found.dedup_by(|a, b| a.rel == b.rel);
    found
}

/// Whether the asset's path can go into markup unescaped.
fn embeddable(asset: &AssetPath) -> bool {
    if asset.rel.contains(['\'', '"']) {
        log!("warning"; "skipping `{}`, quotes in image paths are not supported", asset.rel);
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn assets_in(root: &Path) -> AssetsConfig {
        AssetsConfig {
            root: root.join("assets"),
            ..Default::default()
        }
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    fn rels(found: &[AssetPath]) -> Vec<&str> {
        found.iter().map(|a| a.rel.as_str()).collect()
    }

    #[test]
    fn test_discover_missing_root() {
        let dir = TempDir::new().unwrap();
        let found = discover(&assets_in(dir.path()), dir.path(), None);
        assert!(found.is_empty());
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("assets");
        touch(&assets.join("sub/b.png"));
        touch(&assets.join("a.jpg"));
        touch(&assets.join("C.JPEG"));
        touch(&assets.join("notes.txt"));
        touch(&assets.join("sub/deeper/d.webp"));
        touch(&assets.join("sub/readme"));

        let found = discover(&assets_in(dir.path()), dir.path(), None);
        assert_eq!(
            rels(&found),
            vec![
                "assets/C.JPEG",
                "assets/a.jpg",
                "assets/sub/b.png",
                "assets/sub/deeper/d.webp",
            ]
        );
        assert!(found.iter().all(|a| a.source.is_absolute()));
    }

    #[test]
    fn test_discover_relative_to_project_root() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("assets/ARES Photos/launch.jpg"));

        let config = AssetsConfig {
            root: dir.path().join("assets/ARES Photos"),
            ..Default::default()
        };
        let found = discover(&config, dir.path(), None);
        assert_eq!(rels(&found), vec!["assets/ARES Photos/launch.jpg"]);
    }

    #[test]
    fn test_discover_excludes_nested_thumbnail_root() {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("assets");
        touch(&assets.join("a.jpg"));
        touch(&assets.join("thumbnails/a.jpg"));

        let exclude = assets.join("thumbnails");
        let found = discover(&assets_in(dir.path()), dir.path(), Some(exclude.as_path()));
        assert_eq!(rels(&found), vec!["assets/a.jpg"]);
    }

    #[test]
    fn test_discover_skips_quoted_paths() {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("assets");
        touch(&assets.join("ok.jpg"));
        touch(&assets.join("Bob's launch.jpg"));
        touch(&assets.join("say \"cheese\"/x.jpg"));

        let found = discover(&assets_in(dir.path()), dir.path(), None);
        assert_eq!(rels(&found), vec!["assets/ok.jpg"]);
    }

    #[test]
    fn test_discover_includes_hidden_directories() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("assets/.drafts/x.jpg"));

        let found = discover(&assets_in(dir.path()), dir.path(), None);
        assert_eq!(rels(&found), vec!["assets/.drafts/x.jpg"]);
    }

    #[test]
    fn test_discover_matches_extension_set() {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("assets");
        let names = ["1.jpg", "2.JPG", "3.png", "4.gif", "5.jpeg", "x/6.Png", "x/7.tiff"];
        for name in names {
            touch(&assets.join(name));
        }

        let config = AssetsConfig {
            root: assets,
            extensions: vec!["jpg".into(), "jpeg".into(), "png".into()],
        };
        let found = discover(&config, dir.path(), None);

        let mut expected: Vec<_> = ["1.jpg", "2.JPG", "3.png", "5.jpeg", "x/6.Png"]
            .iter()
            .map(|n| format!("assets/{n}"))
            .collect();
        expected.sort();
        assert_eq!(rels(&found), expected);
    }
}
