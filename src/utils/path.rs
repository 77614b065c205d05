//! Filesystem path helpers.
//!
//! - `normalize_path` - absolute form of a configured path
//! - `web_path` - browser-facing form of a path (forward slashes)
//! - `root_relative` - project-relative web path of a file

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Expand `~` and resolve a configured path against the project root.
pub fn resolve_in_root(path: &Path, root: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    let expanded = PathBuf::from(shellexpand::tilde(&raw).into_owned());
    if expanded.is_absolute() {
        normalize_path(&expanded)
    } else {
        normalize_path(&root.join(expanded))
    }
}

/// Render a path the way a browser expects it: `\` becomes `/`.
///
/// # Example
/// ```ignore
/// assert_eq!(web_path(Path::new("assets\\a b.jpg")), "assets/a b.jpg");
/// ```
#[inline]
pub fn web_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Path of `path` relative to `root`, as a web path.
///
/// Paths outside `root` are returned whole.
pub fn root_relative(path: &Path, root: &Path) -> String {
    web_path(path.strip_prefix(root).unwrap_or(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.txt"));
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_resolve_in_root_relative() {
        let resolved = resolve_in_root(Path::new("assets/photos"), Path::new("/site"));
        assert_eq!(resolved, PathBuf::from("/site/assets/photos"));
    }

    #[test]
    fn test_resolve_in_root_absolute() {
        let resolved = resolve_in_root(Path::new("/elsewhere/photos"), Path::new("/site"));
        assert_eq!(resolved, PathBuf::from("/elsewhere/photos"));
    }

    #[test]
    fn test_web_path_backslashes() {
        assert_eq!(web_path(Path::new("assets\\sub\\a b.jpg")), "assets/sub/a b.jpg");
        assert_eq!(web_path(Path::new("assets/a.jpg")), "assets/a.jpg");
    }

    #[test]
    fn test_root_relative() {
        assert_eq!(
            root_relative(Path::new("/site/assets/My Photo.jpg"), Path::new("/site")),
            "assets/My Photo.jpg"
        );
        assert_eq!(
            root_relative(Path::new("/other/a.jpg"), Path::new("/site")),
            "/other/a.jpg"
        );
    }
}
