//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Absolute `config_name` values are returned as-is when they exist.
///
/// # Example
/// ```text
/// /home/user/site/assets/photos/  ← start
/// /home/user/site/gallerize.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_parent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("assets/photos/2024");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("gallerize.toml"), "").unwrap();

        let found = find_config_file(Path::new("gallerize.toml"), &nested).unwrap();
        assert_eq!(found, dir.path().join("gallerize.toml"));
    }

    #[test]
    fn test_find_config_absolute_missing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert_eq!(find_config_file(&missing, dir.path()), None);
    }

    #[test]
    fn test_find_config_ignores_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("gallerize.toml")).unwrap();
        let found = find_config_file(Path::new("gallerize.toml"), dir.path());
        assert_ne!(found, Some(dir.path().join("gallerize.toml")));
    }
}
