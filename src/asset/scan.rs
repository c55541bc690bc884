//! Directory walking (pure, no side effects).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jwalk::WalkDir;

/// Collect all regular files under a directory recursively.
///
/// Entries are sorted so the order is deterministic per run. Nothing is
/// excluded: hidden files and dotfiles are walked like everything else.
///
/// # Errors
///
/// Any unreadable directory or vanished entry aborts the whole walk; there
/// is no partial-results policy.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort(true).skip_hidden(false) {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.path());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collect_files_nested() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("top.txt"), "x").unwrap();
        fs::write(dir.path().join("a/mid.css"), "x").unwrap();
        fs::write(dir.path().join("a/b/deep.js"), "x").unwrap();

        let files = collect_files(dir.path()).unwrap();
        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_collect_files_includes_hidden() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".hidden"), "x").unwrap();
        fs::write(dir.path().join("seen.txt"), "x").unwrap();

        let files = collect_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_collect_files_deterministic_order() {
        let dir = TempDir::new().unwrap();
        for name in ["c.txt", "a.txt", "b.txt"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let first = collect_files(dir.path()).unwrap();
        let second = collect_files(dir.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_collect_files_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(collect_files(dir.path()).unwrap().is_empty());
    }
}
