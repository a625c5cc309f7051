//! Build directory assembly
//!
//! Cleans the previous run's output and, after a successful native
//! build, flattens the Xcode Release directory up into the build
//! directory root.

use crate::models::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Remove the build directory left behind by a previous run.
///
/// Returns whether anything had to be removed.
pub fn clean_build_dir(build_dir: &Path) -> Result<bool> {
    if !build_dir.exists() {
        return Ok(false);
    }
    fs::remove_dir_all(build_dir)
        .with_context(|| format!("Failed to remove {}", build_dir.display()))?;
    Ok(true)
}

/// Copy a directory tree's contents into `dest_dir`, overwriting
/// existing files.
pub fn copy_dir_contents(source_dir: &Path, dest_dir: &Path) -> Result<()> {
    fs::create_dir_all(dest_dir)
        .with_context(|| format!("Failed to create {}", dest_dir.display()))?;

    for entry in WalkDir::new(source_dir) {
        let entry = entry.context("Failed to walk Release directory")?;
        let relative = entry
            .path()
            .strip_prefix(source_dir)
            .context("Failed to get relative path")?;
        if relative.as_os_str().is_empty() {
            continue;
        }

        let dest = dest_dir.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)
                .with_context(|| format!("Failed to create {}", dest.display()))?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::copy(entry.path(), &dest)
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        }
    }
    Ok(())
}

/// Move the Release output up into the build directory root and drop
/// the now-redundant intermediate project directory.
pub fn flatten_release(config: &Config) -> Result<()> {
    copy_dir_contents(&config.release_dir(), &config.build_dir_path())?;
    let project_dir = config.project_dir();
    fs::remove_dir_all(&project_dir)
        .with_context(|| format!("Failed to remove {}", project_dir.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn clean_removes_populated_build_dir() {
        let dir = TempDir::new().unwrap();
        let build_dir = dir.path().join("build");
        fs::create_dir_all(build_dir.join("nested")).unwrap();
        fs::write(build_dir.join("nested/file.txt"), "stale").unwrap();

        assert!(clean_build_dir(&build_dir).unwrap());
        assert!(!build_dir.exists());
    }

    #[test]
    fn clean_is_a_noop_when_absent() {
        let dir = TempDir::new().unwrap();
        assert!(!clean_build_dir(&dir.path().join("build")).unwrap());
    }

    #[test]
    fn copies_nested_trees_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source");
        let dest = dir.path().join("dest");
        fs::create_dir_all(source.join("a/b")).unwrap();
        fs::write(source.join("a/b/deep.txt"), "deep").unwrap();
        fs::write(source.join("top.txt"), "new").unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("top.txt"), "old").unwrap();

        copy_dir_contents(&source, &dest).unwrap();

        assert_eq!(fs::read_to_string(dest.join("a/b/deep.txt")).unwrap(), "deep");
        assert_eq!(fs::read_to_string(dest.join("top.txt")).unwrap(), "new");
    }
}
