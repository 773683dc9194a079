//! Filesystem-backed cover lookup.

use crate::error::ErrorKind;
use crate::path::resolve;
use shelf_catalog::CoverCheck;
use std::path::{Path, PathBuf};

/// Looks up cover images inside a directory.
///
/// A cover exists when `root/<path>` exists on disk. Paths that would escape
/// the root are reported as missing rather than followed.
#[derive(Debug, Clone)]
pub struct CoverDirectory {
    root: PathBuf,
}
impl CoverDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CoverCheck for CoverDirectory {
    fn exists(&self, path: &str) -> bool {
        match resolve(&self.root, path) {
            Ok(absolute) => absolute.exists(),
            Err(e) => {
                let kind: &ErrorKind = &e;
                tracing::debug!(root = %self.root.display(), error = %kind, "Ignoring cover outside of covers directory");
                false
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    #[rstest]
    fn test_cover_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("portadas")).unwrap();
        fs::write(dir.path().join("portadas/verne.jpg"), b"jpeg").unwrap();
        fs::write(dir.path().join("fuera.jpg"), b"jpeg").unwrap();
        let covers = CoverDirectory::new(dir.path().join("portadas"));

        assert!(covers.exists("verne.jpg"));
        assert!(covers.exists("./verne.jpg"));
        assert!(!covers.exists("sagan.jpg"));
        assert!(!covers.exists("../fuera.jpg"));
        assert!(!covers.exists(""));
        assert!(covers.exists("sub\\..\\verne.jpg"));
    }
}
