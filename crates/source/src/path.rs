//! Cover path resolution.
//!
//! Cover paths come straight out of the book source, so they are normalized
//! lexically before being joined onto the covers directory. Nothing here
//! touches the filesystem.

use crate::error::{ErrorKind, Result};
use exn::OptionExt;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Joins the cover path `cover` onto `root`.
///
/// Backslashes are read as separators, so sources written on Windows still
/// resolve. `.` and leading separators are ignored and `..` drops the
/// previous segment. Paths that climb above `root`, carry a drive prefix or
/// a NUL byte, or are empty once normalized are rejected with
/// [`InvalidPath`](crate::error::ErrorKind::InvalidPath).
pub fn resolve(root: &Path, cover: &str) -> Result<PathBuf> {
    let invalid = || ErrorKind::InvalidPath(PathBuf::from(cover));
    if cover.contains('\0') {
        exn::bail!(invalid());
    }
    let normalized = cover.replace('\\', "/");
    let mut segments: Vec<&OsStr> = Vec::new();
    for component in Path::new(&normalized).components() {
        match component {
            Component::Normal(segment) => segments.push(segment),
            Component::ParentDir => {
                segments.pop().ok_or_raise(&invalid)?;
            },
            Component::CurDir | Component::RootDir => {},
            Component::Prefix(_) => exn::bail!(invalid()),
        }
    }
    if segments.is_empty() {
        exn::bail!(invalid());
    }
    Ok(segments.into_iter().fold(root.to_path_buf(), |path, segment| path.join(segment)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("portadas/libro.jpg", "/covers/portadas/libro.jpg")]
    #[case("./libro.jpg", "/covers/libro.jpg")]
    #[case("/libro.jpg", "/covers/libro.jpg")]
    #[case("a/../portadas//./libro.png", "/covers/portadas/libro.png")]
    #[case("portadas\\verne.jpg", "/covers/portadas/verne.jpg")]
    fn test_resolve(#[case] cover: &str, #[case] expected: &str) {
        assert_eq!(resolve(Path::new("/covers"), cover).unwrap(), Path::new(expected));
    }

    #[rstest]
    #[case("")]
    #[case(".")]
    #[case("../secreto.jpg")]
    #[case("a/../../b.jpg")]
    #[case("..\\secreto.jpg")]
    #[case("a\0b.jpg")]
    fn test_resolve_rejects(#[case] cover: &str) {
        let err = resolve(Path::new("/covers"), cover).unwrap_err();
        assert_eq!(&*err, &ErrorKind::InvalidPath(PathBuf::from(cover)));
    }
}
