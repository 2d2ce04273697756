//! # Document Locator
//!
//! Resolves the two target documents relative to the directory the tool was
//! started from. Layout candidates are tried in a fixed order and the first
//! candidate containing BOTH documents wins; a candidate with only one of
//! them is skipped rather than half-used.

use crate::error::{AppError, AppResult};
use crate::layout::{ALIASES_FILE, BOOKMARKS_FILE, LAYOUT_CANDIDATES};
use std::path::{Path, PathBuf};

/// Resolved locations of the two target documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPaths {
    /// The implementation document (struct declarations and impls).
    pub bookmarks: PathBuf,
    /// The dispatch document (alias table).
    pub aliases: PathBuf,
}

/// Locates the two target documents under `root`.
///
/// Pure function of the directory: probes each layout candidate in order
/// and returns the first fully-resolved pair.
///
/// # Errors
///
/// Returns [`AppError::Location`] when no candidate contains both files.
pub fn locate_documents(root: &Path) -> AppResult<DocumentPaths> {
    for candidate in LAYOUT_CANDIDATES {
        let dir = if candidate.is_empty() {
            root.to_path_buf()
        } else {
            root.join(candidate)
        };

        let bookmarks = dir.join(BOOKMARKS_FILE);
        let aliases = dir.join(ALIASES_FILE);

        if bookmarks.is_file() && aliases.is_file() {
            return Ok(DocumentPaths { bookmarks, aliases });
        }
    }

    Err(AppError::Location(format!(
        "could not find {} and {} in {} or its src/ subdirectory; run from the service root",
        BOOKMARKS_FILE,
        ALIASES_FILE,
        root.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_locates_in_root_layout() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(BOOKMARKS_FILE), "bm").unwrap();
        fs::write(dir.path().join(ALIASES_FILE), "al").unwrap();

        let paths = locate_documents(dir.path()).unwrap();
        assert_eq!(paths.bookmarks, dir.path().join(BOOKMARKS_FILE));
        assert_eq!(paths.aliases, dir.path().join(ALIASES_FILE));
    }

    #[test]
    fn test_locates_in_src_layout() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();
        fs::write(src.join(BOOKMARKS_FILE), "bm").unwrap();
        fs::write(src.join(ALIASES_FILE), "al").unwrap();

        let paths = locate_documents(dir.path()).unwrap();
        assert_eq!(paths.bookmarks, src.join(BOOKMARKS_FILE));
        assert_eq!(paths.aliases, src.join(ALIASES_FILE));
    }

    #[test]
    fn test_root_layout_takes_precedence() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();
        for base in [dir.path(), src.as_path()] {
            fs::write(base.join(BOOKMARKS_FILE), "bm").unwrap();
            fs::write(base.join(ALIASES_FILE), "al").unwrap();
        }

        let paths = locate_documents(dir.path()).unwrap();
        assert_eq!(paths.bookmarks, dir.path().join(BOOKMARKS_FILE));
    }

    #[test]
    fn test_partial_candidate_is_skipped() {
        // Only the bookmarks document at root, the full pair under src/.
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();
        fs::write(dir.path().join(BOOKMARKS_FILE), "bm").unwrap();
        fs::write(src.join(BOOKMARKS_FILE), "bm").unwrap();
        fs::write(src.join(ALIASES_FILE), "al").unwrap();

        let paths = locate_documents(dir.path()).unwrap();
        assert_eq!(paths.bookmarks, src.join(BOOKMARKS_FILE));
    }

    #[test]
    fn test_missing_documents() {
        let dir = tempdir().unwrap();
        let err = locate_documents(dir.path()).unwrap_err();
        let msg = format!("{}", err);
        assert!(matches!(err, AppError::Location(_)));
        assert!(msg.contains(BOOKMARKS_FILE));
        assert!(msg.contains(ALIASES_FILE));
    }
}
