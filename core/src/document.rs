//! # Target Documents
//!
//! An in-memory copy of one registry document. Loading reads the whole file
//! once; every patch is applied to the buffered text, and nothing touches
//! the filesystem again until [`TargetDocument::save`]. Keeping both
//! documents buffered lets the caller patch them all before writing any,
//! so a missing anchor in the second document aborts the run with the
//! first document still untouched on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppResult;
use crate::patcher::splice_at_anchor;

/// One registry document, buffered in memory between load and save.
#[derive(Debug, Clone)]
pub struct TargetDocument {
    path: PathBuf,
    text: String,
}

impl TargetDocument {
    /// Reads the document at `path` into memory.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Current buffered text, including any patches applied so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Location the document was loaded from and will be saved to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Patches the buffer, inserting `fragment` directly before `marker`.
    pub fn splice(&mut self, marker: &str, fragment: &str) -> AppResult<()> {
        self.text = splice_at_anchor(&self.text, marker, fragment)?;
        Ok(())
    }

    /// Writes the buffered text back to the original path in one write.
    pub fn save(&self) -> AppResult<()> {
        fs::write(&self.path, &self.text)?;
        Ok(())
    }
}
