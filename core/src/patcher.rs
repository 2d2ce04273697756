//! # Anchored Patching
//!
//! Pure text splicing at anchor comments. The patcher never tokenizes or
//! validates the surrounding source: it trusts that each anchor occurs
//! exactly once in its document and restricts itself to inserting new text
//! directly before the anchor. The anchor itself is left in place, so the
//! document stays patchable by every future run.

use crate::error::{AppError, AppResult};

/// Inserts `fragment` at the anchor position in `source`.
///
/// The single occurrence of `marker` is replaced by `fragment` followed by
/// `marker` again. Every byte outside the insertion point is preserved
/// untouched; if the marker appears more than once (a hand-edit the tool
/// does not try to detect), only the first occurrence is patched.
///
/// # Arguments
///
/// * `source` - Full text of the target document.
/// * `marker` - The anchor comment, expected verbatim in `source`.
/// * `fragment` - Anchor-free text to insert; it should end with the
///   whitespace that places the re-emitted anchor where it belongs.
///
/// # Errors
///
/// Returns [`AppError::AnchorNotFound`] when `marker` does not occur in
/// `source`. The document was edited in a way the tool cannot patch, and
/// the whole operation must stop before anything is written.
pub fn splice_at_anchor(source: &str, marker: &str, fragment: &str) -> AppResult<String> {
    let insert_pos = source.find(marker).ok_or_else(|| {
        AppError::AnchorNotFound(format!(
            "anchor line '{}' is missing; restore it before adding entries",
            marker
        ))
    })?;

    let mut new_source = String::with_capacity(source.len() + fragment.len());
    new_source.push_str(&source[..insert_pos]);
    new_source.push_str(fragment);
    new_source.push_str(&source[insert_pos..]);

    Ok(new_source)
}
