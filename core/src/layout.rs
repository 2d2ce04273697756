//! # Service Layout
//!
//! Well-known names inside the bookmark service source tree: the two
//! documents the tool patches and the anchor comments marking the insertion
//! points. Splicing targets the first occurrence of an anchor; the service
//! keeps exactly one of each, as the "DO NOT DELETE THIS LINE" wording
//! demands.

/// File name of the implementation document (struct declarations and
/// `Bookmark` impls).
pub const BOOKMARKS_FILE: &str = "bookmarks.rs";

/// File name of the dispatch document (the alias-to-constructor table).
pub const ALIASES_FILE: &str = "utils.rs";

/// Anchor comment in the implementation document. New entries are inserted
/// directly before it.
pub const STRUCT_ANCHOR: &str =
    "// START OF STRUCT IMPLEMENTATIONS (DO NOT DELETE THIS LINE)";

/// Anchor comment closing the alias table in the dispatch document. New
/// alias lines are inserted directly before it.
pub const ALIAS_ANCHOR: &str =
    "// END OF ALIAS IMPLEMENTATIONS (DO NOT DELETE THIS LINE)";

/// Subdirectories probed for the two documents, in preference order. The
/// empty entry is the working directory itself, so the tool resolves both
/// when run from inside `src/` and when run from the repository root.
pub const LAYOUT_CANDIDATES: [&str; 2] = ["", "src"];
