//! # Existing-Entry Scanning
//!
//! Extracts the set of already-declared bookmark structs and the set of
//! already-registered alias keys from the two target documents. The scan is
//! plain marker-pattern matching over the document text; the documents are
//! opaque strings to this tool, never an AST.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// The entries already present in the target documents.
///
/// Built once per run and handed to the collector, which rejects any new
/// identifier or alias found in these sets.
#[derive(Debug, Clone, Default)]
pub struct ExistingEntries {
    /// Struct names declared as `pub struct <Name>;` in the implementation
    /// document.
    pub structs: BTreeSet<String>,
    /// Alias keys appearing as `"<key>" =>` in the dispatch document.
    pub aliases: BTreeSet<String>,
}

impl ExistingEntries {
    /// Scans both documents.
    pub fn scan(bookmarks_src: &str, aliases_src: &str) -> Self {
        Self {
            structs: declared_structs(bookmarks_src),
            aliases: alias_keys(aliases_src),
        }
    }

    /// Whether a struct with this name is already declared.
    pub fn has_struct(&self, name: &str) -> bool {
        self.structs.contains(name)
    }

    /// Whether this alias key is already registered.
    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.contains(alias)
    }
}

/// Collects every `pub struct <Name>;` declaration in the source.
///
/// Zero-size declarations are the only struct form the generated entries
/// use, so this pattern covers every entry regardless of whether it sits in
/// the original declaration list or was spliced in later.
pub fn declared_structs(source: &str) -> BTreeSet<String> {
    static STRUCT_RE: OnceLock<Regex> = OnceLock::new();
    let struct_re = STRUCT_RE
        .get_or_init(|| Regex::new(r"pub struct (\w+);").expect("Invalid regex"));

    struct_re
        .captures_iter(source)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Collects every `"<key>" =>` alias key in the source.
///
/// Alias keys are arbitrary strings (the service registers keys like `~`),
/// so anything up to the closing quote counts.
pub fn alias_keys(source: &str) -> BTreeSet<String> {
    static ALIAS_RE: OnceLock<Regex> = OnceLock::new();
    let alias_re = ALIAS_RE
        .get_or_init(|| Regex::new(r#""([^"]*)"\s*=>"#).expect("Invalid regex"));

    alias_re
        .captures_iter(source)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOKMARKS_SRC: &str = r#"
pub trait Bookmark: Send + Sync {
    fn urls(&self) -> Vec<&'static str>;
    fn description(&self) -> &'static str;
}

pub struct Google;
pub struct DuckDuckGo;

// START OF STRUCT IMPLEMENTATIONS (DO NOT DELETE THIS LINE)

pub struct Weather;

impl Bookmark for Weather {
    fn urls(&self) -> Vec<&'static str> {
        vec!["https://w.example"]
    }

    fn description(&self) -> &'static str {
        "weather site"
    }
}
"#;

    const ALIASES_SRC: &str = r#"
pub fn get_alias_to_bookmark_map() -> HashMap<&'static str, Box<dyn bookmarks::Bookmark>> {
    hashmap! {
        "g" => Box::new(bookmarks::Google) as Box<dyn bookmarks::Bookmark>,
        "d" => Box::new(bookmarks::DuckDuckGo),
        "~" => Box::new(bookmarks::Home),
        // END OF ALIAS IMPLEMENTATIONS (DO NOT DELETE THIS LINE)
    }
}
"#;

    #[test]
    fn test_declared_structs() {
        let structs = declared_structs(BOOKMARKS_SRC);
        assert_eq!(structs.len(), 3);
        assert!(structs.contains("Google"));
        assert!(structs.contains("DuckDuckGo"));
        // Entries spliced below the anchor are found too
        assert!(structs.contains("Weather"));
    }

    #[test]
    fn test_alias_keys() {
        let aliases = alias_keys(ALIASES_SRC);
        assert_eq!(aliases.len(), 3);
        assert!(aliases.contains("g"));
        assert!(aliases.contains("d"));
        assert!(aliases.contains("~"));
    }

    #[test]
    fn test_scan_bundles_both_documents() {
        let existing = ExistingEntries::scan(BOOKMARKS_SRC, ALIASES_SRC);
        assert!(existing.has_struct("Google"));
        assert!(!existing.has_struct("Bing"));
        assert!(existing.has_alias("~"));
        assert!(!existing.has_alias("b"));
    }

    #[test]
    fn test_empty_documents() {
        let existing = ExistingEntries::scan("", "");
        assert!(existing.structs.is_empty());
        assert!(existing.aliases.is_empty());
    }

    #[test]
    fn test_non_unit_structs_are_not_entries() {
        // Record structs elsewhere in the document don't collide with
        // bookmark declarations.
        let src = "pub struct Config {\n    pub port: u16,\n}\npub struct Pi;\n";
        let structs = declared_structs(src);
        assert_eq!(structs.len(), 1);
        assert!(structs.contains("Pi"));
    }
}
