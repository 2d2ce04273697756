//! # Entry Model
//!
//! The validated field set describing one new bookmark entry, as collected
//! from the operator. Synthesis is a pure function of this value.

/// A new bookmark entry: one generated struct + trait impl in the
/// implementation document and one alias line in the dispatch document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySpec {
    /// Struct name for the generated type (e.g. `GoogleCalendar`). Unique
    /// among the declared structs of the implementation document.
    pub name: String,

    /// Human-readable description returned by the generated entry.
    pub description: String,

    /// URL the alias resolves to when no query is supplied.
    pub base_url: String,

    /// Query-template URL containing a `%s` placeholder; `None` when the
    /// bookmark takes no query.
    pub query_url: Option<String>,

    /// Ordered (token, replacement) pairs for the generated
    /// `override_query` method; the method is omitted when empty.
    pub overrides: Vec<(String, String)>,

    /// Key registered in the alias table (e.g. `cal`). Unique among the
    /// dispatch document's alias keys.
    pub alias: String,
}

impl EntrySpec {
    /// The URL sequence the generated `urls()` method returns: base URL
    /// first, query-template URL second when present. Order is significant
    /// because the service treats index 0 as the query-less target.
    pub fn urls(&self) -> Vec<&str> {
        let mut urls = vec![self.base_url.as_str()];
        if let Some(query) = &self.query_url {
            urls.push(query.as_str());
        }
        urls
    }
}
