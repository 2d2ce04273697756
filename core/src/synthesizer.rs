//! # Fragment Synthesis
//!
//! Renders an [`EntrySpec`] into the two text fragments the patcher splices
//! into the service source: the struct declaration plus `Bookmark` impl for
//! the implementation document, and the alias table line for the dispatch
//! document. Synthesis is pure string building over an already-validated
//! entry; field values are embedded verbatim, so a stray double quote in
//! an answer lands in the generated code unescaped.

use crate::entry::EntrySpec;

/// The two fragments derived from one entry. No identity of their own;
/// they live exactly long enough to be spliced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFragment {
    /// Struct declaration and `Bookmark` impl, inserted before the
    /// implementation document's anchor.
    pub implementation: String,
    /// One alias table line, inserted before the dispatch document's
    /// anchor. Ends with the indentation that re-aligns the anchor.
    pub dispatch: String,
}

/// Renders both fragments for `spec`.
pub fn synthesize(spec: &EntrySpec) -> GeneratedFragment {
    GeneratedFragment {
        implementation: implementation_fragment(spec),
        dispatch: dispatch_fragment(spec),
    }
}

fn implementation_fragment(spec: &EntrySpec) -> String {
    let mut code = String::new();

    // 1. Zero-size declaration
    code.push_str(&format!("pub struct {};\n\n", spec.name));

    // 2. Trait impl: urls, base first
    code.push_str(&format!("impl Bookmark for {} {{\n", spec.name));
    code.push_str("    fn urls(&self) -> Vec<&'static str> {\n");
    code.push_str(&render_urls(spec));
    code.push_str("    }\n\n");

    // 3. Description
    code.push_str("    fn description(&self) -> &'static str {\n");
    code.push_str(&format!("        \"{}\"\n", spec.description));
    code.push_str("    }\n");

    // 4. Query overrides, omitted entirely when none were supplied
    if !spec.overrides.is_empty() {
        code.push_str("\n    fn override_query<'a>(&self, query: &'a str) -> &'a str {\n");
        code.push_str("        match query {\n");
        for (token, replacement) in &spec.overrides {
            code.push_str(&format!(
                "            \"{}\" => \"{}\",\n",
                token, replacement
            ));
        }
        code.push_str("            _ => query,\n");
        code.push_str("        }\n");
        code.push_str("    }\n");
    }

    code.push_str("}\n\n");
    code
}

fn render_urls(spec: &EntrySpec) -> String {
    match spec.urls().as_slice() {
        [single] => format!("        vec![\"{}\"]\n", single),
        urls => {
            let mut code = String::from("        vec![\n");
            for url in urls {
                code.push_str(&format!("            \"{}\",\n", url));
            }
            code.push_str("        ]\n");
            code
        }
    }
}

fn dispatch_fragment(spec: &EntrySpec) -> String {
    format!(
        "\"{}\" => Box::new(bookmarks::{}),\n        ",
        spec.alias, spec.name
    )
}
