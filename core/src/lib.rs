#![deny(missing_docs)]

//! # bmgen Core
//!
//! Core library for the bookmark scaffolding tool: locates the service's
//! two registry documents, collects a new entry interactively, renders the
//! code fragments for it, and splices them in at the anchor comments.

/// Shared error types.
pub mod error;

/// Well-known file names and anchor comments of the service source tree.
pub mod layout;

/// Target document discovery.
pub mod locator;

/// Scanning the documents for already-taken identifiers and aliases.
pub mod scan;

/// The validated entry model.
pub mod entry;

/// Interactive prompting.
pub mod collector;

/// Fragment rendering.
pub mod synthesizer;

/// Anchor-based text splicing.
pub mod patcher;

/// Buffered document loading and saving.
pub mod document;

pub use collector::{collect_entry, PromptSource, ScriptedPrompter, StdinPrompter};
pub use document::TargetDocument;
pub use entry::EntrySpec;
pub use error::{AppError, AppResult};
pub use locator::{locate_documents, DocumentPaths};
pub use patcher::splice_at_anchor;
pub use scan::ExistingEntries;
pub use synthesizer::{synthesize, GeneratedFragment};
