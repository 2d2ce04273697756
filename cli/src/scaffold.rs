#![deny(missing_docs)]

//! # Scaffold Command
//!
//! Adds one bookmark to the service source. This command:
//! 1. Locates `bookmarks.rs` and `utils.rs` (working directory or `src/`).
//! 2. Scans both documents for already-taken struct names and alias keys.
//! 3. Prompts for the new entry, re-asking until name and alias are fresh.
//! 4. Renders the struct impl and the alias line and splices each in at
//!    its anchor comment. Both documents are patched in memory before
//!    either write.
//! 5. Writes the documents back and runs the formatter over the project.

use std::path::Path;

use bmgen_core::layout::{ALIAS_ANCHOR, STRUCT_ANCHOR};
use bmgen_core::{
    collect_entry, locate_documents, synthesize, AppResult, ExistingEntries, PromptSource,
    TargetDocument,
};

use crate::format::{format_project, CommandExecutor, FormatStatus};

/// Arguments for the scaffold command.
#[derive(clap::Args, Debug, Clone)]
pub struct ScaffoldArgs {
    /// Print the patched documents to stdout instead of writing them back.
    #[clap(long)]
    pub dry_run: bool,
}

/// Executes the scaffolding process.
///
/// # Arguments
///
/// * `root` - Directory the tool was started from.
/// * `args` - Command arguments.
/// * `prompter` - Source of interactive answers (stdin in production).
/// * `executor` - Runner for the formatter (use `ShellExecutor` outside tests).
pub fn execute(
    root: &Path,
    args: &ScaffoldArgs,
    prompter: &mut impl PromptSource,
    executor: &impl CommandExecutor,
) -> AppResult<()> {
    // 1. Locate and load both documents
    let paths = locate_documents(root)?;
    let mut bookmarks = TargetDocument::load(&paths.bookmarks)?;
    let mut aliases = TargetDocument::load(&paths.aliases)?;

    // 2. Scan for taken names
    let existing = ExistingEntries::scan(bookmarks.text(), aliases.text());

    // 3. Collect the new entry
    let entry = collect_entry(prompter, &existing)?;

    // 4. Render and splice. Both splices happen before any write, so a
    //    missing anchor in either document aborts with disk untouched.
    let fragment = synthesize(&entry);
    bookmarks.splice(STRUCT_ANCHOR, &fragment.implementation)?;
    aliases.splice(ALIAS_ANCHOR, &fragment.dispatch)?;

    if args.dry_run {
        print!("{}", bookmarks.text());
        print!("{}", aliases.text());
        return Ok(());
    }

    // 5. Write back
    bookmarks.save()?;
    aliases.save()?;
    println!(
        "Added {} (alias \"{}\") to {:?} and {:?}",
        entry.name, entry.alias, paths.bookmarks, paths.aliases
    );

    // 6. Advisory formatting
    if let FormatStatus::Skipped(reason) = format_project(root, executor) {
        eprintln!("Warning: formatting skipped: {}", reason);
    }

    Ok(())
}
