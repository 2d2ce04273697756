#![deny(missing_docs)]

//! # bmgen
//!
//! Interactive scaffolding for the bookmark redirect service.
//!
//! Run from the service checkout (root or `src/`). The tool prompts for
//! the new bookmark's fields and splices the generated struct impl into
//! `bookmarks.rs` and the alias line into `utils.rs`, then formats the
//! project.

use std::{env, process};

use bmgen_core::collector::StdinPrompter;
use bmgen_core::AppResult;
use clap::Parser;

use crate::format::ShellExecutor;

mod format;
mod scaffold;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Add a bookmark to the redirect service")]
struct Cli {
    #[clap(flatten)]
    args: scaffold::ScaffoldArgs,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let root = env::current_dir()?;

    // Injecting real terminal input and a real shell for the formatter
    let mut prompter = StdinPrompter;
    scaffold::execute(&root, &cli.args, &mut prompter, &ShellExecutor)
}
