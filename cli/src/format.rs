#![deny(missing_docs)]

//! # Post-Processing
//!
//! Runs the project formatter over the freshly patched source. Formatting
//! is advisory: the generated fragments are valid Rust either way, so a
//! missing or failing formatter downgrades to a warning rather than
//! unwinding an operation whose writes already happened.

use std::path::Path;
use std::process::{Command, Output};

use bmgen_core::AppResult;

/// Interface for running the external formatter.
///
/// Abstracted to allow mocking command execution in tests without
/// requiring a toolchain on the test machine.
pub trait CommandExecutor {
    /// Runs `program` with `args` inside `cwd` and returns the output.
    fn execute(&self, program: &str, args: &[&str], cwd: &Path) -> AppResult<Output>;
}

/// Standard executor using `std::process::Command`.
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    fn execute(&self, program: &str, args: &[&str], cwd: &Path) -> AppResult<Output> {
        let output = Command::new(program).args(args).current_dir(cwd).output()?;
        Ok(output)
    }
}

/// Outcome of the formatting step. Never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatStatus {
    /// The formatter ran and exited cleanly.
    Completed,
    /// The formatter could not run or exited non-zero; the reason is for
    /// the warning line only.
    Skipped(String),
}

/// Formats the project by running `cargo fmt` from `project_root`.
///
/// `cargo fmt` resolves the manifest upward from its working directory, so
/// any directory inside the service checkout works as the root.
pub fn format_project<E: CommandExecutor>(project_root: &Path, executor: &E) -> FormatStatus {
    match executor.execute("cargo", &["fmt"], project_root) {
        Ok(output) if output.status.success() => FormatStatus::Completed,
        Ok(output) => FormatStatus::Skipped(format!(
            "cargo fmt exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )),
        Err(e) => FormatStatus::Skipped(format!("cargo fmt could not run: {}", e)),
    }
}
