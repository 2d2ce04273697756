//! # Interactive Entry Collection
//!
//! Walks the operator through the prompt sequence for one new bookmark and
//! returns the validated [`EntrySpec`]. Identifier and alias conflicts are
//! resolved here by re-prompting, so the caller never sees them as errors.
//! Input arrives through the [`PromptSource`] seam: the binary wires in
//! [`StdinPrompter`], tests script the whole dialogue with
//! [`ScriptedPrompter`].

use std::collections::{BTreeSet, VecDeque};
use std::io::{self, BufRead, Write};

use crate::entry::EntrySpec;
use crate::error::{AppError, AppResult};
use crate::scan::ExistingEntries;

/// Interface for answering one prompt with one line of input.
///
/// Abstracted so tests can supply a finite scripted dialogue instead of a
/// real terminal.
pub trait PromptSource {
    /// Shows `prompt` and returns the answering line, without its trailing
    /// newline.
    fn read_line(&mut self, prompt: &str) -> AppResult<String>;
}

/// Standard prompting over the process's stdin and stdout.
pub struct StdinPrompter;

impl PromptSource for StdinPrompter {
    fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes_read = io::stdin().lock().read_line(&mut line)?;
        if bytes_read == 0 {
            // Closed stdin would otherwise spin the retry loops forever.
            return Err(AppError::General(
                "input closed before the entry was complete".to_string(),
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Prompt source answering from a fixed queue, one line per prompt.
///
/// Used by tests throughout the workspace to drive the collector without a
/// terminal. Running out of answers is an error, so a test that triggers
/// one more re-prompt than it scripted fails instead of hanging.
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
}

impl ScriptedPrompter {
    /// Queues `answers` to be handed out in order.
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PromptSource for ScriptedPrompter {
    fn read_line(&mut self, _prompt: &str) -> AppResult<String> {
        self.answers
            .pop_front()
            .ok_or_else(|| AppError::General("scripted input ran out of answers".to_string()))
    }
}

/// Collects one complete entry, in prompt order: struct name, description,
/// base URL, optional query URL, override pairs, alias.
///
/// The struct name and alias are re-prompted until they are non-empty and
/// absent from `existing`; every other field is taken verbatim. The
/// override loop ends the first time the key prompt gets an empty answer.
///
/// # Errors
///
/// Only I/O failures of the prompt source itself surface here. Conflicts
/// never do; they are swallowed by the retry loops.
pub fn collect_entry(
    prompter: &mut impl PromptSource,
    existing: &ExistingEntries,
) -> AppResult<EntrySpec> {
    let name = prompt_until_fresh(
        prompter,
        "Name of struct (e.g. GoogleCalendar): ",
        &existing.structs,
    )?;

    let description = prompter.read_line("Enter bookmark description: ")?;
    let base_url =
        prompter.read_line("Enter base url of bookmark (e.g. https://www.google.com): ")?;

    let query_url = {
        let answer = prompter.read_line(
            "Enter query url with %s or hit enter to skip (e.g. https://www.google.com/search?q=%s): ",
        )?;
        if answer.is_empty() {
            None
        } else {
            Some(answer)
        }
    };

    let mut overrides = Vec::new();
    loop {
        let key = prompter.read_line("Override key (hit enter to finish): ")?;
        if key.is_empty() {
            break;
        }
        let value = prompter.read_line(&format!("Override value for '{}': ", key))?;
        overrides.push((key, value));
    }

    let alias = prompt_until_fresh(prompter, "Name of alias (e.g. g): ", &existing.aliases)?;

    Ok(EntrySpec {
        name,
        description,
        base_url,
        query_url,
        overrides,
        alias,
    })
}

/// Re-prompts until the answer is non-empty and not already in `taken`.
fn prompt_until_fresh(
    prompter: &mut impl PromptSource,
    prompt: &str,
    taken: &BTreeSet<String>,
) -> AppResult<String> {
    loop {
        let candidate = prompter.read_line(prompt)?;
        if candidate.is_empty() {
            continue;
        }
        if taken.contains(&candidate) {
            println!("{} already exists. Pick a different name.", candidate);
            continue;
        }
        return Ok(candidate);
    }
}
