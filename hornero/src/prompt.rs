//! Interactive prompts.
//!
//! The category picker is a checklist: the user ticks categories, sees the
//! resulting package list and confirms it. Declining shows the checklist
//! again with the previous answer ticked, so the user edits instead of
//! starting over.
//!
//! Pressing Esc or Ctrl-C at any prompt asks whether to quit. Confirming
//! returns [`Flow::Quit`]; declining goes back to the prompt that was
//! cancelled.
//!
//! All terminal interaction goes through the [`Prompter`] trait so the flows
//! can be tested with scripted answers. [`CliclackPrompter`] is the
//! production implementation.

use std::io;
use std::path::PathBuf;

use crate::catalog::{self, Catalog};
use crate::error::Result;
use crate::output::Output;

/// Terminal prompt primitives.
pub trait Prompter {
    /// Show a checklist of `(value, hint)` items with `initial` pre-ticked.
    fn multiselect(
        &mut self,
        prompt: &str,
        items: &[(String, String)],
        initial: &[String],
    ) -> io::Result<Vec<String>>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool>;

    /// Ask for a non-blank line of text.
    fn input(&mut self, prompt: &str, placeholder: &str) -> io::Result<String>;

    /// Show a block of information.
    fn note(&mut self, title: &str, body: &str) -> io::Result<()>;
}

/// [`Prompter`] backed by cliclack widgets.
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn multiselect(
        &mut self,
        prompt: &str,
        items: &[(String, String)],
        initial: &[String],
    ) -> io::Result<Vec<String>> {
        let mut select = cliclack::multiselect(prompt).required(false);
        for (value, hint) in items {
            select = select.item(value.clone(), value, hint);
        }
        if !initial.is_empty() {
            select = select.initial_values(initial.to_vec());
        }
        select.interact()
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        cliclack::confirm(prompt).initial_value(default).interact()
    }

    fn input(&mut self, prompt: &str, placeholder: &str) -> io::Result<String> {
        cliclack::input(prompt)
            .placeholder(placeholder)
            .validate(|value: &String| {
                if value.trim().is_empty() {
                    Err("Please enter a value")
                } else {
                    Ok(())
                }
            })
            .interact()
    }

    fn note(&mut self, title: &str, body: &str) -> io::Result<()> {
        cliclack::note(title, body)
    }
}

/// Result of an interactive flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow<T> {
    Continue(T),
    /// The user asked to quit.
    Quit,
}

enum Answer<T> {
    Value(T),
    Retry,
    Quit,
}

fn is_cancel(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::Interrupted
}

/// Run one prompt, turning a cancel into a quit confirmation.
fn guarded<T>(
    prompter: &mut dyn Prompter,
    ask: impl FnOnce(&mut dyn Prompter) -> io::Result<T>,
) -> Result<Answer<T>> {
    match ask(&mut *prompter) {
        Ok(value) => Ok(Answer::Value(value)),
        Err(e) if is_cancel(&e) => {
            if confirm_quit(prompter)? {
                Ok(Answer::Quit)
            } else {
                Ok(Answer::Retry)
            }
        }
        Err(e) => Err(e.into()),
    }
}

/// Ask whether the user really wants to quit. Cancelling this question
/// counts as yes.
pub fn confirm_quit(prompter: &mut dyn Prompter) -> Result<bool> {
    match prompter.confirm("Do you really want to quit?", false) {
        Ok(quit) => Ok(quit),
        Err(e) if is_cancel(&e) => Ok(true),
        Err(e) => Err(e.into()),
    }
}

/// Let the user pick categories from the catalog until they confirm.
///
/// Returns the chosen category names, which may be empty.
pub fn choose_categories(
    prompter: &mut dyn Prompter,
    catalog: &Catalog,
) -> Result<Flow<Vec<String>>> {
    // cliclack refuses to show a checklist without items.
    if catalog.is_empty() {
        Output::warning("The packages file has no categories");
        return Ok(Flow::Continue(Vec::new()));
    }

    let items: Vec<(String, String)> = catalog
        .iter()
        .map(|(name, packages)| (name.to_string(), format!("{} packages", packages.len())))
        .collect();
    let mut previous: Vec<String> = Vec::new();

    loop {
        let chosen = match guarded(prompter, |p| {
            p.multiselect("Select the categories to install", &items, &previous)
        })? {
            Answer::Value(chosen) => chosen,
            Answer::Retry => continue,
            Answer::Quit => return Ok(Flow::Quit),
        };
        previous = chosen.clone();

        let selection = catalog::select(catalog, &chosen);
        let summary = if selection.is_empty() {
            "No packages selected".to_string()
        } else {
            selection.join("\n")
        };
        prompter.note("Selected packages", &summary)?;

        match guarded(prompter, |p| p.confirm("Use these packages?", true))? {
            Answer::Value(true) => return Ok(Flow::Continue(chosen)),
            Answer::Value(false) | Answer::Retry => continue,
            Answer::Quit => return Ok(Flow::Quit),
        }
    }
}

/// Ask a yes/no question, asking again if a cancel is not confirmed.
pub fn ask_yes_no(prompter: &mut dyn Prompter, prompt: &str, default: bool) -> Result<Flow<bool>> {
    loop {
        match guarded(prompter, |p| p.confirm(prompt, default))? {
            Answer::Value(answer) => return Ok(Flow::Continue(answer)),
            Answer::Retry => continue,
            Answer::Quit => return Ok(Flow::Quit),
        }
    }
}

/// Ask whether to save the selection and where.
///
/// Returns `None` if the user does not want to save.
pub fn ask_save_path(prompter: &mut dyn Prompter) -> Result<Flow<Option<PathBuf>>> {
    loop {
        match ask_yes_no(prompter, "Save the package list to a file?", false)? {
            Flow::Continue(false) => return Ok(Flow::Continue(None)),
            Flow::Continue(true) => {}
            Flow::Quit => return Ok(Flow::Quit),
        }

        match guarded(prompter, |p| p.input("Where should it be saved?", "packages.txt"))? {
            Answer::Value(path) => return Ok(Flow::Continue(Some(PathBuf::from(path.trim())))),
            Answer::Retry => continue,
            Answer::Quit => return Ok(Flow::Quit),
        }
    }
}
