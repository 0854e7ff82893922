//! Command dispatch for a validated [`RunPlan`].

pub mod install;
pub mod list;
pub mod select;

use std::io::{self, Write};

use anyhow::Result;
use is_terminal::IsTerminal;

use crate::catalog;
use crate::command_runner::{CommandRunner, RealCommandRunner};
use crate::error::HorneroError;
use crate::output::Output;
use crate::pipeline::{Mode, RunPlan};
use crate::prompt::{self, CliclackPrompter, Flow, Prompter};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The user quit an interactive session.
    Quit,
}

/// Execute `plan` against the real system.
pub fn run(plan: &RunPlan) -> Result<Outcome> {
    if plan.is_interactive() && !io::stdin().is_terminal() {
        return Err(HorneroError::usage("--interactive needs a terminal").into());
    }

    let stdout = io::stdout();
    run_with(
        plan,
        &RealCommandRunner,
        &mut CliclackPrompter,
        &mut stdout.lock(),
    )
}

/// Execute `plan` with explicit collaborators.
pub fn run_with(
    plan: &RunPlan,
    runner: &dyn CommandRunner,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let catalog = catalog::get_packages(&plan.packages_yml)?;

    let categories: Vec<String> = match &plan.mode {
        Mode::ListCategories => {
            list::run(&catalog, out)?;
            return Ok(Outcome::Done);
        }
        Mode::SelectAll => catalog.categories().map(String::from).collect(),
        Mode::Select(names) => {
            catalog::validate_categories(&catalog, names)?;
            names.clone()
        }
        Mode::Interactive => match prompt::choose_categories(prompter, &catalog)? {
            Flow::Continue(chosen) => chosen,
            Flow::Quit => return Ok(Outcome::Quit),
        },
    };

    let packages = catalog::select(&catalog, &categories);
    tracing::debug!(
        categories = categories.len(),
        packages = packages.len(),
        "Selected packages"
    );

    if plan.is_interactive() {
        match prompt::ask_save_path(prompter)? {
            Flow::Continue(Some(path)) => {
                catalog::write_selection(&path, &packages)?;
                Output::success(format!("Saved package list to {}", path.display()));
            }
            Flow::Continue(None) => {}
            Flow::Quit => return Ok(Outcome::Quit),
        }
    }

    match &plan.install {
        Some(install_plan) => {
            let prompter = plan.is_interactive().then_some(prompter);
            match install::run(install_plan, &packages, runner, prompter)? {
                Flow::Continue(()) => Ok(Outcome::Done),
                Flow::Quit => Ok(Outcome::Quit),
            }
        }
        None => {
            select::emit(&packages, plan.output.as_deref(), out)?;
            Ok(Outcome::Done)
        }
    }
}
