//! `--install`: drive the system package manager with a selection.
//!
//! Runs, in order: update (if chosen), upgrade (if chosen), install. The
//! first failing command aborts the run; nothing is rolled back.

use anyhow::Result;

use crate::command_runner::CommandRunner;
use crate::output::Output;
use crate::package_manager::{self, PackageManager};
use crate::pipeline::InstallPlan;
use crate::prompt::{self, Flow, Prompter};

/// Install `packages`.
///
/// With a prompter, the user is asked about update and upgrade unless the
/// matching flag already turned them on.
pub fn run(
    plan: &InstallPlan,
    packages: &[String],
    runner: &dyn CommandRunner,
    prompter: Option<&mut dyn Prompter>,
) -> Result<Flow<()>> {
    let manager = package_manager::resolve(plan.manager.as_deref())?;
    Output::info(format!("Using {manager}"));
    if plan.manager.is_none() {
        Output::hint("Detected from your distribution, pass --package-manager to override");
    }

    let mut update = plan.update;
    let mut upgrade = plan.upgrade;
    if let Some(prompter) = prompter {
        if !update {
            match prompt::ask_yes_no(prompter, "Update package lists?", true)? {
                Flow::Continue(answer) => update = answer,
                Flow::Quit => return Ok(Flow::Quit),
            }
        }
        if !upgrade {
            match prompt::ask_yes_no(prompter, "Upgrade installed packages?", false)? {
                Flow::Continue(answer) => upgrade = answer,
                Flow::Quit => return Ok(Flow::Quit),
            }
        }
    }

    let mut pm = PackageManager::new(manager, runner).with_dry_run(plan.dry_run);
    if update {
        pm.update()?;
    }
    if upgrade {
        pm.upgrade()?;
    }
    pm.install(packages)?;

    let state = pm.state();
    if state.installed {
        Output::success(format!(
            "Installed {} packages with {}",
            packages.len(),
            pm.manager()
        ));
    } else if state.is_idle() {
        tracing::debug!(dry_run = plan.dry_run, "Install flow changed nothing");
    }
    Ok(Flow::Continue(()))
}
