//! Run plan: the validated form of the command line.
//!
//! [`RunPlan::from_cli`] checks flag combinations before any file is read,
//! so usage mistakes never touch the packages file or the package manager.

use std::path::PathBuf;

use crate::Cli;
use crate::error::{HorneroError, Result};

/// How categories are chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print the category names and stop.
    ListCategories,
    /// Every category, in file order.
    SelectAll,
    /// The named categories, in the order given.
    Select(Vec<String>),
    /// Categories picked from the interactive checklist.
    Interactive,
}

impl Mode {
    /// Resolve the mutually exclusive selection flags.
    pub fn from_flags(
        list_categories: bool,
        categories: &[String],
        interactive: bool,
    ) -> Result<Self> {
        let given = [list_categories, !categories.is_empty(), interactive]
            .iter()
            .filter(|&&set| set)
            .count();
        if given > 1 {
            return Err(HorneroError::usage(
                "Only one of --list-categories, --categories and --interactive \
                 can be used at a time.",
            ));
        }

        Ok(if list_categories {
            Mode::ListCategories
        } else if interactive {
            Mode::Interactive
        } else if categories.is_empty() {
            Mode::SelectAll
        } else {
            Mode::Select(categories.to_vec())
        })
    }
}

/// Package manager options for `--install`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallPlan {
    /// Explicit manager name; detected from the distribution when `None`
    pub manager: Option<String>,
    /// Refresh package lists first
    pub update: bool,
    /// Upgrade installed packages first
    pub upgrade: bool,
    /// Print commands instead of running them
    pub dry_run: bool,
}

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub packages_yml: PathBuf,
    pub mode: Mode,
    /// Present when the selection should be installed
    pub install: Option<InstallPlan>,
    /// Where to write the selection instead of stdout
    pub output: Option<PathBuf>,
}

impl RunPlan {
    /// Create a run plan from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mode = Mode::from_flags(cli.list_categories, &cli.categories, cli.interactive)?;

        if mode == Mode::ListCategories && (cli.install || cli.output.is_some()) {
            return Err(HorneroError::usage(
                "--list-categories cannot be combined with --install or --output.",
            ));
        }

        let install = if cli.install {
            if cli.output.is_some() {
                return Err(HorneroError::usage(
                    "--output cannot be combined with --install.",
                ));
            }
            Some(InstallPlan {
                manager: cli.package_manager.clone(),
                update: cli.update,
                upgrade: cli.upgrade,
                dry_run: cli.dry_run,
            })
        } else {
            let install_only = [
                (cli.package_manager.is_some(), "--package-manager"),
                (cli.update, "--update"),
                (cli.upgrade, "--upgrade"),
                (cli.dry_run, "--dry-run"),
            ];
            if let Some((_, flag)) = install_only.iter().find(|(set, _)| *set) {
                return Err(HorneroError::usage(format!("{flag} requires --install.")));
            }
            None
        };

        Ok(Self {
            packages_yml: cli.packages_yml.clone(),
            mode,
            install,
            output: cli.output.clone(),
        })
    }

    pub fn is_interactive(&self) -> bool {
        self.mode == Mode::Interactive
    }
}

/// Builder for creating run plans in tests or programmatically.
#[derive(Debug, Default)]
pub struct RunPlanBuilder {
    packages_yml: PathBuf,
    mode: Option<Mode>,
    install: Option<InstallPlan>,
    output: Option<PathBuf>,
}

impl RunPlanBuilder {
    pub fn new(packages_yml: impl Into<PathBuf>) -> Self {
        Self {
            packages_yml: packages_yml.into(),
            ..Self::default()
        }
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn install(mut self, install: InstallPlan) -> Self {
        self.install = Some(install);
        self
    }

    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn build(self) -> RunPlan {
        RunPlan {
            packages_yml: self.packages_yml,
            mode: self.mode.unwrap_or(Mode::SelectAll),
            install: self.install,
            output: self.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn plan(args: &[&str]) -> Result<RunPlan> {
        let cli = Cli::try_parse_from(["hornero", "packages.yml"].iter().chain(args)).unwrap();
        RunPlan::from_cli(&cli)
    }

    #[test]
    fn test_default_selects_all() {
        let plan = plan(&[]).unwrap();
        assert_eq!(plan.mode, Mode::SelectAll);
        assert!(plan.install.is_none());
        assert!(plan.output.is_none());
    }

    #[test]
    fn test_modes() {
        assert_eq!(plan(&["-l"]).unwrap().mode, Mode::ListCategories);
        assert_eq!(plan(&["-i"]).unwrap().mode, Mode::Interactive);
        assert_eq!(
            plan(&["-c", "b", "-c", "a"]).unwrap().mode,
            Mode::Select(vec!["b".into(), "a".into()])
        );
    }

    #[test]
    fn test_conflicting_modes_are_usage_errors() {
        for args in [
            &["-l", "-c", "basic"][..],
            &["-l", "-i"],
            &["-i", "-c", "basic"],
            &["-l", "-i", "-c", "basic"],
        ] {
            let err = plan(args).unwrap_err();
            assert!(matches!(err, HorneroError::Usage(_)), "{args:?}");
        }
    }

    #[test]
    fn test_install_plan() {
        let plan = plan(&["--install", "-p", "pacman", "--upgrade"]).unwrap();
        assert_eq!(
            plan.install,
            Some(InstallPlan {
                manager: Some("pacman".into()),
                update: false,
                upgrade: true,
                dry_run: false,
            })
        );
    }

    #[test]
    fn test_install_only_flags_require_install() {
        let err = plan(&["--update"]).unwrap_err();
        assert_eq!(err.to_string(), "--update requires --install.");
        assert!(plan(&["-p", "apt"]).is_err());
        assert!(plan(&["--dry-run"]).is_err());
    }

    #[test]
    fn test_list_categories_rejects_side_effects() {
        assert!(plan(&["-l", "--install"]).is_err());
        assert!(plan(&["-l", "-o", "out.txt"]).is_err());
        assert!(plan(&["--install", "-o", "out.txt"]).is_err());
    }

    #[test]
    fn test_builder() {
        let plan = RunPlanBuilder::new("p.yml")
            .mode(Mode::Interactive)
            .output("out.txt")
            .build();
        assert!(plan.is_interactive());
        assert_eq!(plan.output, Some(PathBuf::from("out.txt")));
        assert_eq!(RunPlanBuilder::new("p.yml").build().mode, Mode::SelectAll);
    }
}
