//! CLI argument definitions for hornero.
//!
//! Kept out of `main.rs` so the run plan can be built from these types in
//! library code and tests.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "hornero")]
#[command(about = "Hornero - a package selector for building your cozy nest")]
#[command(version)]
pub struct Cli {
    /// YAML file mapping categories to lists of packages
    #[arg(value_name = "PACKAGES_YML")]
    pub packages_yml: PathBuf,

    /// List available categories in PACKAGES_YML
    #[arg(short, long)]
    pub list_categories: bool,

    /// Select packages only from this category (repeatable)
    #[arg(short, long = "categories", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Pick categories from an interactive checklist
    #[arg(short, long)]
    pub interactive: bool,

    /// Install the selected packages with the system package manager
    #[arg(long)]
    pub install: bool,

    /// Package manager to use instead of detecting it (apt, pacman, yay)
    #[arg(short, long, value_name = "NAME")]
    pub package_manager: Option<String>,

    /// Refresh package lists before installing
    #[arg(long)]
    pub update: bool,

    /// Upgrade installed packages before installing
    #[arg(long)]
    pub upgrade: bool,

    /// Write the selected packages to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Show package manager commands without running them
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}
