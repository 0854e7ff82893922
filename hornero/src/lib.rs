//! hornero - a package selector for building your cozy nest
//!
//! Reads a YAML file mapping categories to package names, lets the user
//! pick categories (by flag or from an interactive checklist) and prints,
//! saves or installs the resulting package list.
//!
//! ## Package managers
//!
//! - **apt**: Debian, Ubuntu, Linux Mint, Pop!_OS
//! - **pacman**: Arch, Manjaro, EndeavourOS
//! - **yay**: only when asked for with `--package-manager`

pub mod catalog;
pub mod cli;
pub mod command_runner;
pub mod commands;
pub mod error;
pub mod host;
pub mod output;
pub mod package_manager;
pub mod pipeline;
pub mod prompt;

pub use cli::Cli;
pub use error::{HorneroError, Result};
