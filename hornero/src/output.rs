//! Output helpers for consistent CLI output.
//!
//! Status messages go to stderr so that stdout only ever carries data
//! (category names or package names) and stays safe to pipe.
//!
//! # Example
//!
//! ```rust,ignore
//! use hornero::output::Output;
//!
//! Output::info("Reading packages.yml...");
//! Output::running("sudo apt install vim git");
//! Output::success("Installed 2 packages");
//! ```

use owo_colors::OwoColorize;

/// Standard output helper for consistent CLI formatting.
pub struct Output;

impl Output {
    /// Print a success message with a green checkmark.
    ///
    /// Example: `✓ Installed 3 packages`
    pub fn success(msg: impl AsRef<str>) {
        eprintln!("{} {}", "✓".green().bold(), msg.as_ref());
    }

    /// Print a warning message with a yellow warning symbol.
    ///
    /// Example: `⚠ No packages selected`
    pub fn warning(msg: impl AsRef<str>) {
        eprintln!("{} {}", "⚠".yellow(), msg.as_ref());
    }

    /// Print an info/status message with a cyan arrow.
    ///
    /// Example: `→ Using pacman`
    pub fn info(msg: impl AsRef<str>) {
        eprintln!("{} {}", "→".cyan(), msg.as_ref().dimmed());
    }

    /// Print a hint/suggestion message (indented with arrow).
    pub fn hint(msg: impl AsRef<str>) {
        eprintln!("  {} {}", "→".cyan(), msg.as_ref());
    }

    /// Print a dry-run message.
    ///
    /// Example: `[dry-run] Would run: sudo pacman -S vim`
    pub fn dry_run(msg: impl AsRef<str>) {
        eprintln!("{} {}", "[dry-run]".dimmed(), msg.as_ref().dimmed());
    }

    /// Print the running command.
    ///
    /// Example: `Running: sudo apt install vim git`
    pub fn running(cmd: impl AsRef<str>) {
        eprintln!();
        eprintln!("{} {}", "Running:".bold(), cmd.as_ref());
        eprintln!();
    }
}
