use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hornero::Cli;
use hornero::commands::{self, Outcome};
use hornero::pipeline::RunPlan;

/// Exit status after the user quits an interactive session.
const EXIT_QUIT: i32 = 130;

fn main() -> Result<()> {
    // Initialize tracing with RUST_LOG env filter
    // e.g., RUST_LOG=hornero=debug
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let plan = RunPlan::from_cli(&cli)?;
    tracing::debug!(?plan, "Resolved run plan");

    match commands::run(&plan)? {
        Outcome::Done => Ok(()),
        Outcome::Quit => std::process::exit(EXIT_QUIT),
    }
}
