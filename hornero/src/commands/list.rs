//! `--list-categories`: print category names, one per line.

use std::io::Write;

use anyhow::{Context, Result};

use crate::catalog::Catalog;

pub fn run(catalog: &Catalog, out: &mut dyn Write) -> Result<()> {
    for category in catalog.categories() {
        writeln!(out, "{category}").context("Failed to write categories")?;
    }
    Ok(())
}
