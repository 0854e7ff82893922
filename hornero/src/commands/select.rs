//! Emit a package selection to stdout or to a file.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog;
use crate::output::Output;

pub fn emit(packages: &[String], output: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    match output {
        Some(path) => {
            catalog::write_selection(path, packages)?;
            Output::success(format!(
                "Wrote {} packages to {}",
                packages.len(),
                path.display()
            ));
        }
        None => {
            out.write_all(catalog::render_selection(packages).as_bytes())
                .context("Failed to write package list")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn packages() -> Vec<String> {
        vec!["vim".into(), "git".into(), "vim".into()]
    }

    #[test]
    fn test_emit_to_stdout() {
        let mut out = Vec::new();
        emit(&packages(), None, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "vim\ngit\nvim\n");
    }

    #[test]
    fn test_emit_to_file_leaves_stdout_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut out = Vec::new();
        emit(&packages(), Some(&path), &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "vim\ngit\nvim\n");
    }

    #[test]
    fn test_emit_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        assert!(emit(&packages(), Some(&path), &mut Vec::new()).is_err());
    }
}
