//! Error types for catalog loading, selection and package manager runs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HorneroError {
    #[error("failed to read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error(
        "invalid package '{package}' in category '{category}': \
         package names cannot contain whitespace"
    )]
    InvalidPackage { category: String, package: String },

    #[error(
        "Invalid categories: '{}'. These categories are not present in the packages file.",
        .0.join(" ")
    )]
    UnknownCategories(Vec<String>),

    #[error("{0}")]
    Usage(String),

    #[error("unsupported package manager '{0}' (supported: apt, pacman, yay)")]
    UnsupportedManager(String),

    #[error(
        "couldn't choose a package manager for your distribution ({0}). \
         Your distribution may not be supported or could not be identified. \
         Try specifying one with --package-manager."
    )]
    UndetectableManager(String),

    #[error("failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("command '{command}' {}", describe_exit(.code))]
    Subprocess { command: String, code: Option<i32> },

    #[error("prompt failed: {0}")]
    Prompt(#[from] io::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, HorneroError>;

impl HorneroError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_categories_joined_with_spaces() {
        let err = HorneroError::UnknownCategories(vec!["bla".into(), "foo".into()]);
        assert_eq!(
            err.to_string(),
            "Invalid categories: 'bla foo'. These categories are not present in the packages file."
        );
    }

    #[test]
    fn test_subprocess_display() {
        let err = HorneroError::Subprocess {
            command: "sudo apt update".into(),
            code: Some(100),
        };
        assert_eq!(err.to_string(), "command 'sudo apt update' exited with status 100");

        let err = HorneroError::Subprocess {
            command: "yay -Su".into(),
            code: None,
        };
        assert!(err.to_string().ends_with("was terminated by a signal"));
    }

    #[test]
    fn test_io_error_converts_to_prompt() {
        let io_err = io::Error::new(io::ErrorKind::Interrupted, "ctrl-c");
        let err: HorneroError = io_err.into();
        assert!(matches!(err, HorneroError::Prompt(_)));
    }
}
