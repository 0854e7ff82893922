//! Abstraction over external command execution for testability.
//!
//! Package manager invocations go through the [`CommandRunner`] trait so that
//! tests can record command lines and script exit codes instead of spawning
//! `apt` or `pacman`.
//!
//! [`RealCommandRunner`] delegates to [`std::process::Command`] with inherited
//! stdio, so the package manager's own output and prompts reach the terminal.

use std::io;
use std::process::{Command, ExitStatus};

/// Trait for abstracting external command execution.
pub trait CommandRunner {
    /// Run a command, inheriting stdio, and return its exit status.
    ///
    /// Blocks until the command exits.
    fn run_status(&self, program: &str, args: &[&str]) -> io::Result<ExitStatus>;

    /// Run a full command line through `sh -c`.
    fn run_shell(&self, command_line: &str) -> io::Result<ExitStatus> {
        self.run_status("sh", &["-c", command_line])
    }
}

/// Production implementation that delegates to [`std::process::Command`].
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run_status(&self, program: &str, args: &[&str]) -> io::Result<ExitStatus> {
        Command::new(program).args(args).status()
    }
}

#[cfg(test)]
pub use mock::MockCommandRunner;

#[cfg(test)]
mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::os::unix::process::ExitStatusExt;

    /// Records every call and answers with scripted exit codes.
    ///
    /// Once the script runs out every command succeeds. A `None` entry
    /// simulates death by signal.
    #[derive(Default)]
    pub struct MockCommandRunner {
        codes: RefCell<VecDeque<Option<i32>>>,
        calls: RefCell<Vec<(String, Vec<String>)>>,
    }

    impl MockCommandRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_exit_codes(codes: impl IntoIterator<Item = Option<i32>>) -> Self {
            Self {
                codes: RefCell::new(codes.into_iter().collect()),
                ..Self::default()
            }
        }

        /// Command lines passed to `sh -c`, in call order.
        pub fn shell_lines(&self) -> Vec<String> {
            self.calls
                .borrow()
                .iter()
                .filter(|(program, args)| program == "sh" && args.len() == 2 && args[0] == "-c")
                .map(|(_, args)| args[1].clone())
                .collect()
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl CommandRunner for MockCommandRunner {
        fn run_status(&self, program: &str, args: &[&str]) -> io::Result<ExitStatus> {
            self.calls.borrow_mut().push((
                program.to_string(),
                args.iter().map(|a| a.to_string()).collect(),
            ));
            let status = match self.codes.borrow_mut().pop_front() {
                Some(Some(code)) => ExitStatus::from_raw(code << 8),
                Some(None) => ExitStatus::from_raw(libc::SIGKILL),
                None => ExitStatus::from_raw(0),
            };
            Ok(status)
        }
    }
}
