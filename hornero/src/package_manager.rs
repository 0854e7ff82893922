//! Native package manager adapter.
//!
//! Each supported manager is described by a static [`Profile`]: the command
//! to run, the option strings for update/upgrade/install, and whether it needs
//! `sudo`. [`PackageManager`] turns those into shell command lines and runs
//! them through a [`CommandRunner`].
//!
//! Supporting another manager or distribution means extending [`Manager`],
//! its profile table and [`DISTRO_MANAGERS`].

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::command_runner::CommandRunner;
use crate::error::{HorneroError, Result};
use crate::host::{self, OsRelease};
use crate::output::Output;

/// Prefix used to gain root privileges.
pub const PRIVILEGE_PREFIX: &str = "sudo";

/// Static description of how to invoke one package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    /// Command name, e.g. `apt`
    pub command: &'static str,
    /// Option refreshing the package lists
    pub update_option: &'static str,
    /// Option upgrading installed packages
    pub upgrade_option: &'static str,
    /// Option installing the packages that follow it
    pub install_option: &'static str,
    /// Whether the command must run as root
    pub needs_privilege: bool,
}

impl Profile {
    pub fn option(&self, operation: Operation) -> &'static str {
        match operation {
            Operation::Update => self.update_option,
            Operation::Upgrade => self.upgrade_option,
            Operation::Install => self.install_option,
        }
    }
}

const APT: Profile = Profile {
    command: "apt",
    update_option: "update",
    upgrade_option: "upgrade",
    install_option: "install",
    needs_privilege: true,
};

const PACMAN: Profile = Profile {
    command: "pacman",
    update_option: "-Sy",
    upgrade_option: "-Su",
    install_option: "-S",
    needs_privilege: true,
};

const YAY: Profile = Profile {
    command: "yay",
    update_option: "-Sy",
    upgrade_option: "-Su",
    install_option: "-S",
    needs_privilege: false,
};

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Manager {
    /// APT - Debian/Ubuntu family
    Apt,
    /// Pacman - Arch Linux family
    Pacman,
    /// Yay - AUR helper, runs unprivileged and escalates by itself
    Yay,
}

impl Manager {
    pub const ALL: [Manager; 3] = [Manager::Apt, Manager::Pacman, Manager::Yay];

    pub fn profile(self) -> &'static Profile {
        match self {
            Manager::Apt => &APT,
            Manager::Pacman => &PACMAN,
            Manager::Yay => &YAY,
        }
    }

    pub fn name(self) -> &'static str {
        self.profile().command
    }
}

impl fmt::Display for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Manager {
    type Err = HorneroError;

    fn from_str(name: &str) -> Result<Self> {
        Manager::ALL
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| HorneroError::UnsupportedManager(name.to_string()))
    }
}

/// Distribution identifiers (os-release `ID` or lowercased `NAME`) and the
/// manager used on them.
pub static DISTRO_MANAGERS: &[(&str, Manager)] = &[
    ("arch", Manager::Pacman),
    ("arch linux", Manager::Pacman),
    ("manjaro", Manager::Pacman),
    ("manjaro linux", Manager::Pacman),
    ("endeavouros", Manager::Pacman),
    ("debian", Manager::Apt),
    ("ubuntu", Manager::Apt),
    ("linuxmint", Manager::Apt),
    ("pop", Manager::Apt),
];

/// Look up the manager for a single distribution identifier.
pub fn manager_for_distro(distro: &str) -> Option<Manager> {
    DISTRO_MANAGERS
        .iter()
        .find(|(id, _)| *id == distro)
        .map(|(_, manager)| *manager)
}

/// Pick the manager for a detected distribution.
pub fn guess_manager(release: Option<&OsRelease>) -> Result<Manager> {
    let Some(release) = release else {
        return Err(HorneroError::UndetectableManager(
            "no os-release information".to_string(),
        ));
    };

    release
        .lookup_keys()
        .iter()
        .find_map(|key| manager_for_distro(key))
        .ok_or_else(|| HorneroError::UndetectableManager(release.label().to_string()))
}

/// Resolve the manager to use: the explicit name if given, otherwise the one
/// matching the host distribution.
pub fn resolve(name: Option<&str>) -> Result<Manager> {
    match name {
        Some(name) => {
            let manager = name.parse()?;
            tracing::debug!(%manager, "Package manager selected by flag");
            Ok(manager)
        }
        None => {
            let release = OsRelease::detect();
            let manager = guess_manager(release.as_ref())?;
            tracing::debug!(%manager, ?release, "Package manager detected from distribution");
            Ok(manager)
        }
    }
}

/// Logical package manager operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Update,
    Upgrade,
    Install,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Update => write!(f, "update"),
            Operation::Upgrade => write!(f, "upgrade"),
            Operation::Install => write!(f, "install"),
        }
    }
}

/// Build a shell command line: optional `sudo`, the command, the option and
/// the packages, separated by single spaces.
///
/// `sudo` is only added when the profile needs privileges and the process is
/// not already `elevated`. Each package is shell-quoted, so plain names stay
/// as they are and anything else reaches the package manager as one argument.
pub fn build_command<S: AsRef<str>>(
    profile: &Profile,
    option: &str,
    packages: &[S],
    elevated: bool,
) -> String {
    let mut parts: Vec<Cow<'_, str>> = Vec::with_capacity(packages.len() + 3);
    if profile.needs_privilege && !elevated {
        parts.push(Cow::Borrowed(PRIVILEGE_PREFIX));
    }
    parts.push(Cow::Borrowed(profile.command));
    if !option.is_empty() {
        parts.push(Cow::Borrowed(option));
    }
    for package in packages {
        let package = package.as_ref();
        // Only a NUL byte fails to quote, and `sh` can't be spawned with one.
        parts.push(shlex::try_quote(package).unwrap_or_else(|_| package.into()));
    }
    parts.join(" ")
}

/// What has been done to the system during this run.
///
/// Operations are independent: installing does not require updating or
/// upgrading first. A flag is only set after its command exits successfully.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub lists_updated: bool,
    pub upgraded: bool,
    pub installed: bool,
}

impl SessionState {
    /// Nothing has run yet.
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// A package manager bound to a command runner for one run.
pub struct PackageManager<'r> {
    manager: Manager,
    elevated: bool,
    dry_run: bool,
    runner: &'r dyn CommandRunner,
    state: SessionState,
}

impl<'r> PackageManager<'r> {
    pub fn new(manager: Manager, runner: &'r dyn CommandRunner) -> Self {
        Self {
            manager,
            elevated: host::is_elevated(),
            dry_run: false,
            runner,
            state: SessionState::default(),
        }
    }

    /// Override privilege detection.
    pub fn with_elevated(mut self, elevated: bool) -> Self {
        self.elevated = elevated;
        self
    }

    /// Print command lines instead of running them.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn manager(&self) -> Manager {
        self.manager
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Command line for an operation.
    pub fn command_line<S: AsRef<str>>(&self, operation: Operation, packages: &[S]) -> String {
        let profile = self.manager.profile();
        build_command(profile, profile.option(operation), packages, self.elevated)
    }

    /// Refresh the package lists.
    pub fn update(&mut self) -> Result<()> {
        if self.run(Operation::Update, &[] as &[&str])? {
            self.state.lists_updated = true;
        }
        Ok(())
    }

    /// Upgrade installed packages.
    pub fn upgrade(&mut self) -> Result<()> {
        if self.run(Operation::Upgrade, &[] as &[&str])? {
            self.state.upgraded = true;
        }
        Ok(())
    }

    /// Install `packages`. An empty list runs nothing.
    pub fn install<S: AsRef<str>>(&mut self, packages: &[S]) -> Result<()> {
        if packages.is_empty() {
            tracing::warn!("install called with an empty package list");
            Output::warning("No packages selected, nothing to install");
            return Ok(());
        }
        if self.run(Operation::Install, packages)? {
            self.state.installed = true;
        }
        Ok(())
    }

    /// Run an operation. Returns whether the command actually executed.
    fn run<S: AsRef<str>>(&self, operation: Operation, packages: &[S]) -> Result<bool> {
        let command = self.command_line(operation, packages);

        if self.dry_run {
            Output::dry_run(format!("Would run: {command}"));
            return Ok(false);
        }

        Output::running(&command);
        tracing::debug!(%operation, %command, "Executing package manager");
        self.execute(&command)?;
        Ok(true)
    }

    /// Run a command line through the shell, failing on a non-zero exit.
    ///
    /// Not retried; whatever the package manager left behind stays.
    pub fn execute(&self, command_line: &str) -> Result<()> {
        let status = self
            .runner
            .run_shell(command_line)
            .map_err(|source| HorneroError::Spawn {
                command: command_line.to_string(),
                source,
            })?;

        if !status.success() {
            tracing::debug!(code = ?status.code(), "Package manager failed");
            return Err(HorneroError::Subprocess {
                command: command_line.to_string(),
                code: status.code(),
            });
        }
        Ok(())
    }
}
