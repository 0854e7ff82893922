//! Host detection: distribution identity and privilege level.

use std::fs;
use std::path::PathBuf;

/// Default location of the os-release file.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Environment variable overriding [`OS_RELEASE_PATH`].
pub const OS_RELEASE_ENV: &str = "HORNERO_OS_RELEASE";

/// Identity fields parsed from an os-release file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsRelease {
    /// `ID=` field, e.g. `arch` or `ubuntu`
    pub id: String,
    /// `NAME=` field, e.g. `Manjaro Linux`
    pub name: String,
}

impl OsRelease {
    /// Read the os-release file of the running system.
    ///
    /// Returns `None` if the file is missing or unreadable.
    pub fn detect() -> Option<Self> {
        let path = std::env::var_os(OS_RELEASE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(OS_RELEASE_PATH));

        match fs::read_to_string(&path) {
            Ok(content) => Some(Self::parse(&content)),
            Err(e) => {
                tracing::debug!("Could not read {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Parse os-release content. Unknown keys and comments are ignored.
    pub fn parse(content: &str) -> Self {
        let mut release = Self::default();
        for line in content.lines() {
            let line = line.trim();
            if let Some(val) = line.strip_prefix("ID=") {
                release.id = unquote(val).to_string();
            } else if let Some(val) = line.strip_prefix("NAME=") {
                release.name = unquote(val).to_string();
            }
        }
        release
    }

    /// Identifiers to look up, most specific first.
    pub fn lookup_keys(&self) -> Vec<String> {
        [&self.id, &self.name]
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
            .collect()
    }

    /// Short label for messages.
    pub fn label(&self) -> &str {
        if !self.id.is_empty() {
            &self.id
        } else if !self.name.is_empty() {
            &self.name
        } else {
            "unknown"
        }
    }
}

fn unquote(val: &str) -> &str {
    val.trim().trim_matches(|c| c == '"' || c == '\'')
}

/// Whether the current process runs with root privileges.
pub fn is_elevated() -> bool {
    // SAFETY: geteuid is always safe to call
    unsafe { libc::geteuid() == 0 }
}
