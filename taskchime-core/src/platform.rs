//! Host platform detection.
//!
//! The player command depends only on which family of operating system we are
//! running on. Every identifier we do not recognise is kept verbatim in
//! [`Platform::Other`] so it can be reported back to the user.

use std::env;
use std::fmt;

/// Operating system family used to choose a player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
    /// Any identifier without a known player. Holds the raw identifier.
    Other(String),
}

impl Platform {
    /// Returns the platform the binary was compiled for.
    #[must_use]
    pub fn current() -> Self {
        Self::from_identifier(env::consts::OS)
    }

    /// Maps an OS identifier onto a platform.
    ///
    /// Accepts both the Rust target names (`windows`, `macos`, `linux`) and
    /// the names other runtimes report for the same systems (`win32`,
    /// `darwin`). Matching is exact.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "windows" | "win32" => Platform::Windows,
            "macos" | "darwin" => Platform::MacOS,
            "linux" => Platform::Linux,
            other => Platform::Other(other.to_string()),
        }
    }

    /// Canonical identifier for this platform.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOS => "macos",
            Platform::Linux => "linux",
            Platform::Other(identifier) => identifier,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
