// ============================================================================
// taskchime-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the host's audio player executables
//
// This module encapsulates everything that touches external command-line
// players: describing an invocation, building the per-platform candidate
// chain, and running commands through an injectable runner.
//
// KEY COMPONENTS:
// - PlayerCommand: A single external invocation (program + arguments)
// - player_chain: Ordered candidate commands for a platform
// - CommandRunner: Trait for executing a PlayerCommand
// - SystemCommandRunner: std::process implementation of CommandRunner
//
// DESIGN PHILOSOPHY:
// This module follows the dependency injection pattern, allowing consumers to
// provide their own CommandRunner for testing. Command construction is pure
// and never spawns anything.

// ---- Internal crate imports ----
use crate::config::{
    LINUX_ALSA_PLAYER, LINUX_MEDIA_PLAYER, LINUX_MEDIA_PLAYER_FLAGS, LINUX_PULSE_PLAYER,
    MACOS_PLAYER, WINDOWS_SHELL,
};
use crate::error::{CoreError, CoreResult};
use crate::platform::Platform;

// ---- Standard library imports ----
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains the CommandRunner trait and its process-backed implementation
pub mod runner;

/// Mock CommandRunner for tests
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use runner::{CommandRunner, SystemCommandRunner};

// ============================================================================
// PLAYER COMMAND
// ============================================================================

/// One external player invocation.
///
/// Arguments are OS strings so the asset path reaches the player byte for
/// byte, even when it is not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCommand {
    pub program: String,
    pub args: Vec<OsString>,
}

impl PlayerCommand {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for PlayerCommand {
    /// Renders the command the way it would be typed into a shell: flags bare,
    /// operands double-quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.starts_with('-') {
                write!(f, " {}", arg)?;
            } else {
                write!(f, " \"{}\"", arg)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// COMMAND CONSTRUCTION
// ============================================================================

/// Builds the ordered list of player commands to try for `platform`.
///
/// Windows and macOS have a single candidate. Linux has three, tried in
/// order: PulseAudio, ALSA, then ffplay in headless auto-exit mode.
///
/// # Errors
///
/// * `CoreError::UnsupportedPlatform` - for [`Platform::Other`]
pub fn player_chain(platform: &Platform, asset: &Path) -> CoreResult<Vec<PlayerCommand>> {
    let file = asset.as_os_str();

    let chain = match platform {
        Platform::Windows => {
            let mut script = OsString::from("(New-Object Media.SoundPlayer '");
            script.push(file);
            script.push("').PlaySync()");
            vec![PlayerCommand::new(WINDOWS_SHELL, [OsString::from("-c"), script])]
        }
        Platform::MacOS => vec![PlayerCommand::new(MACOS_PLAYER, [file])],
        Platform::Linux => vec![
            PlayerCommand::new(LINUX_PULSE_PLAYER, [file]),
            PlayerCommand::new(LINUX_ALSA_PLAYER, [file]),
            PlayerCommand::new(
                LINUX_MEDIA_PLAYER,
                LINUX_MEDIA_PLAYER_FLAGS
                    .iter()
                    .map(|&flag| OsStr::new(flag))
                    .chain(std::iter::once(file)),
            ),
        ],
        Platform::Other(identifier) => {
            return Err(CoreError::UnsupportedPlatform(identifier.clone()));
        }
    };

    Ok(chain)
}

/// Renders a candidate chain as a single shell line joined with `||`.
pub fn render_chain(chain: &[PlayerCommand]) -> String {
    chain
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" || ")
}
