// ============================================================================
// taskchime-core/src/external/runner.rs
// ============================================================================
//
// COMMAND RUNNER: Executing player commands
//
// This module defines the CommandRunner trait through which the dispatcher
// runs every external player, and the default implementation that spawns a
// real process with std::process::Command.
//
// AI-ASSISTANT-INFO: Process execution seam for player commands

// ---- Internal crate imports ----
use super::PlayerCommand;
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::io;
use std::process::{Command, Stdio};

// ============================================================================
// TRAIT
// ============================================================================

/// Executes a single player command to completion.
///
/// Implementations block until the player exits and report success only when
/// the command itself reports success.
pub trait CommandRunner {
    fn run(&self, command: &PlayerCommand) -> CoreResult<()>;
}

// ============================================================================
// SYSTEM IMPLEMENTATION
// ============================================================================

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &PlayerCommand) -> CoreResult<()> {
        log::debug!("Running command: {}", command);

        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    CoreError::PlayerNotFound(command.program.clone())
                } else {
                    CoreError::CommandStart(command.program.clone(), e)
                }
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = single_line(&String::from_utf8_lossy(&output.stderr));
        Err(CoreError::CommandFailed {
            command: command.to_string(),
            // Killed by a signal on unix
            code: output.status.code().unwrap_or(-1),
            stderr,
        })
    }
}

/// Collapses multi-line tool output into one line for diagnostics.
pub(crate) fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}
