// ============================================================================
// taskchime-core/src/dispatch.rs
// ============================================================================
//
// PLAYER DISPATCH: Play the bundled notification sound once
//
// This module ties the pieces together: resolve the asset, build the
// candidate chain for the host platform and run the candidates in order until
// one succeeds.
//
// KEY COMPONENTS:
// - play_notification: Main entry point for playback
// - PlaybackOutcome: Which candidate played the sound
//
// AI-ASSISTANT-INFO: Ordered fallback over platform player commands

// ---- Internal crate imports ----
use crate::config::HostContext;
use crate::error::{CoreError, CoreResult};
use crate::external::{CommandRunner, PlayerCommand, player_chain, render_chain};

// ---- External crate imports ----
use log::{debug, info, warn};

/// Result of a successful playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackOutcome {
    /// The candidate that played the sound.
    pub command: PlayerCommand,
    /// Number of candidates run, including the successful one.
    pub attempts: usize,
}

/// Plays the bundled asset using the player chain for `context.platform`.
///
/// Candidates run one at a time, each to completion, and the first success
/// ends the loop. Nothing is spawned for an unsupported platform.
///
/// # Errors
///
/// * `CoreError::UnsupportedPlatform` - no player is known for the platform
/// * `CoreError::PlaybackFailed` - every candidate failed; the message is the
///   last candidate's error
/// * `CoreError::Io` - the asset path could not be made absolute
pub fn play_notification<R>(context: &HostContext, runner: &R) -> CoreResult<PlaybackOutcome>
where
    R: CommandRunner + ?Sized,
{
    let asset = context.asset_path()?;
    let chain = player_chain(&context.platform, &asset)?;
    debug!("Player chain for {}: {}", context.platform, render_chain(&chain));

    run_chain(&chain, runner)
}

/// Runs `chain` in order and stops at the first command that succeeds.
pub fn run_chain<R>(chain: &[PlayerCommand], runner: &R) -> CoreResult<PlaybackOutcome>
where
    R: CommandRunner + ?Sized,
{
    let mut last_error = None;

    for (index, command) in chain.iter().enumerate() {
        match runner.run(command) {
            Ok(()) => {
                info!("Played notification with {}", command.program);
                return Ok(PlaybackOutcome {
                    command: command.clone(),
                    attempts: index + 1,
                });
            }
            Err(e) => {
                if index + 1 < chain.len() {
                    warn!("{} failed, trying next player: {}", command.program, e);
                } else {
                    warn!("{} failed: {}", command.program, e);
                }
                last_error = Some(e);
            }
        }
    }

    let message = last_error
        .map(|e| e.to_string())
        .unwrap_or_else(|| "no player command to run".to_string());
    Err(CoreError::PlaybackFailed(message))
}
