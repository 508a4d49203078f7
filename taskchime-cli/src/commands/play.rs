//! Implementation of the default play action.
//!
//! Runs the core dispatcher once and turns its result into the process exit
//! code: silent success, or a single diagnostic line and exit code 1.

use crate::error::CliResult;

use taskchime_core::{CommandRunner, HostContext, play_notification};

use console::style;
use log::{debug, info};
use std::io::Write;

/// Exit code for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for an unsupported platform or a failed player.
pub const EXIT_FAILURE: i32 = 1;

/// Plays the notification sound for `context` through `runner`.
pub fn run_play<R>(context: &HostContext, runner: &R) -> CliResult<()>
where
    R: CommandRunner + ?Sized,
{
    debug!(
        "Playing notification on {} from {}",
        context.platform,
        context.install_dir.display()
    );

    let outcome = play_notification(context, runner)?;
    info!(
        "Notification played after {} attempt(s): {}",
        outcome.attempts, outcome.command
    );
    Ok(())
}

/// Writes the diagnostic for a failed run to `stderr` and returns the exit code.
///
/// Nothing is written on success.
pub fn report_result<W: Write>(result: CliResult<()>, stderr: &mut W) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            // A broken stderr leaves nothing else to report to
            let _ = writeln!(stderr, "{} {}", style("Error:").red().bold().for_stderr(), e);
            let _ = stderr.flush();
            EXIT_FAILURE
        }
    }
}

/// Runs the play action and reports its outcome. Returns the exit code.
pub fn run<R, W>(context: &HostContext, runner: &R, stderr: &mut W) -> i32
where
    R: CommandRunner + ?Sized,
    W: Write,
{
    report_result(run_play(context, runner), stderr)
}
