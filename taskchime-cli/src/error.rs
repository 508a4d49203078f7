// ============================================================================
// taskchime-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias and context for startup failures
//
// Every failure the binary reports is a CoreError, so report_result can print
// it as one line and exit 1. The only fallible step outside the core library
// is locating the executable, and cli_context prefixes that error with what
// the CLI was trying to do.
//
// AI-ASSISTANT-INFO: CLI error handling utilities

// ---- Internal crate imports ----
use taskchime_core::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::fmt;

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Result of a CLI step. Shares CoreError so play failures and startup
/// failures go through the same reporting path.
pub type CliResult<T> = CoreResult<T>;

// ============================================================================
// ERROR CONVERSION UTILITIES
// ============================================================================

/// Prefixes an error with a description of the failed step.
///
/// `main` uses this on `HostContext::detect` so a missing executable path
/// reads as "Failed to locate installation directory: ...".
pub trait CliErrorContext<T> {
    /// Wraps the error as `CoreError::OperationFailed("<context>: <error>")`.
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| {
            let core_error: CoreError = e.into();
            CoreError::OperationFailed(format!("{}: {}", context, core_error))
        })
    }
}
