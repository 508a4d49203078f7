// ============================================================================
// taskchime-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom error types for taskchime-core
//
// This module defines the error types used throughout the core library.
// It uses thiserror for deriving Display and Error implementations.
//
// KEY COMPONENTS:
// - CoreError: Enum of all possible errors in the library
// - CoreResult: Type alias for Result<T, CoreError>
//
// The first two variants are fatal outcomes reported to the user. The
// command-level variants describe a single player attempt and are folded into
// PlaybackFailed by the dispatcher once every candidate has failed.

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::io;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Custom error type for the taskchime-core library.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The host OS identifier is not one we know how to play audio on.
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// Every candidate player command failed. Carries the last error text.
    #[error("Audio playback failed: {0}")]
    PlaybackFailed(String),

    /// The player executable could not be found on PATH.
    #[error("Player '{0}' not found")]
    PlayerNotFound(String),

    /// The player executable exists but the process could not be started.
    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    /// The player ran and exited unsuccessfully.
    #[error("Command '{command}' failed with exit code {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic failure with a context message, used by the CLI.
    #[error("{0}")]
    OperationFailed(String),
}

/// Type alias for Result with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
