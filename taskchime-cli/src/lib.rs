//! Library component for the Taskchime CLI application.
//!
//! This contains the argument definition, logging setup and command logic
//! that the binary uses.

/// Command-line interface definition using clap
pub mod cli;

/// Command implementations
pub mod commands;

/// Error handling utilities for the CLI
pub mod error;

/// Logging setup
pub mod logging;

// Re-exports for convenience
pub use cli::{Cli, parse_cli, parse_cli_from};
pub use commands::play::{EXIT_FAILURE, EXIT_SUCCESS, report_result, run, run_play};
