//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific action.

/// Module containing the implementation of the play action.
/// This plays the bundled notification sound once.
pub mod play;
