//! Core library for playing the task completion sound with the host's native
//! audio player.
//!
//! This crate detects the platform, resolves the bundled sound next to the
//! installed executable and runs the platform's player commands, falling back
//! through alternatives where the platform has more than one.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use taskchime_core::{HostContext, SystemCommandRunner, play_notification};
//!
//! let context = HostContext::detect().unwrap();
//! let outcome = play_notification(&context, &SystemCommandRunner).unwrap();
//! println!("played with {}", outcome.command.program);
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod external;
pub mod platform;

// Re-exports for public API
pub use config::{ASSET_FILE_NAME, HostContext, resolve_asset_path};
pub use dispatch::{PlaybackOutcome, play_notification, run_chain};
pub use error::{CoreError, CoreResult};
pub use external::{CommandRunner, PlayerCommand, SystemCommandRunner, player_chain, render_chain};
pub use platform::Platform;
