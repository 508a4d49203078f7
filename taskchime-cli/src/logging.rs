// ============================================================================
// taskchime-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the CLI
//
// The application logs through the standard `log` crate with `env_logger` as
// the backend. Logging is off unless RUST_LOG asks for it, so a successful
// run writes nothing to stderr:
// - RUST_LOG=warn: Report each player that failed before a fallback
// - RUST_LOG=info: Also report which player played the sound
// - RUST_LOG=debug: Platform, asset path and every command tried
//
// AI-ASSISTANT-INFO: Logging initialization for the CLI

use env_logger::Env;

/// Filter used when RUST_LOG is unset.
pub const DEFAULT_LOG_FILTER: &str = "off";

/// Initializes the global logger. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format_timestamp(None)
        .try_init();
}
