// taskchime-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.
//
// The binary takes no arguments of its own; clap still provides --help and
// --version and rejects anything else.

use clap::Parser;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Taskchime: play the task completion sound",
    long_about = "Plays the bundled TASK_COMPLETE_VOICE.wav once using the host's native audio player.\n\
                  Set RUST_LOG=debug to see which player commands are tried."
)]
pub struct Cli {}

/// Parses the process arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parses arguments from an iterator, for tests.
pub fn parse_cli_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
