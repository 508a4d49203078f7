//! Main entry point for the Taskchime CLI application.
//!
//! Parses arguments, sets up logging, detects the host and plays the
//! notification sound once. The process exits with 0 on success and 1 on any
//! failure.

use taskchime::error::CliErrorContext;
use taskchime::logging::init_logging;
use taskchime::{parse_cli, report_result, run};
use taskchime_core::{HostContext, SystemCommandRunner};

use std::io;
use std::process;

fn main() {
    let _cli = parse_cli();
    init_logging();

    let mut stderr = io::stderr();
    let code = match HostContext::detect().cli_context("Failed to locate installation directory") {
        Ok(context) => run(&context, &SystemCommandRunner, &mut stderr),
        Err(e) => report_result(Err(e), &mut stderr),
    };

    process::exit(code);
}
