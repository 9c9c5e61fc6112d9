//! settings-control: effective settings inspector
//!
//! Entry point for the settings-control application.

use settings_control::config::Cli;
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, setup_tracing};
use run::Session;

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    let session = Session::from_cli(&cli);
    let mut stdout = std::io::stdout().lock();

    match run::execute(&cli.command, &session, &mut stdout) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_usage() {
                exit_code::USAGE_ERROR
            } else {
                exit_code::io_error()
            }
        }
    }
}
