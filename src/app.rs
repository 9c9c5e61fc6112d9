//! Application startup and utilities.
//!
//! This module contains exit codes and tracing setup that support the main
//! entry point.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Usage error (exit code 1) - unknown setting, bad value, refused overwrite.
    pub const USAGE_ERROR: ExitCode = ExitCode::FAILURE;

    /// I/O error (exit code 2) - settings file or output could not be written.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn io_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
