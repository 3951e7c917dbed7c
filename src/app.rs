//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use lsaddr::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0), including runs that match no addresses.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - unreadable or invalid config file.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - unreadable system tables, socket failure, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::InvalidIpVersion { .. } => {
            eprintln!("\nAccepted values: \"ipv4\"/\"v4\"/\"4\", \"ipv6\"/\"v6\"/\"6\", \"both\"/\"all\"/\"dual\".");
        }
        ConfigError::TomlParse(_) => {
            eprintln!("\nKnown sections are [filter] and [sources].");
        }
        ConfigError::FileRead { .. } => {}
    }
}

/// Sets up the tracing subscriber for diagnostics on standard error.
///
/// Standard output is reserved for addresses.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
