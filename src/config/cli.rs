//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options.

use std::path::PathBuf;

use clap::Parser;

/// lsaddr: list local interface addresses
///
/// Prints the IPv4 and IPv6 addresses assigned to the network interfaces
/// of this host, one per line.
#[derive(Debug, Parser)]
#[command(name = "lsaddr")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Interfaces to list addresses for (default: all)
    #[arg(value_name = "INTERFACE")]
    pub interfaces: Vec<String>,

    /// List IPv4 addresses
    #[arg(short = '4', long = "ipv4")]
    pub ipv4: bool,

    /// List IPv6 addresses
    #[arg(short = '6', long = "ipv6")]
    pub ipv6: bool,

    /// Include addresses for the loopback interface
    #[arg(long = "include-loopback")]
    pub include_loopback: bool,

    /// Include IPv6 link-local addresses
    #[arg(long = "include-link-local")]
    pub include_link_local: bool,

    /// List interfaces and exit
    #[arg(long = "list-interfaces")]
    pub list_interfaces: bool,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Root of the procfs mount
    #[arg(long = "proc-root", value_name = "PATH")]
    pub proc_root: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if an IP version flag was given.
    #[must_use]
    pub const fn ip_version_specified(&self) -> bool {
        self.ipv4 || self.ipv6
    }
}
