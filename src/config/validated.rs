//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::PathBuf;

use crate::network::{FilterCriteria, IpVersion};

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // Mirrors the CLI flags
pub struct ValidatedConfig {
    /// IP version(s) to list
    pub ip_version: IpVersion,

    /// Emit loopback addresses
    pub include_loopback: bool,

    /// Emit IPv6 link-local addresses
    pub include_link_local: bool,

    /// Explicit interface names (empty = all interfaces)
    pub interfaces: Vec<String>,

    /// Only list interface names, then exit
    pub list_interfaces: bool,

    /// Root of the procfs mount
    pub proc_root: PathBuf,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interfaces = if self.interfaces.is_empty() {
            "all".to_string()
        } else {
            format!("[{}]", self.interfaces.join(", "))
        };

        write!(
            f,
            "Config {{ ip_version: {}, include_loopback: {}, include_link_local: {}, \
             interfaces: {}, list_interfaces: {}, proc_root: {} }}",
            self.ip_version,
            self.include_loopback,
            self.include_link_local,
            interfaces,
            self.list_interfaces,
            self.proc_root.display(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML `ip_version` is not a recognized value.
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let ip_version = Self::resolve_ip_version(cli, toml)?;

        // Boolean flags only enable: true in either source wins
        let include_loopback = cli.include_loopback || toml.is_some_and(|t| t.filter.include_loopback);
        let include_link_local =
            cli.include_link_local || toml.is_some_and(|t| t.filter.include_link_local);

        let interfaces = Self::resolve_interfaces(cli, toml);
        let proc_root = Self::resolve_proc_root(cli, toml);

        Ok(Self {
            ip_version,
            include_loopback,
            include_link_local,
            interfaces,
            list_interfaces: cli.list_interfaces,
            proc_root,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Returns true if explicit interface names were given.
    #[must_use]
    pub fn interfaces_specified(&self) -> bool {
        !self.interfaces.is_empty()
    }

    /// Builds the output filter.
    ///
    /// `valid` is the set of interfaces that passed validation; `None` means
    /// no restriction.
    #[must_use]
    pub fn filter_criteria(&self, valid: Option<&[String]>) -> FilterCriteria {
        let criteria = FilterCriteria::new(self.ip_version)
            .include_loopback(self.include_loopback)
            .include_link_local(self.include_link_local);

        match valid {
            Some(names) => criteria.with_interfaces(names.iter().cloned()),
            None => criteria,
        }
    }

    fn resolve_ip_version(cli: &Cli, toml: Option<&TomlConfig>) -> Result<IpVersion, ConfigError> {
        // CLI takes precedence
        if cli.ip_version_specified() {
            return Ok(IpVersion::from_flags(cli.ipv4, cli.ipv6));
        }

        // Fall back to TOML
        if let Some(version_str) = toml.and_then(|t| t.filter.ip_version.as_deref()) {
            return parse_ip_version(version_str);
        }

        Ok(defaults::IP_VERSION)
    }

    fn resolve_interfaces(cli: &Cli, toml: Option<&TomlConfig>) -> Vec<String> {
        // CLI names replace TOML names entirely
        if !cli.interfaces.is_empty() {
            return cli.interfaces.clone();
        }

        toml.map(|t| t.filter.interfaces.clone()).unwrap_or_default()
    }

    fn resolve_proc_root(cli: &Cli, toml: Option<&TomlConfig>) -> PathBuf {
        cli.proc_root
            .clone()
            .or_else(|| toml.and_then(|t| t.sources.proc_root.clone()))
            .unwrap_or_else(defaults::proc_root)
    }
}

// Helper functions

fn parse_ip_version(s: &str) -> Result<IpVersion, ConfigError> {
    match s.to_lowercase().as_str() {
        "ipv4" | "v4" | "4" => Ok(IpVersion::V4),
        "ipv6" | "v6" | "6" => Ok(IpVersion::V6),
        "both" | "all" | "dual" => Ok(IpVersion::Both),
        _ => Err(ConfigError::InvalidIpVersion {
            value: s.to_string(),
        }),
    }
}
