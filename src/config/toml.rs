//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Output filter configuration
    #[serde(default)]
    pub filter: FilterSection,

    /// Data source configuration
    #[serde(default)]
    pub sources: SourcesSection,
}

/// Output filter configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSection {
    /// IP version to list: "ipv4", "ipv6", or "both"
    pub ip_version: Option<String>,

    /// Include loopback addresses
    #[serde(default)]
    pub include_loopback: bool,

    /// Include IPv6 link-local addresses
    #[serde(default)]
    pub include_link_local: bool,

    /// Interfaces to restrict output to (empty = all)
    #[serde(default)]
    pub interfaces: Vec<String>,
}

/// Data source configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesSection {
    /// Root of the procfs mount
    pub proc_root: Option<PathBuf>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}
