//! Configuration layer for lsaddr.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! `-4` / `-6` on the command line replace the TOML `ip_version`. Giving
//! neither anywhere lists both families.
//!
//! Positional interface names **replace** the TOML `interfaces` list entirely
//! (not merged).
//!
//! # Boolean Flag Semantics
//!
//! Boolean flags (`--include-loopback`, `--include-link-local`) use OR semantics:
//! - If set `true` in either CLI or TOML, the result is `true`.
//! - Once set `true` in TOML, CLI cannot override to `false` (flags only enable, not disable).

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::Cli;
pub use error::ConfigError;
pub use toml::{FilterSection, SourcesSection, TomlConfig};
pub use validated::ValidatedConfig;
