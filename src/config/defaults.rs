//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

use std::path::PathBuf;

use crate::network::IpVersion;

/// Default procfs mount point.
pub const PROC_ROOT: &str = "/proc";

/// Default IP version when neither `-4` nor `-6` is given.
pub const IP_VERSION: IpVersion = IpVersion::Both;

/// Default procfs root as a path.
#[must_use]
pub fn proc_root() -> PathBuf {
    PathBuf::from(PROC_ROOT)
}
