//! Platform-specific implementations of the capability traits.
//!
//! # Platform Support
//!
//! - **Linux / Android**: procfs tables ([`ProcFs`]) and `ioctl` queries on a
//!   datagram socket ([`IoctlSocket`]).
//! - **Other targets**: not supported; the binary reports a runtime error.

use thiserror::Error;

#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux;

#[cfg(any(target_os = "linux", target_os = "android"))]
pub use linux::{IF_INET6_PATH, IoctlSocket, NET_DEV_PATH, ProcFs};

/// Error type for acquiring platform resources.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The query socket could not be created.
    #[error("could not open socket for interface queries: {0}")]
    Socket(#[source] std::io::Error),

    /// The current target has no implementation.
    #[error("unsupported platform: {0}")]
    Unsupported(&'static str),
}
