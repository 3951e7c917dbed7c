//! Capability traits for the two system data sources.

use std::io;
use std::net::Ipv4Addr;

/// One entry of the bulk IPv4 interface configuration table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv4Entry {
    /// Interface name as reported by the kernel.
    pub interface: String,
    /// Address assigned to the interface.
    pub address: Ipv4Addr,
}

impl Ipv4Entry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(interface: impl Into<String>, address: Ipv4Addr) -> Self {
        Self {
            interface: interface.into(),
            address,
        }
    }
}

/// Static, text-based view of the system's interfaces.
///
/// # Design
///
/// - Implementations return the raw table text; parsing is done by the caller
/// - Enables dependency injection for testing with in-memory tables
/// - The Linux implementation reads `/proc/net/dev` and `/proc/net/if_inet6`
///
/// # Example
///
/// ```
/// use std::io;
/// use lsaddr::network::InterfaceSource;
///
/// struct FixedSource;
///
/// impl InterfaceSource for FixedSource {
///     fn net_dev(&self) -> io::Result<String> {
///         Ok("header\nheader\n  lo: 0 0\n".to_string())
///     }
///
///     fn if_inet6(&self) -> io::Result<String> {
///         Ok(String::new())
///     }
/// }
///
/// assert!(FixedSource.net_dev().unwrap().contains("lo:"));
/// ```
pub trait InterfaceSource {
    /// Returns the interface listing table.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the table cannot be read.
    fn net_dev(&self) -> io::Result<String>;

    /// Returns the IPv6 address table.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the table cannot be read.
    fn if_inet6(&self) -> io::Result<String>;
}

/// Live view of the system's networking layer.
pub trait InterfaceProbe {
    /// Checks that an interface currently exists and returns its index.
    ///
    /// # Errors
    ///
    /// Returns the OS error reported for the interface (typically `ENODEV`).
    fn probe(&self, name: &str) -> io::Result<u32>;

    /// Returns every (interface, IPv4 address) pair currently configured.
    ///
    /// The table is not guaranteed to be a consistent snapshot if interfaces
    /// change while it is being read.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the bulk query fails.
    fn ipv4_table(&self) -> io::Result<Vec<Ipv4Entry>>;
}

impl<T: InterfaceSource + ?Sized> InterfaceSource for &T {
    fn net_dev(&self) -> io::Result<String> {
        (**self).net_dev()
    }

    fn if_inet6(&self) -> io::Result<String> {
        (**self).if_inet6()
    }
}

impl<T: InterfaceProbe + ?Sized> InterfaceProbe for &T {
    fn probe(&self, name: &str) -> io::Result<u32> {
        (**self).probe(name)
    }

    fn ipv4_table(&self) -> io::Result<Vec<Ipv4Entry>> {
        (**self).ipv4_table()
    }
}
