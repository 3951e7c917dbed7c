//! Record filtering for selective output.
//!
//! # Design
//!
//! - [`FilterCriteria`] is built once at startup and never mutated afterwards.
//! - Interface names are matched exactly (case-sensitive) through a set lookup.
//! - An active name filter with no names matches nothing; no filter matches all.
//! - Loopback and link-local addresses are excluded unless explicitly included.

use std::collections::HashSet;
use std::fmt;

use super::{AddressRecord, AddressScope, IpVersion};

/// Immutable output filter.
///
/// # Examples
///
/// ```
/// use std::net::Ipv4Addr;
/// use lsaddr::network::{AddressRecord, FilterCriteria, IpVersion};
///
/// let criteria = FilterCriteria::new(IpVersion::V4).with_interfaces(["eth0"]);
///
/// assert!(criteria.matches(&AddressRecord::new("eth0", Ipv4Addr::new(10, 0, 0, 1))));
/// assert!(!criteria.matches(&AddressRecord::new("eth1", Ipv4Addr::new(10, 0, 0, 2))));
/// assert!(!criteria.matches(&AddressRecord::new("eth0", Ipv4Addr::LOCALHOST)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    ip_version: IpVersion,
    include_loopback: bool,
    include_link_local: bool,
    interfaces: Option<HashSet<String>>,
}

impl FilterCriteria {
    /// Creates criteria for `ip_version` with every other option at its default.
    #[must_use]
    pub const fn new(ip_version: IpVersion) -> Self {
        Self {
            ip_version,
            include_loopback: false,
            include_link_local: false,
            interfaces: None,
        }
    }

    /// Sets whether loopback addresses are emitted.
    #[must_use]
    pub const fn include_loopback(mut self, include: bool) -> Self {
        self.include_loopback = include;
        self
    }

    /// Sets whether IPv6 link-local addresses are emitted.
    #[must_use]
    pub const fn include_link_local(mut self, include: bool) -> Self {
        self.include_link_local = include;
        self
    }

    /// Restricts output to the given interface names.
    ///
    /// An empty iterator activates the filter with no names, so nothing matches.
    #[must_use]
    pub fn with_interfaces<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interfaces = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the requested IP version.
    #[must_use]
    pub const fn ip_version(&self) -> IpVersion {
        self.ip_version
    }

    /// Returns true if addresses of `interface` may be emitted.
    #[must_use]
    pub fn matches_interface(&self, interface: &str) -> bool {
        self.interfaces
            .as_ref()
            .is_none_or(|names| names.contains(interface))
    }

    /// Returns true if an address with `scope` passes the inclusion policy.
    #[must_use]
    pub const fn permits_scope(&self, scope: AddressScope) -> bool {
        match scope {
            AddressScope::Loopback => self.include_loopback,
            AddressScope::LinkLocal => self.include_link_local,
            AddressScope::Other => true,
        }
    }

    /// Returns true if `record` should be emitted.
    #[must_use]
    pub fn matches(&self, record: &AddressRecord) -> bool {
        let family_ok = if record.address.is_ipv4() {
            self.ip_version.includes_v4()
        } else {
            self.ip_version.includes_v6()
        };

        family_ok && self.matches_interface(&record.interface) && self.permits_scope(record.scope())
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new(IpVersion::Both)
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interfaces = self.interfaces.as_ref().map_or_else(
            || "all".to_string(),
            |names| {
                let mut names: Vec<&str> = names.iter().map(String::as_str).collect();
                names.sort_unstable();
                format!("[{}]", names.join(", "))
            },
        );

        write!(
            f,
            "Filter {{ ip_version: {}, include_loopback: {}, include_link_local: {}, interfaces: {} }}",
            self.ip_version, self.include_loopback, self.include_link_local, interfaces
        )
    }
}
