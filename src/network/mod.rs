//! Network layer for discovering interfaces and their addresses.
//!
//! This module provides types and functions for:
//! - Representing addresses and requested versions ([`AddressRecord`], [`IpVersion`])
//! - Abstracting the system data sources ([`InterfaceSource`], [`InterfaceProbe`])
//! - Listing interfaces ([`list_interfaces`])
//! - Validating interface names ([`validate_interfaces`])
//! - Filtering and resolving addresses ([`FilterCriteria`], [`Resolver`])
//! - Platform-specific implementations ([`platform`])

mod address;
pub mod filter;
mod listing;
pub mod platform;
mod resolve;
mod source;
mod validate;

#[cfg(test)]
mod test_fixtures;

pub use address::{
    AddressRecord, AddressScope, IpVersion, expand_ipv6, expand_packed_ipv6, parse_packed_ipv6,
};
pub use filter::FilterCriteria;
pub use listing::{HEADER_LINES, ListError, list_interfaces, parse_net_dev};
pub use resolve::{ResolveError, Resolver, Summary, parse_if_inet6};
pub use source::{InterfaceProbe, InterfaceSource, Ipv4Entry};
pub use validate::{MAX_NAME_LEN, Rejection, Validation, validate_interfaces};
