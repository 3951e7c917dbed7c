//! Core network types for address representation.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::net::{IpAddr, Ipv6Addr};

/// IP version(s) requested for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpVersion {
    /// IPv4 addresses only.
    V4,
    /// IPv6 addresses only.
    V6,
    /// Both IPv4 and IPv6 addresses.
    Both,
}

impl IpVersion {
    /// Returns true if this version includes IPv4.
    #[must_use]
    pub const fn includes_v4(self) -> bool {
        matches!(self, Self::V4 | Self::Both)
    }

    /// Returns true if this version includes IPv6.
    #[must_use]
    pub const fn includes_v6(self) -> bool {
        matches!(self, Self::V6 | Self::Both)
    }

    /// Builds the requested version from the additive `-4` / `-6` flags.
    ///
    /// Neither flag set means both families.
    #[must_use]
    pub const fn from_flags(ipv4: bool, ipv6: bool) -> Self {
        match (ipv4, ipv6) {
            (true, false) => Self::V4,
            (false, true) => Self::V6,
            _ => Self::Both,
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
            Self::Both => write!(f, "Both"),
        }
    }
}

/// Scope classification used by the loopback / link-local policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressScope {
    /// `127.0.0.0/8` or `::1`.
    Loopback,
    /// `fe80::/10`.
    LinkLocal,
    /// Anything else.
    Other,
}

impl AddressScope {
    /// Classifies an address.
    ///
    /// IPv6 classification looks at the eight 16-bit groups: loopback is
    /// seven `0000` groups followed by `0001`, link-local is a first group
    /// in `fe80..=febf`.
    #[must_use]
    pub const fn of(address: &IpAddr) -> Self {
        match address {
            IpAddr::V4(v4) => {
                if v4.octets()[0] == 127 {
                    Self::Loopback
                } else {
                    Self::Other
                }
            }
            IpAddr::V6(v6) => {
                let groups = v6.segments();
                if groups[0] >= 0xfe80 && groups[0] <= 0xfebf {
                    Self::LinkLocal
                } else if u128::from_be_bytes(v6.octets()) == 1 {
                    Self::Loopback
                } else {
                    Self::Other
                }
            }
        }
    }
}

/// A single address assigned to an interface.
///
/// Display renders the output form: dotted-decimal for IPv4 and eight
/// colon-separated 4-digit hex groups for IPv6, never zero-compressed.
/// Records read from the packed kernel form keep the table's hex digits
/// literally. Equality and hashing look at the interface and the address
/// only, so the same address is a duplicate whatever its digit case.
#[derive(Debug, Clone)]
pub struct AddressRecord {
    /// Name of the interface the address belongs to.
    pub interface: String,
    /// The address itself.
    pub address: IpAddr,
    text: String,
}

impl AddressRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(interface: impl Into<String>, address: impl Into<IpAddr>) -> Self {
        let address = address.into();
        let text = match address {
            IpAddr::V4(v4) => v4.to_string(),
            IpAddr::V6(v6) => expand_ipv6(&v6),
        };
        Self {
            interface: interface.into(),
            address,
            text,
        }
    }

    /// Creates a record from a packed 32-hex-digit IPv6 address.
    ///
    /// Returns `None` if `hex` is not exactly 32 hex digits.
    #[must_use]
    pub fn from_packed_ipv6(interface: impl Into<String>, hex: &str) -> Option<Self> {
        let address = parse_packed_ipv6(hex)?;
        let text = expand_packed_ipv6(hex)?;
        Some(Self {
            interface: interface.into(),
            address: IpAddr::V6(address),
            text,
        })
    }

    /// Returns the scope of the address.
    #[must_use]
    pub const fn scope(&self) -> AddressScope {
        AddressScope::of(&self.address)
    }
}

impl PartialEq for AddressRecord {
    fn eq(&self, other: &Self) -> bool {
        self.interface == other.interface && self.address == other.address
    }
}

impl Eq for AddressRecord {}

impl Hash for AddressRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.interface.hash(state);
        self.address.hash(state);
    }
}

impl fmt::Display for AddressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Formats an IPv6 address as eight zero-padded hex groups joined by `:`.
#[must_use]
pub fn expand_ipv6(address: &Ipv6Addr) -> String {
    let groups: Vec<String> = address
        .segments()
        .iter()
        .map(|group| format!("{group:04x}"))
        .collect();
    groups.join(":")
}

/// Parses the packed 32-hex-digit form used by `/proc/net/if_inet6`.
///
/// Returns `None` unless the input is exactly 32 ASCII hex digits.
#[must_use]
pub fn parse_packed_ipv6(hex: &str) -> Option<Ipv6Addr> {
    if hex.len() != 32 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u128::from_str_radix(hex, 16).ok().map(Ipv6Addr::from)
}

/// Rewrites a packed 32-hex-digit address as colon-separated groups.
///
/// The input's hex digits are kept literally: the string is cut into eight
/// 4-digit groups and joined with `:`.
#[must_use]
pub fn expand_packed_ipv6(hex: &str) -> Option<String> {
    parse_packed_ipv6(hex)?;
    let groups: Vec<&str> = (0..8).map(|i| &hex[i * 4..i * 4 + 4]).collect();
    Some(groups.join(":"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    mod ip_version {
        use super::*;

        #[test]
        fn v4_includes_only_v4() {
            assert!(IpVersion::V4.includes_v4());
            assert!(!IpVersion::V4.includes_v6());
        }

        #[test]
        fn v6_includes_only_v6() {
            assert!(!IpVersion::V6.includes_v4());
            assert!(IpVersion::V6.includes_v6());
        }

        #[test]
        fn both_includes_both() {
            assert!(IpVersion::Both.includes_v4());
            assert!(IpVersion::Both.includes_v6());
        }

        #[test]
        fn from_flags_is_additive() {
            assert_eq!(IpVersion::from_flags(true, false), IpVersion::V4);
            assert_eq!(IpVersion::from_flags(false, true), IpVersion::V6);
            assert_eq!(IpVersion::from_flags(true, true), IpVersion::Both);
            assert_eq!(IpVersion::from_flags(false, false), IpVersion::Both);
        }

        #[test]
        fn display_formats_correctly() {
            assert_eq!(format!("{}", IpVersion::V4), "IPv4");
            assert_eq!(format!("{}", IpVersion::V6), "IPv6");
            assert_eq!(format!("{}", IpVersion::Both), "Both");
        }
    }

    mod packed_ipv6 {
        use super::*;

        #[test]
        fn expands_link_local_without_compression() {
            assert_eq!(
                expand_packed_ipv6("fe800000000000000000000000000001").as_deref(),
                Some("fe80:0000:0000:0000:0000:0000:0000:0001")
            );
        }

        #[test]
        fn expansion_keeps_literal_digits() {
            assert_eq!(
                expand_packed_ipv6("2001DB8000000000000000000000ABCD").as_deref(),
                Some("2001:DB80:0000:0000:0000:0000:0000:ABCD")
            );
        }

        #[test]
        fn rejects_wrong_length() {
            assert_eq!(expand_packed_ipv6("fe80"), None);
            assert_eq!(expand_packed_ipv6("fe8000000000000000000000000000011"), None);
            assert_eq!(expand_packed_ipv6(""), None);
        }

        #[test]
        fn rejects_non_hex_digits() {
            assert_eq!(expand_packed_ipv6("fe80000000000000000000000000000g"), None);
            assert_eq!(expand_packed_ipv6("fe80:000000000000000000000000001"), None);
        }

        #[test]
        fn parse_matches_std_parser() {
            let parsed = parse_packed_ipv6("20010db8000000000000000000000001").unwrap();
            assert_eq!(parsed, "2001:db8::1".parse::<Ipv6Addr>().unwrap());
        }

        #[test]
        fn expand_ipv6_round_trips_kernel_text() {
            let hex = "fe80000000000000021122fffe334455";
            let parsed = parse_packed_ipv6(hex).unwrap();
            assert_eq!(Some(expand_ipv6(&parsed)), expand_packed_ipv6(hex));
        }
    }

    mod scope {
        use super::*;

        fn scope_of(text: &str) -> AddressScope {
            AddressScope::of(&text.parse().unwrap())
        }

        #[test]
        fn ipv6_loopback_is_loopback() {
            assert_eq!(scope_of("::1"), AddressScope::Loopback);
        }

        #[test]
        fn ipv6_unspecified_is_not_loopback() {
            assert_eq!(scope_of("::"), AddressScope::Other);
        }

        #[test]
        fn link_local_range_bounds() {
            assert_eq!(scope_of("fe80::1"), AddressScope::LinkLocal);
            assert_eq!(scope_of("febf:ffff::1"), AddressScope::LinkLocal);
            assert_eq!(scope_of("fec0::1"), AddressScope::Other);
            assert_eq!(scope_of("fe7f::1"), AddressScope::Other);
        }

        #[test]
        fn global_ipv6_is_other() {
            assert_eq!(scope_of("2001:db8::1"), AddressScope::Other);
        }

        #[test]
        fn ipv4_loopback_covers_whole_block() {
            assert_eq!(scope_of("127.0.0.1"), AddressScope::Loopback);
            assert_eq!(scope_of("127.1.2.3"), AddressScope::Loopback);
            assert_eq!(scope_of("10.0.0.1"), AddressScope::Other);
        }

        #[test]
        fn ipv4_apipa_is_not_link_local() {
            assert_eq!(scope_of("169.254.1.1"), AddressScope::Other);
        }
    }

    mod address_record {
        use super::*;

        #[test]
        fn ipv4_displays_dotted_decimal() {
            let record = AddressRecord::new("eth0", Ipv4Addr::new(192, 168, 1, 10));
            assert_eq!(record.to_string(), "192.168.1.10");
        }

        #[test]
        fn ipv6_displays_expanded_groups() {
            let record = AddressRecord::new("eth0", "2001:db8::1".parse::<Ipv6Addr>().unwrap());
            assert_eq!(record.to_string(), "2001:0db8:0000:0000:0000:0000:0000:0001");
        }

        #[test]
        fn packed_record_keeps_uppercase_digits() {
            let record =
                AddressRecord::from_packed_ipv6("eth0", "2001DB8000000000000000000000ABCD").unwrap();
            assert_eq!(record.to_string(), "2001:DB80:0000:0000:0000:0000:0000:ABCD");
            assert_eq!(
                record.address,
                "2001:db80::abcd".parse::<Ipv6Addr>().unwrap()
            );
        }

        #[test]
        fn packed_record_rejects_bad_hex() {
            assert!(AddressRecord::from_packed_ipv6("eth0", "fe80").is_none());
        }

        #[test]
        fn digit_case_does_not_affect_equality() {
            let upper =
                AddressRecord::from_packed_ipv6("eth0", "FE800000000000000000000000000001").unwrap();
            let lower =
                AddressRecord::from_packed_ipv6("eth0", "fe800000000000000000000000000001").unwrap();
            assert_eq!(upper, lower);
            assert_eq!(upper.scope(), AddressScope::LinkLocal);
        }

        #[test]
        fn equality_includes_interface() {
            let a = AddressRecord::new("eth0", Ipv4Addr::new(10, 0, 0, 1));
            let b = AddressRecord::new("eth1", Ipv4Addr::new(10, 0, 0, 1));
            assert_ne!(a, b);
            assert_eq!(a, a.clone());
        }
    }
}
