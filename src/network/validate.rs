//! Live validation of interface names.

use std::collections::HashSet;
use std::fmt;

use super::InterfaceProbe;

/// Longest interface name the kernel accepts (`IFNAMSIZ` minus the NUL).
pub const MAX_NAME_LEN: usize = 15;

/// A candidate interface that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// The rejected name.
    pub name: String,
    /// Why the name was rejected. Never empty.
    pub reason: String,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not open interface {}: {}", self.name, self.reason)
    }
}

/// Result of validating a set of candidate names.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Validation {
    /// Names that passed the probe, in candidate order.
    pub valid: Vec<String>,
    /// Names that failed, with the reason.
    pub rejected: Vec<Rejection>,
}

/// Probes each candidate against the live networking layer.
///
/// Each rejected name is logged as a warning; the caller decides whether an
/// empty `valid` set matters. Repeated candidates are probed once.
pub fn validate_interfaces<I, S, P>(names: I, probe: &P) -> Validation
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: InterfaceProbe + ?Sized,
{
    let mut seen = HashSet::new();
    let mut validation = Validation::default();

    for name in names {
        let name = name.as_ref();
        if !seen.insert(name.to_string()) {
            continue;
        }

        match check(name, probe) {
            Ok(index) => {
                tracing::debug!(interface = name, index, "Interface is present");
                validation.valid.push(name.to_string());
            }
            Err(reason) => {
                let rejection = Rejection {
                    name: name.to_string(),
                    reason,
                };
                tracing::warn!("{rejection}");
                validation.rejected.push(rejection);
            }
        }
    }

    validation
}

fn check<P: InterfaceProbe + ?Sized>(name: &str, probe: &P) -> Result<u32, String> {
    if name.is_empty() {
        return Err("empty interface name".to_string());
    }
    if name.len() > MAX_NAME_LEN {
        return Err(format!("name longer than {MAX_NAME_LEN} bytes"));
    }

    probe.probe(name).map_err(|e| {
        let reason = e.to_string();
        if reason.is_empty() {
            format!("{:?}", e.kind())
        } else {
            reason
        }
    })
}
