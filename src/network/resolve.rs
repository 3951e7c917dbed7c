//! Address resolution across both address families.
//!
//! IPv4 addresses come from the live bulk query, IPv6 addresses from the
//! static `if_inet6` table. Records are written as soon as they pass the
//! filter, so output produced before a failure is never lost.

use std::collections::HashSet;
use std::io::{self, Write};

use thiserror::Error;

use super::{AddressRecord, FilterCriteria, InterfaceProbe, InterfaceSource};

/// Error type for address resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The bulk IPv4 configuration query failed.
    #[error("could not query IPv4 interface configuration: {0}")]
    Ipv4Table(#[source] io::Error),

    /// The IPv6 address table could not be read.
    #[error("could not read IPv6 address table: {0}")]
    Ipv6Table(#[source] io::Error),

    /// Writing to the output failed.
    #[error("could not write output: {0}")]
    Output(#[from] io::Error),
}

/// Counts of what a resolution pass produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// IPv4 records written.
    pub ipv4: usize,
    /// IPv6 records written.
    pub ipv6: usize,
    /// Records suppressed because the same triple was already written.
    pub duplicates: usize,
}

impl Summary {
    /// Total records written.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.ipv4 + self.ipv6
    }
}

/// Resolves and prints addresses from a static source and a live probe.
#[derive(Debug)]
pub struct Resolver<S, P> {
    source: S,
    probe: P,
}

impl<S: InterfaceSource, P: InterfaceProbe> Resolver<S, P> {
    /// Creates a resolver over the given data sources.
    #[must_use]
    pub const fn new(source: S, probe: P) -> Self {
        Self { source, probe }
    }

    /// Writes every address passing `criteria` to `out`, one per line.
    ///
    /// IPv4 output is flushed before the IPv6 table is read. The IPv6 table
    /// is not read at all unless IPv6 is requested.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Ipv4Table`] or [`ResolveError::Ipv6Table`] if a
    /// required data source fails, and [`ResolveError::Output`] if writing
    /// fails. Lines written before the error stay written.
    pub fn resolve<W: Write>(
        &self,
        criteria: &FilterCriteria,
        out: &mut W,
    ) -> Result<Summary, ResolveError> {
        let mut emitter = Emitter::new(criteria, out);

        if criteria.ip_version().includes_v4() {
            let table = self.probe.ipv4_table().map_err(ResolveError::Ipv4Table)?;
            tracing::debug!(entries = table.len(), "Read IPv4 configuration table");
            for entry in table {
                if emitter.emit(AddressRecord::new(entry.interface, entry.address))? {
                    emitter.summary.ipv4 += 1;
                }
            }
            emitter.out.flush()?;
        }

        if criteria.ip_version().includes_v6() {
            let table = self.source.if_inet6().map_err(ResolveError::Ipv6Table)?;
            let records = parse_if_inet6(&table);
            tracing::debug!(entries = records.len(), "Read IPv6 address table");
            for record in records {
                if emitter.emit(record)? {
                    emitter.summary.ipv6 += 1;
                }
            }
            emitter.out.flush()?;
        }

        Ok(emitter.summary)
    }
}

/// Writes filtered, deduplicated records.
struct Emitter<'a, W> {
    criteria: &'a FilterCriteria,
    out: &'a mut W,
    seen: HashSet<AddressRecord>,
    summary: Summary,
}

impl<'a, W: Write> Emitter<'a, W> {
    fn new(criteria: &'a FilterCriteria, out: &'a mut W) -> Self {
        Self {
            criteria,
            out,
            seen: HashSet::new(),
            summary: Summary::default(),
        }
    }

    /// Returns true if the record was written.
    fn emit(&mut self, record: AddressRecord) -> io::Result<bool> {
        if !self.criteria.matches(&record) {
            return Ok(false);
        }
        if self.seen.contains(&record) {
            tracing::debug!(interface = %record.interface, address = %record, "Skipping duplicate address");
            self.summary.duplicates += 1;
            return Ok(false);
        }

        writeln!(self.out, "{record}")?;
        self.seen.insert(record);
        Ok(true)
    }
}

/// Parses the `if_inet6` table into records, in table order.
///
/// Each row is `<32 hex digits> <index> <prefix> <scope> <flags> <name>`;
/// only the first and last tokens are used. The address text keeps the
/// table's hex digits as written. Rows with fewer than two tokens
/// or a malformed address are skipped.
#[must_use]
pub fn parse_if_inet6(table: &str) -> Vec<AddressRecord> {
    table
        .lines()
        .filter_map(|line| {
            let record = parse_if_inet6_row(line);
            if record.is_none() && !line.trim().is_empty() {
                tracing::debug!(line, "Skipping malformed IPv6 table row");
            }
            record
        })
        .collect()
}

fn parse_if_inet6_row(line: &str) -> Option<AddressRecord> {
    let mut tokens = line.split_whitespace();
    let hex = tokens.next()?;
    let interface = tokens.next_back()?;
    AddressRecord::from_packed_ipv6(interface, hex)
}
