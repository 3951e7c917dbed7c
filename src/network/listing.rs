//! Interface discovery from the static interface listing.
//!
//! The listing is the `/proc/net/dev` table: a fixed number of header lines
//! followed by one line per interface, where the first whitespace-delimited
//! token is `<name>:` (possibly glued to the first counter, as in `eth0:123`).

use thiserror::Error;

use super::InterfaceSource;

/// Number of header lines preceding the interface rows.
pub const HEADER_LINES: usize = 2;

/// Error type for interface listing operations.
#[derive(Debug, Error)]
pub enum ListError {
    /// The listing could not be read at all.
    #[error("error listing interfaces: could not read interface table: {0}")]
    Read(#[source] std::io::Error),

    /// The listing is too short to contain its header.
    #[error("error listing interfaces: expected {HEADER_LINES} header lines, found {found}")]
    Header {
        /// Number of lines actually present.
        found: usize,
    },
}

/// Lists the names of all interfaces known to `source`, in table order.
///
/// # Errors
///
/// Returns [`ListError::Read`] if the listing cannot be read and
/// [`ListError::Header`] if it has no complete header.
pub fn list_interfaces<S: InterfaceSource>(source: &S) -> Result<Vec<String>, ListError> {
    let table = source.net_dev().map_err(ListError::Read)?;
    parse_net_dev(&table)
}

/// Parses the interface listing table.
///
/// Rows without a usable name are skipped.
///
/// # Errors
///
/// Returns [`ListError::Header`] if fewer than [`HEADER_LINES`] lines exist.
pub fn parse_net_dev(table: &str) -> Result<Vec<String>, ListError> {
    let mut lines = table.lines();
    for found in 0..HEADER_LINES {
        if lines.next().is_none() {
            return Err(ListError::Header { found });
        }
    }

    let names = lines
        .enumerate()
        .filter_map(|(row, line)| {
            let name = parse_row(line);
            if name.is_none() {
                tracing::debug!(row, line, "Skipping malformed interface row");
            }
            name
        })
        .collect();

    Ok(names)
}

/// Extracts the interface name from a single data row.
fn parse_row(line: &str) -> Option<String> {
    let token = line.split_whitespace().next()?;
    let name = token.split_once(':').map_or(token, |(name, _)| name);
    (!name.is_empty()).then(|| name.to_string())
}
