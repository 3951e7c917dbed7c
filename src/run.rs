//! Application execution logic.
//!
//! Wires the platform data sources to the listing, validation and
//! resolution steps and writes the result to standard output.

use std::io::{self, Write};

use thiserror::Error;

use lsaddr::config::ValidatedConfig;
use lsaddr::network::platform::PlatformError;
use lsaddr::network::{
    InterfaceProbe, InterfaceSource, ListError, ResolveError, Resolver, Summary, list_interfaces,
    validate_interfaces,
};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The interface listing was required but unusable.
    #[error(transparent)]
    List(#[from] ListError),

    /// Address resolution failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A platform resource could not be acquired.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// Writing the interface list failed.
    #[error("could not write output: {0}")]
    Output(#[source] io::Error),
}

/// Executes one run against the live system.
///
/// # Errors
///
/// Returns [`RunError`] for any fatal failure; per-interface problems are
/// only logged.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn execute(config: &ValidatedConfig) -> Result<(), RunError> {
    use lsaddr::network::platform::{IoctlSocket, ProcFs};

    let source = ProcFs::new(&config.proc_root);
    tracing::debug!(root = %source.root().display(), "Reading interface tables");
    run(config, &source, IoctlSocket::open, &mut io::stdout().lock())
}

/// Executes one run against the live system.
///
/// # Errors
///
/// Always returns [`PlatformError::Unsupported`] on this target.
#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub fn execute(_config: &ValidatedConfig) -> Result<(), RunError> {
    Err(PlatformError::Unsupported(std::env::consts::OS).into())
}

/// Runs one pass over the given sources.
///
/// The listing is read before `open_probe` is called, so an unusable listing
/// is reported ahead of any socket failure. List mode never opens a probe.
pub fn run<S, P, O, W>(
    config: &ValidatedConfig,
    source: &S,
    open_probe: O,
    out: &mut W,
) -> Result<(), RunError>
where
    S: InterfaceSource,
    P: InterfaceProbe,
    O: FnOnce() -> Result<P, PlatformError>,
    W: Write,
{
    if config.list_interfaces {
        print_interfaces(source, out)?;
        return Ok(());
    }

    let listed = read_listing(config, source)?;
    let probe = open_probe()?;
    print_addresses(config, listed.as_deref(), source, &probe, out)?;
    Ok(())
}

/// Prints every interface name from the static listing, one per line.
pub fn print_interfaces<S, W>(source: &S, out: &mut W) -> Result<usize, RunError>
where
    S: InterfaceSource,
    W: Write,
{
    let names = list_interfaces(source)?;
    for name in &names {
        writeln!(out, "{name}").map_err(RunError::Output)?;
    }
    out.flush().map_err(RunError::Output)?;
    Ok(names.len())
}

/// Reads the static interface listing for address mode.
///
/// Without explicit names the listing must be readable; with explicit names
/// a listing failure is only a warning since the live probe decides.
pub fn read_listing<S: InterfaceSource>(
    config: &ValidatedConfig,
    source: &S,
) -> Result<Option<Vec<String>>, RunError> {
    if config.interfaces_specified() {
        return Ok(list_interfaces(source)
            .inspect_err(|e| tracing::warn!("{e}"))
            .ok());
    }

    let listed = list_interfaces(source)?;
    tracing::debug!(count = listed.len(), interfaces = ?listed, "Discovered interfaces");
    Ok(Some(listed))
}

/// Validates the requested interfaces and prints their addresses.
///
/// `listed` is the static listing from [`read_listing`], if it was readable.
pub fn print_addresses<S, P, W>(
    config: &ValidatedConfig,
    listed: Option<&[String]>,
    source: &S,
    probe: &P,
    out: &mut W,
) -> Result<Summary, RunError>
where
    S: InterfaceSource,
    P: InterfaceProbe,
    W: Write,
{
    let valid = if config.interfaces_specified() {
        let validation = validate_interfaces(&config.interfaces, probe);
        if let Some(listed) = listed {
            for name in validation.valid.iter().filter(|name| !listed.contains(name)) {
                tracing::debug!(interface = %name, "Interface is live but missing from the listing");
            }
        }
        Some(validation.valid)
    } else {
        None
    };

    let criteria = config.filter_criteria(valid.as_deref());
    tracing::debug!("{criteria}");

    let summary = Resolver::new(source, probe).resolve(&criteria, out)?;
    tracing::debug!(
        total = summary.total(),
        ipv4 = summary.ipv4,
        ipv6 = summary.ipv6,
        duplicates = summary.duplicates,
        "Resolution complete"
    );
    Ok(summary)
}
