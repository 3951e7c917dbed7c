//! Shared in-memory fakes for the capability traits.

use std::cell::Cell;
use std::io;
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex, PoisonError};

use tracing_subscriber::fmt::MakeWriter;

use super::{InterfaceProbe, InterfaceSource, Ipv4Entry};

/// Fake static source backed by in-memory tables.
///
/// `None` makes the corresponding read fail with `NotFound`.
pub struct FakeSource {
    net_dev: Option<String>,
    if_inet6: Option<String>,
    if_inet6_reads: Cell<usize>,
}

impl FakeSource {
    pub fn new(net_dev: &str, if_inet6: &str) -> Self {
        Self {
            net_dev: Some(net_dev.to_string()),
            if_inet6: Some(if_inet6.to_string()),
            if_inet6_reads: Cell::new(0),
        }
    }

    pub fn unreadable() -> Self {
        Self {
            net_dev: None,
            if_inet6: None,
            if_inet6_reads: Cell::new(0),
        }
    }

    pub fn without_if_inet6(net_dev: &str) -> Self {
        Self {
            net_dev: Some(net_dev.to_string()),
            if_inet6: None,
            if_inet6_reads: Cell::new(0),
        }
    }

    pub fn if_inet6_reads(&self) -> usize {
        self.if_inet6_reads.get()
    }
}

fn missing(table: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("{table} not available"))
}

impl InterfaceSource for FakeSource {
    fn net_dev(&self) -> io::Result<String> {
        self.net_dev.clone().ok_or_else(|| missing("net/dev"))
    }

    fn if_inet6(&self) -> io::Result<String> {
        self.if_inet6_reads.set(self.if_inet6_reads.get() + 1);
        self.if_inet6.clone().ok_or_else(|| missing("net/if_inet6"))
    }
}

/// Fake live probe with a fixed set of existing interfaces.
pub struct FakeProbe {
    present: Vec<String>,
    table: Option<Vec<Ipv4Entry>>,
    probed: Cell<usize>,
}

impl FakeProbe {
    pub fn new<I, S>(present: I, table: Vec<Ipv4Entry>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            present: present.into_iter().map(Into::into).collect(),
            table: Some(table),
            probed: Cell::new(0),
        }
    }

    pub fn failing_table<I, S>(present: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            present: present.into_iter().map(Into::into).collect(),
            table: None,
            probed: Cell::new(0),
        }
    }

    pub fn probe_count(&self) -> usize {
        self.probed.get()
    }
}

impl InterfaceProbe for FakeProbe {
    fn probe(&self, name: &str) -> io::Result<u32> {
        self.probed.set(self.probed.get() + 1);
        self.present
            .iter()
            .position(|present| present == name)
            .map(|idx| u32::try_from(idx + 1).unwrap_or(u32::MAX))
            .ok_or_else(|| io::Error::from_raw_os_error(19))
    }

    fn ipv4_table(&self) -> io::Result<Vec<Ipv4Entry>> {
        self.table
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::PermissionDenied, "SIOCGIFCONF denied"))
    }
}

/// A `/proc/net/dev` table with `lo`, `eth0` and `wlan0`.
pub const NET_DEV: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
    lo:  104696    1208    0    0    0     0          0         0   104696    1208    0    0    0     0       0          0
  eth0: 9812734   10293    0    0    0     0          0       120  1204958    8123    0    0    0     0       0          0
 wlan0:       0       0    0    0    0     0          0         0        0       0    0    0    0     0       0          0
";

/// A `/proc/net/if_inet6` table matching [`NET_DEV`].
pub const IF_INET6: &str = "\
00000000000000000000000000000001 01 80 10 80       lo
fe80000000000000021122fffe334455 02 40 20 80     eth0
20010db8000000000000000000000010 02 40 00 00     eth0
fe80000000000000aabbccfffedd0011 03 40 20 80    wlan0
";

/// IPv4 entries matching [`NET_DEV`].
pub fn ipv4_table() -> Vec<Ipv4Entry> {
    vec![
        Ipv4Entry::new("lo", Ipv4Addr::new(127, 0, 0, 1)),
        Ipv4Entry::new("eth0", Ipv4Addr::new(192, 168, 1, 20)),
        Ipv4Entry::new("wlan0", Ipv4Addr::new(10, 0, 0, 7)),
    ]
}


/// Collects formatted log output for assertions.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// Runs `f` with a WARN-level subscriber writing into this capture.
    pub fn during<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
