//! Linux sources: procfs tables and `ioctl` queries on a datagram socket.

use std::ffi::CStr;
use std::io;
use std::mem;
use std::net::Ipv4Addr;
use std::os::fd::{AsRawFd, OwnedFd};
use std::path::{Path, PathBuf};

use rustix::net::netdevice::name_to_index;
use rustix::net::{AddressFamily, SocketType, socket};

use super::PlatformError;
use crate::network::{InterfaceProbe, InterfaceSource, Ipv4Entry};

/// Interface listing relative to the procfs root.
pub const NET_DEV_PATH: &str = "net/dev";

/// IPv6 address table relative to the procfs root.
pub const IF_INET6_PATH: &str = "net/if_inet6";

/// Reads interface tables from a procfs mount.
///
/// # Example
///
/// ```no_run
/// use lsaddr::network::{InterfaceSource, platform::ProcFs};
///
/// let procfs = ProcFs::default();
/// let table = procfs.net_dev().expect("procfs is mounted");
/// println!("{table}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcFs {
    root: PathBuf,
}

impl ProcFs {
    /// Creates a source rooted at `root` (normally `/proc`).
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the procfs root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, relative: &str) -> io::Result<String> {
        let path = self.root.join(relative);
        std::fs::read_to_string(&path).map_err(|e| {
            io::Error::new(e.kind(), format!("{}: {e}", path.display()))
        })
    }
}

impl Default for ProcFs {
    fn default() -> Self {
        Self::new("/proc")
    }
}

impl InterfaceSource for ProcFs {
    fn net_dev(&self) -> io::Result<String> {
        self.read(NET_DEV_PATH)
    }

    fn if_inet6(&self) -> io::Result<String> {
        self.read(IF_INET6_PATH)
    }
}

/// Live interface queries over an `AF_INET6` datagram socket.
///
/// The socket is closed when the value is dropped.
#[derive(Debug)]
pub struct IoctlSocket {
    fd: OwnedFd,
}

impl IoctlSocket {
    /// Opens the query socket.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Socket`] if the socket cannot be created.
    pub fn open() -> Result<Self, PlatformError> {
        let fd = socket(AddressFamily::INET6, SocketType::DGRAM, None)
            .map_err(|e| PlatformError::Socket(e.into()))?;
        Ok(Self { fd })
    }
}

impl InterfaceProbe for IoctlSocket {
    fn probe(&self, name: &str) -> io::Result<u32> {
        name_to_index(&self.fd, name).map_err(Into::into)
    }

    fn ipv4_table(&self) -> io::Result<Vec<Ipv4Entry>> {
        let requests = query_ifconf(self.fd.as_raw_fd())?;
        Ok(requests.iter().filter_map(ipv4_entry).collect())
    }
}

/// Runs `SIOCGIFCONF` twice: once to size the buffer, once to fill it.
fn query_ifconf(fd: libc::c_int) -> io::Result<Vec<libc::ifreq>> {
    // SAFETY: `ifconf` is plain old data; all-zero is a valid value with a null buffer.
    let mut ifc: libc::ifconf = unsafe { mem::zeroed() };

    // SAFETY: With a null buffer the kernel only writes the required length to `ifc_len`.
    if unsafe { libc::ioctl(fd, libc::SIOCGIFCONF, &raw mut ifc) } < 0 {
        return Err(io::Error::last_os_error());
    }

    let capacity = usize::try_from(ifc.ifc_len).unwrap_or(0) / mem::size_of::<libc::ifreq>();
    if capacity == 0 {
        return Ok(Vec::new());
    }

    // SAFETY: `ifreq` is plain old data; all-zero is a valid value.
    let mut requests = vec![unsafe { mem::zeroed::<libc::ifreq>() }; capacity];
    ifc.ifc_len = libc::c_int::try_from(capacity * mem::size_of::<libc::ifreq>())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    ifc.ifc_ifcu.ifcu_req = requests.as_mut_ptr();

    // SAFETY: `ifcu_req` points at `capacity` writable entries and `ifc_len` is their byte size.
    if unsafe { libc::ioctl(fd, libc::SIOCGIFCONF, &raw mut ifc) } < 0 {
        return Err(io::Error::last_os_error());
    }

    let filled = usize::try_from(ifc.ifc_len).unwrap_or(0) / mem::size_of::<libc::ifreq>();
    requests.truncate(filled.min(capacity));
    Ok(requests)
}

/// Converts one `ifreq` into an entry, skipping non-IPv4 or unnamed entries.
fn ipv4_entry(request: &libc::ifreq) -> Option<Ipv4Entry> {
    let name_bytes: Vec<u8> = request
        .ifr_name
        .iter()
        .map(|c| u8::from_ne_bytes(c.to_ne_bytes()))
        .collect();
    let name = CStr::from_bytes_until_nul(&name_bytes).ok()?.to_str().ok()?;
    if name.is_empty() {
        return None;
    }

    // SAFETY: SIOCGIFCONF fills `ifru_addr` for every returned entry.
    let addr = unsafe { request.ifr_ifru.ifru_addr };
    if i32::from(addr.sa_family) != libc::AF_INET {
        tracing::debug!(interface = name, family = addr.sa_family, "Skipping non-IPv4 entry");
        return None;
    }

    // SAFETY: The family is AF_INET, so the 16-byte sockaddr holds a sockaddr_in.
    let sin = unsafe { std::ptr::from_ref(&addr).cast::<libc::sockaddr_in>().read_unaligned() };
    let address = Ipv4Addr::from(u32::from_be(sin.sin_addr.s_addr));
    Some(Ipv4Entry::new(name, address))
}
