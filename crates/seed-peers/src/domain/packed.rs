//! Packed IPv4 seed encoding
//!
//! A packed seed stores an IPv4 address in a single `u32`. The four octets
//! are the integer's bytes taken least-significant first, independent of the
//! host's byte order.

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// IPv4 address packed into a `u32`, low byte = first octet.
///
/// # Example
///
/// ```rust
/// use seed_peers::PackedSeed;
/// use std::net::Ipv4Addr;
///
/// let seed = PackedSeed::new(0x0100_007F);
/// assert_eq!(seed.ip(), Ipv4Addr::LOCALHOST);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedSeed(pub u32);

impl PackedSeed {
    /// Wrap a raw packed value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Pack four octets back into the table encoding.
    pub const fn from_octets(octets: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(octets))
    }

    /// The raw table value.
    pub const fn raw(&self) -> u32 {
        self.0
    }

    /// Octets in address order: bits 0-7, 8-15, 16-23, 24-31.
    pub const fn octets(&self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Decode to an IPv4 address.
    pub const fn ip(&self) -> Ipv4Addr {
        let [a, b, c, d] = self.octets();
        Ipv4Addr::new(a, b, c, d)
    }

    /// Decode and attach `port`.
    pub fn socket_addr(&self, port: u16) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.ip(), port))
    }
}

impl From<u32> for PackedSeed {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<Ipv4Addr> for PackedSeed {
    fn from(ip: Ipv4Addr) -> Self {
        Self::from_octets(ip.octets())
    }
}

impl fmt::Display for PackedSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010X}", self.0)
    }
}
