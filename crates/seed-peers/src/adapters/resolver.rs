use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

use crate::ports::HostResolver;

// ============================================================================
// SystemResolver - OS name resolution
// ============================================================================

/// Resolver backed by the operating system (`getaddrinfo`).
///
/// Blocks the calling thread for the duration of the lookup. Addresses are
/// returned in the order the system resolver produced them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    /// Create a new system resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl HostResolver for SystemResolver {
    fn resolve(&self, host: &str, port: u16) -> io::Result<Vec<SocketAddr>> {
        Ok((host, port).to_socket_addrs()?.collect())
    }
}
