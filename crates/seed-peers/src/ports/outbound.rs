//! # Driven Ports (Outbound SPI)
//!
//! Interfaces the host node implements for this subsystem.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

/// Network parameters of the chain the node runs on.
///
/// Only the P2P port is consumed here. It is read for every emitted
/// endpoint and never written.
pub trait NetworkParameters: Send + Sync {
    /// Default P2P port applied to every seed endpoint.
    fn port(&self) -> u16;
}

/// Host name resolution for textual seeds.
///
/// IP literals never reach the resolver; only real host names do.
///
/// # Example Implementation
///
/// ```rust,ignore
/// struct SystemResolver;
///
/// impl HostResolver for SystemResolver {
///     fn resolve(&self, host: &str, port: u16) -> io::Result<Vec<SocketAddr>> {
///         Ok((host, port).to_socket_addrs()?.collect())
///     }
/// }
/// ```
pub trait HostResolver: Send + Sync {
    /// Resolve `host` and attach `port` to every address found.
    ///
    /// May block on the system resolver.
    fn resolve(&self, host: &str, port: u16) -> io::Result<Vec<SocketAddr>>;
}

impl<T: HostResolver + ?Sized> HostResolver for Arc<T> {
    fn resolve(&self, host: &str, port: u16) -> io::Result<Vec<SocketAddr>> {
        (**self).resolve(host, port)
    }
}
