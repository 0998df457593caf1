use std::io;
use std::net::{IpAddr, SocketAddr};

use tracing::warn;

use crate::domain::PeerDiscoveryError;
use crate::service::SeedPeerProvider;

impl SeedPeerProvider {
    /// Turn one textual entry into an endpoint carrying `port`.
    ///
    /// IP literals are used as-is. Host names go to the resolver and the
    /// first address it yields is taken.
    pub(crate) fn resolve_textual(
        &self,
        entry: &str,
        port: u16,
    ) -> Result<SocketAddr, PeerDiscoveryError> {
        if let Ok(ip) = entry.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, port));
        }

        let first = self
            .resolver
            .resolve(entry, port)
            .map_err(|e| {
                warn!(entry, error = %e, "[SeedPeers] seed host failed to resolve");
                PeerDiscoveryError::resolution(entry, e)
            })?
            .into_iter()
            .next();

        match first {
            Some(mut addr) => {
                addr.set_port(port);
                Ok(addr)
            }
            None => {
                warn!(entry, "[SeedPeers] seed host resolved to no addresses");
                Err(PeerDiscoveryError::resolution(
                    entry,
                    io::Error::new(io::ErrorKind::NotFound, "host resolved to no addresses"),
                ))
            }
        }
    }
}
