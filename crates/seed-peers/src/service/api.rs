use std::net::SocketAddr;
use std::time::Duration;

use tracing::{debug, trace};

use crate::domain::PeerDiscoveryError;
use crate::ports::PeerDiscovery;
use crate::service::SeedPeerProvider;

impl PeerDiscovery for SeedPeerProvider {
    fn next_peer(&self) -> Result<Option<SocketAddr>, PeerDiscoveryError> {
        let seed = {
            let mut cursor = self.cursor.lock();
            let Some(seed) = self.table.packed().get(*cursor).copied() else {
                debug!(cursor = *cursor, "[SeedPeers] packed seeds exhausted");
                return Ok(None);
            };
            *cursor += 1;
            seed
        };

        let addr = seed.socket_addr(self.params.port());
        trace!(seed = %seed, %addr, "[SeedPeers] next seed peer");
        Ok(Some(addr))
    }

    fn all_peers(&self, timeout: Duration) -> Result<Vec<SocketAddr>, PeerDiscoveryError> {
        trace!(?timeout, "[SeedPeers] timeout ignored for in-memory table");
        Ok(self.table.packed_peers(self.params.port()).collect())
    }

    fn all_textual_peers(
        &self,
        timeout: Duration,
    ) -> Result<Vec<SocketAddr>, PeerDiscoveryError> {
        trace!(?timeout, "[SeedPeers] timeout ignored for textual seeds");
        let port = self.params.port();
        self.table
            .textual()
            .iter()
            .map(|entry| self.resolve_textual(entry, port))
            .collect()
    }

    fn shutdown(&self) {
        debug!("[SeedPeers] shutdown requested, nothing to release");
    }
}
