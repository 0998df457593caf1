use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::adapters::SystemResolver;
use crate::domain::SeedTable;
use crate::ports::{HostResolver, NetworkParameters};

/// Seed peer provider implementing the discovery port.
///
/// Holds a shared, immutable `SeedTable` and a sequential cursor over its
/// packed entries. The cursor is behind a mutex, so concurrent `next_peer`
/// callers each receive a distinct entry; callers that want their own walk
/// should use [`SeedTable::packed_peers`] instead of sharing a provider.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use seed_peers::{PackedSeed, PeerDiscovery, SeedPeerProvider, SeedTable, StaticNetworkParameters};
///
/// let table = SeedTable::new(vec![PackedSeed::new(0x0100_007F)], vec![]).unwrap();
/// let provider = SeedPeerProvider::new(
///     Arc::new(table),
///     Arc::new(StaticNetworkParameters::new(8121)),
/// );
///
/// assert_eq!(provider.next_peer().unwrap(), Some("127.0.0.1:8121".parse().unwrap()));
/// assert_eq!(provider.next_peer().unwrap(), None);
/// ```
pub struct SeedPeerProvider {
    /// Shared seed tables (domain layer)
    pub(crate) table: Arc<SeedTable>,
    /// Source of the P2P port
    pub(crate) params: Arc<dyn NetworkParameters>,
    /// Resolver for textual host names
    pub(crate) resolver: Box<dyn HostResolver>,
    /// Index of the next packed entry for `next_peer`
    pub(crate) cursor: Mutex<usize>,
}

impl SeedPeerProvider {
    /// Create a provider resolving host names through the system resolver.
    ///
    /// # Arguments
    ///
    /// * `table` - Seed tables, shared with any other holder
    /// * `params` - Network parameters supplying the port
    pub fn new(table: Arc<SeedTable>, params: Arc<dyn NetworkParameters>) -> Self {
        debug!(
            packed = table.packed().len(),
            textual = table.textual().len(),
            port = params.port(),
            "[SeedPeers] provider created"
        );

        Self {
            table,
            params,
            resolver: Box::new(SystemResolver::new()),
            cursor: Mutex::new(0),
        }
    }

    /// Replace the host resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: Box<dyn HostResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// The seed tables this provider reads.
    pub fn table(&self) -> &Arc<SeedTable> {
        &self.table
    }

    /// Port attached to every emitted endpoint.
    pub fn port(&self) -> u16 {
        self.params.port()
    }

    /// Packed entries `next_peer` has yet to hand out.
    pub fn remaining(&self) -> usize {
        let cursor = *self.cursor.lock();
        self.table.packed().len().saturating_sub(cursor)
    }
}

impl fmt::Debug for SeedPeerProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedPeerProvider")
            .field("table", &self.table)
            .field("port", &self.params.port())
            .field("cursor", &*self.cursor.lock())
            .finish_non_exhaustive()
    }
}
