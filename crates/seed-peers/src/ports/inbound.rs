//! # Driving Port (Inbound API)
//!
//! The discovery capability shared by every provider the orchestrator can
//! hold: seed lists, DNS seeds, peer exchange.

use std::net::SocketAddr;
use std::time::Duration;

use crate::domain::PeerDiscoveryError;

/// A pluggable source of candidate peer endpoints.
///
/// The orchestrator holds providers as `Box<dyn PeerDiscovery>` and tries
/// them in order; it never needs to know which concrete provider it has.
///
/// # Example
///
/// ```rust,ignore
/// fn first_candidates(providers: &[Box<dyn PeerDiscovery>]) -> Vec<SocketAddr> {
///     providers
///         .iter()
///         .find_map(|p| p.all_peers(Duration::from_secs(5)).ok().filter(|v| !v.is_empty()))
///         .unwrap_or_default()
/// }
/// ```
pub trait PeerDiscovery: Send + Sync {
    /// Return the next endpoint of a sequential walk.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(addr))` for the next entry
    /// - `Ok(None)` once the walk is exhausted (permanent for this instance)
    /// - `Err(AddressResolution)` if the entry cannot be decoded
    fn next_peer(&self) -> Result<Option<SocketAddr>, PeerDiscoveryError>;

    /// Return every endpoint the provider knows, in order.
    ///
    /// `timeout` is part of the shared contract. Providers that complete
    /// in memory may ignore it.
    fn all_peers(&self, timeout: Duration) -> Result<Vec<SocketAddr>, PeerDiscoveryError>;

    /// Return every endpoint from the provider's human-readable address list.
    ///
    /// All-or-nothing: the first entry that fails to resolve fails the call.
    fn all_textual_peers(&self, timeout: Duration)
        -> Result<Vec<SocketAddr>, PeerDiscoveryError>;

    /// Release provider resources. Must be safe to call at any time.
    fn shutdown(&self);
}
