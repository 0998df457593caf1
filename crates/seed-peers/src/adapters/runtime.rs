use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::domain::PeerDiscoveryError;
use crate::ports::PeerDiscovery;

/// Run `all_textual_peers` on the tokio blocking pool and give up after
/// `deadline`.
///
/// Providers ignore the timeout they are handed; this is where the deadline
/// is actually enforced. On expiry the blocking lookup keeps running in the
/// background and its result is dropped.
///
/// # Errors
///
/// - `Timeout` if resolution outlives `deadline`
/// - `Join` if the blocking task panicked
/// - whatever the provider itself returned
pub async fn all_textual_peers_within<P>(
    provider: Arc<P>,
    deadline: Duration,
) -> Result<Vec<SocketAddr>, PeerDiscoveryError>
where
    P: PeerDiscovery + ?Sized + 'static,
{
    let task = tokio::task::spawn_blocking(move || provider.all_textual_peers(deadline));

    match tokio::time::timeout(deadline, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => Err(PeerDiscoveryError::Join(join_error.to_string())),
        Err(_) => {
            warn!(?deadline, "[SeedPeers] textual seed resolution timed out");
            Err(PeerDiscoveryError::Timeout { elapsed: deadline })
        }
    }
}
