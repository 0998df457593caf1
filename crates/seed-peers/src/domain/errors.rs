//! Domain Errors for Seed Peer Discovery

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced to the discovery orchestrator.
///
/// Exhaustion of the sequential cursor is NOT an error; `next_peer` reports
/// it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum PeerDiscoveryError {
    /// A seed entry could not be turned into a socket address.
    #[error("Failed to resolve seed address {entry}: {source}")]
    AddressResolution {
        /// The offending table entry, as written in the table.
        entry: String,
        /// Underlying resolver error.
        #[source]
        source: io::Error,
    },

    /// An externally applied deadline expired before resolution finished.
    #[error("Seed resolution did not finish within {elapsed:?}")]
    Timeout {
        /// The deadline that was applied.
        elapsed: Duration,
    },

    /// The blocking resolution task panicked or was cancelled.
    #[error("Seed resolution task failed: {0}")]
    Join(String),
}

impl PeerDiscoveryError {
    /// Wrap a resolver failure for `entry`.
    pub fn resolution(entry: impl Into<String>, source: io::Error) -> Self {
        Self::AddressResolution {
            entry: entry.into(),
            source,
        }
    }

    /// The entry that failed, for resolution errors.
    pub fn entry(&self) -> Option<&str> {
        match self {
            Self::AddressResolution { entry, .. } => Some(entry),
            _ => None,
        }
    }
}

/// Structural problems found while building a `SeedTable`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedTableError {
    /// Textual entry is empty or contains whitespace.
    #[error("Invalid textual seed at index {index}: {entry:?}")]
    InvalidTextualEntry {
        /// Position in the textual table.
        index: usize,
        /// The rejected entry.
        entry: String,
    },
}
