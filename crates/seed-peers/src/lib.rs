//! # Seed Peer Discovery
//!
//! Last-resort peer discovery for Goldcoin nodes. When DNS seeds and peer
//! exchange have nothing to offer, this crate hands the connection manager a
//! fixed list of long-lived node addresses.
//!
//! ## Seed Encodings
//!
//! - **Packed:** a `u32` whose bytes, low byte first, are the IPv4 octets
//!   (`0x0100007F` is `127.0.0.1`)
//! - **Textual:** dotted-decimal addresses or host names
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture with:
//! - **Domain Layer:** packed decoding, immutable `SeedTable`, errors
//! - **Ports Layer:** `PeerDiscovery` (inbound), `NetworkParameters` and
//!   `HostResolver` (outbound)
//! - **Service Layer:** `SeedPeerProvider`
//! - **Adapters Layer:** system resolver, static parameters, TOML config,
//!   tokio offload (feature-gated)
//!
//! ## Feature Flags
//!
//! - `config` (default) - `SeedConfig` TOML loading (serde, toml)
//! - `runtime` - `all_textual_peers_within` (tokio)
//! - `test-utils` - `FixedNetworkParameters`, `StubResolver`
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use seed_peers::{PeerDiscovery, SeedPeerProvider, SeedTable, StaticNetworkParameters};
//!
//! let provider = SeedPeerProvider::new(
//!     Arc::new(SeedTable::mainnet()),
//!     Arc::new(StaticNetworkParameters::mainnet()),
//! );
//!
//! // Mainnet ships no packed seeds
//! assert_eq!(provider.next_peer().unwrap(), None);
//!
//! // Textual mainnet seeds are all IP literals: no lookup happens
//! let peers = provider.all_textual_peers(Duration::from_secs(5)).unwrap();
//! assert_eq!(peers[0], "162.243.57.246:8121".parse::<std::net::SocketAddr>().unwrap());
//! ```

// =============================================================================
// CORE MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Test utilities (FixedNetworkParameters, StubResolver)
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

// Domain
pub use domain::{
    PackedPeers, PackedSeed, PeerDiscoveryError, SeedTable, SeedTableError, MAINNET_PACKED_SEEDS,
    MAINNET_PORT, MAINNET_TEXTUAL_SEEDS,
};

// Port traits
pub use ports::{HostResolver, NetworkParameters, PeerDiscovery};

// Service
pub use service::SeedPeerProvider;

// Adapters
pub use adapters::{StaticNetworkParameters, SystemResolver};

#[cfg(feature = "config")]
pub use adapters::{ConfigError, SeedConfig};

#[cfg(feature = "runtime")]
pub use adapters::all_textual_peers_within;
