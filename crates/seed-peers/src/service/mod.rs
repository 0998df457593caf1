//! # Seed Peer Service
//!
//! `SeedPeerProvider` implements the `PeerDiscovery` port over an injected
//! `SeedTable`, hiding cursor locking and textual resolution from callers.

// Semantic submodules
mod api;
mod core;
mod resolve;

// Re-export public API
pub use self::core::SeedPeerProvider;
