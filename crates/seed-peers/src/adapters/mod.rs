//! # Adapters
//!
//! Concrete implementations of the driven ports plus host-facing helpers.
//!
//! - `SystemResolver` - host resolution through the OS resolver
//! - `StaticNetworkParameters` - fixed port, mainnet default
//! - `SeedConfig` - TOML-loaded seeds and port (requires "config" feature)
//! - `all_textual_peers_within` - deadline-bounded textual resolution on the
//!   tokio blocking pool (requires "runtime" feature)

/// Network parameter providers
pub mod params;
/// Host resolvers
pub mod resolver;

/// TOML configuration
#[cfg(feature = "config")]
pub mod config;

/// Tokio offload helpers
#[cfg(feature = "runtime")]
pub mod runtime;

pub use params::StaticNetworkParameters;
pub use resolver::SystemResolver;

#[cfg(feature = "config")]
pub use config::{ConfigError, SeedConfig};

#[cfg(feature = "runtime")]
pub use runtime::all_textual_peers_within;
