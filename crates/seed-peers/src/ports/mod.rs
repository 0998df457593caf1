//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! - **Driving Port (Inbound):** `PeerDiscovery`, the capability every
//!   discovery provider offers the orchestrator
//! - **Driven Ports (Outbound):** `NetworkParameters` and `HostResolver`,
//!   supplied by the host node

pub mod inbound;
pub mod outbound;

pub use inbound::PeerDiscovery;
pub use outbound::{HostResolver, NetworkParameters};
