//! Domain Layer - Pure seed-table logic with no I/O
//!
//! - Packed IPv4 decoding (low byte first)
//! - Immutable seed tables and their restartable iterator
//! - The built-in mainnet seed set
//! - Error types

pub mod errors;
pub mod mainnet;
pub mod packed;
pub mod seed_table;

pub use errors::*;
pub use mainnet::*;
pub use packed::*;
pub use seed_table::*;
