//! Built-in Goldcoin mainnet seed set
//!
//! Only the active set lives here. Retired nodes are removed from the list
//! rather than left behind disabled.

use super::packed::PackedSeed;

/// Default P2P port of the Goldcoin mainnet.
pub const MAINNET_PORT: u16 = 8121;

/// Active packed seeds. Currently none; the historical packed nodes were all
/// retired.
pub const MAINNET_PACKED_SEEDS: &[PackedSeed] = &[];

/// Active textual seeds, in connection-preference order.
pub const MAINNET_TEXTUAL_SEEDS: &[&str] = &[
    "162.243.57.246",
    "84.200.17.249",
    "174.53.218.230",
    "72.78.100.7",
    "217.31.181.40",
    "81.2.95.132",
];
