//! Seed Table
//!
//! Immutable pair of parallel seed tables, built once and shared by every
//! provider that needs it.

use std::iter::FusedIterator;
use std::net::SocketAddr;
use std::slice;

use super::errors::SeedTableError;
use super::mainnet::{MAINNET_PACKED_SEEDS, MAINNET_TEXTUAL_SEEDS};
use super::packed::PackedSeed;

/// Ordered, immutable seed tables.
///
/// The packed and textual tables are maintained independently. Either may be
/// empty and the two may list the same node.
///
/// # Example
///
/// ```rust
/// use seed_peers::{PackedSeed, SeedTable};
///
/// let table = SeedTable::new(
///     vec![PackedSeed::new(0x0100_007F)],
///     vec!["10.0.0.1".to_string()],
/// )
/// .unwrap();
///
/// let peers: Vec<_> = table.packed_peers(8121).collect();
/// assert_eq!(peers, vec!["127.0.0.1:8121".parse::<std::net::SocketAddr>().unwrap()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedTable {
    packed: Vec<PackedSeed>,
    textual: Vec<String>,
}

impl SeedTable {
    /// Build a table, rejecting structurally broken textual entries.
    ///
    /// # Errors
    ///
    /// `SeedTableError::InvalidTextualEntry` for an empty entry or one
    /// containing whitespace.
    pub fn new(packed: Vec<PackedSeed>, textual: Vec<String>) -> Result<Self, SeedTableError> {
        for (index, entry) in textual.iter().enumerate() {
            if entry.is_empty() || entry.chars().any(char::is_whitespace) {
                return Err(SeedTableError::InvalidTextualEntry {
                    index,
                    entry: entry.clone(),
                });
            }
        }

        Ok(Self { packed, textual })
    }

    /// Table with no entries at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in mainnet active set.
    pub fn mainnet() -> Self {
        Self {
            packed: MAINNET_PACKED_SEEDS.to_vec(),
            textual: MAINNET_TEXTUAL_SEEDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Packed entries in table order.
    pub fn packed(&self) -> &[PackedSeed] {
        &self.packed
    }

    /// Textual entries in table order.
    pub fn textual(&self) -> &[String] {
        &self.textual
    }

    /// Lazy, restartable walk over the packed table with `port` attached.
    ///
    /// Each call starts from the first entry; the iterator holds no state
    /// shared with any provider.
    pub fn packed_peers(&self, port: u16) -> PackedPeers<'_> {
        PackedPeers {
            seeds: self.packed.iter(),
            port,
        }
    }

    /// True when both tables are empty.
    pub fn is_empty(&self) -> bool {
        self.packed.is_empty() && self.textual.is_empty()
    }
}

/// Iterator returned by [`SeedTable::packed_peers`].
#[derive(Debug, Clone)]
pub struct PackedPeers<'a> {
    seeds: slice::Iter<'a, PackedSeed>,
    port: u16,
}

impl Iterator for PackedPeers<'_> {
    type Item = SocketAddr;

    fn next(&mut self) -> Option<Self::Item> {
        self.seeds.next().map(|seed| seed.socket_addr(self.port))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seeds.size_hint()
    }
}

impl ExactSizeIterator for PackedPeers<'_> {}

impl FusedIterator for PackedPeers<'_> {}
