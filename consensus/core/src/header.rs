//! Read-only header-chain abstraction used by difficulty retargeting.
//!
//! The difficulty core never owns chain state. It walks a borrowed view of
//! the active chain supplied by the chain manager: `ChainHeader` is that
//! view, and `HeaderChain` is a minimal arena-backed implementation used by
//! collaborators that keep the active chain in memory, and by tests.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// Read-only view of one header in the adopted chain.
///
/// Implementations are expected to be cheap handles (an index into an
/// arena, an `Arc`-backed node); retargeting clones them freely while
/// walking ancestors. The view must be stable for the duration of a call.
pub trait ChainHeader: Clone {
    /// Height of this header in the chain (genesis is 0)
    fn height(&self) -> u64;

    /// Block time in seconds since the Unix epoch
    fn timestamp(&self) -> i64;

    /// Compact difficulty target claimed by this header
    fn bits(&self) -> u32;

    /// The ancestor at `height`, or `None` when `height` is above this
    /// header or the chain view does not reach back that far.
    fn ancestor(&self, height: u64) -> Option<Self>;
}

/// Per-header metadata consumed by difficulty retargeting
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct HeaderRecord {
    /// Block time in seconds since the Unix epoch
    pub timestamp: i64,
    /// Compact difficulty target from the header
    pub bits: u32,
}

/// Append-only arena holding the active chain's header metadata.
///
/// Height equals index, so ancestor lookup is a bounds check.
#[derive(Clone, Debug, Default)]
pub struct HeaderChain {
    records: Vec<HeaderRecord>,
}

impl HeaderChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Appends the next header; its height is its index
    pub fn push(&mut self, timestamp: i64, bits: u32) {
        self.records.push(HeaderRecord { timestamp, bits });
    }

    /// Number of headers in the chain
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the chain holds no headers
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// View of the chain tip, or `None` for an empty chain
    pub fn tip(&self) -> Option<ChainLink<'_>> {
        self.records
            .len()
            .checked_sub(1)
            .map(|height| ChainLink { chain: self, height: height as u64 })
    }

    /// View of the header at `height`
    pub fn link_at(&self, height: u64) -> Option<ChainLink<'_>> {
        (height < self.records.len() as u64).then_some(ChainLink { chain: self, height })
    }

    fn record(&self, height: u64) -> &HeaderRecord {
        &self.records[height as usize]
    }
}

/// Borrowed handle to one header inside a [`HeaderChain`]
#[derive(Clone, Copy, Debug)]
pub struct ChainLink<'a> {
    chain: &'a HeaderChain,
    height: u64,
}

impl ChainHeader for ChainLink<'_> {
    fn height(&self) -> u64 {
        self.height
    }

    fn timestamp(&self) -> i64 {
        self.chain.record(self.height).timestamp
    }

    fn bits(&self) -> u32 {
        self.chain.record(self.height).bits
    }

    fn ancestor(&self, height: u64) -> Option<Self> {
        (height <= self.height).then_some(ChainLink { chain: self.chain, height })
    }
}
