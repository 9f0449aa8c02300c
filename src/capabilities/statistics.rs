//! Statistics capability
//!
//! Optional counters the engine updates as it serves operations.
//!
//! ## Ownership Invariant
//!
//! A statistics collector must NOT be shared between two live database
//! handles: updates are intentionally unsynchronized beyond individual
//! counters, and cross-handle sharing produces meaningless numbers. This
//! is an ownership rule, not a suggestion; [`Statistics::claim`] gives the
//! engine's open path a runtime hook to enforce it.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Events counted by a statistics collector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Ticker {
    /// Block reads served from the block cache
    BlockCacheHit = 0,
    /// Block reads that missed the block cache
    BlockCacheMiss = 1,
    /// Bytes read from table files
    BytesRead = 2,
    /// Bytes written to table files and the WAL
    BytesWritten = 3,
    /// Entries dropped by compaction (obsolete or filtered)
    CompactionKeyDropped = 4,
    /// Microseconds writers spent stalled on compaction backlog
    StallMicros = 5,
}

impl Ticker {
    /// Number of defined tickers
    pub const COUNT: usize = 6;
}

/// Counter sink updated by a single live database handle.
///
/// See the module docs for the single-owner rule.
pub trait Statistics: Send + Sync {
    /// Add `count` to a ticker
    fn record_tick(&self, ticker: Ticker, count: u64);

    /// Current value of a ticker
    fn tick_count(&self, ticker: Ticker) -> u64;

    /// Called by the engine's open path to take exclusive ownership.
    /// Returns false if another live handle already owns this collector,
    /// in which case open must fail. The default is permissive for
    /// collectors that cannot track ownership.
    fn claim(&self) -> bool {
        true
    }

    /// Called when the owning handle closes; pairs with a successful
    /// [`claim`](Statistics::claim)
    fn release(&self) {}
}

/// Atomic-counter statistics collector with ownership tracking
#[derive(Debug, Default)]
pub struct BasicStatistics {
    tickers: [AtomicU64; Ticker::COUNT],
    claimed: AtomicBool,
}

impl BasicStatistics {
    /// Create a collector with all tickers at zero
    pub fn new() -> Self {
        Self::default()
    }
}

impl Statistics for BasicStatistics {
    fn record_tick(&self, ticker: Ticker, count: u64) {
        self.tickers[ticker as usize].fetch_add(count, Ordering::Relaxed);
    }

    fn tick_count(&self, ticker: Ticker) -> u64 {
        self.tickers[ticker as usize].load(Ordering::Relaxed)
    }

    fn claim(&self) -> bool {
        !self.claimed.swap(true, Ordering::AcqRel)
    }

    fn release(&self) {
        self.claimed.store(false, Ordering::Release);
    }
}
