//! Background compaction filtering capability
//!
//! A compaction filter is invoked for each live entry visited by a
//! background compaction, and may keep, drop, or rewrite the entry.

/// Verdict of a compaction filter for a single entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterDecision {
    /// Keep the entry unchanged
    Keep,

    /// Drop the entry from the output of the compaction
    Remove,

    /// Replace the entry's value in the output of the compaction
    Replace(Vec<u8>),
}

/// Per-entry keep/drop/replace decision during background compaction.
///
/// The filter sees each entry at most once per compaction and must be a
/// pure function of its inputs: compactions of overlapping ranges may run
/// concurrently on multiple background threads.
pub trait CompactionFilter: Send + Sync {
    /// Identifying name, written to the info log at open
    fn name(&self) -> &'static str;

    /// Decide the fate of one entry. `level` is the output level of the
    /// compaction that visited it.
    fn filter(&self, level: u32, key: &[u8], value: &[u8]) -> FilterDecision;
}
