//! Key ordering capability
//!
//! The comparator defines the total order over keys in the database. Its
//! name is a durable identity: the engine records it when a database is
//! created and must refuse to open existing data with a comparator whose
//! name or ordering differs.

use std::cmp::Ordering;

/// Total order over keys.
///
/// ## Stability Requirement
///
/// The comparator supplied at open must have the same name and order keys
/// *exactly* the same as the comparator provided to previous opens of the
/// same database. Changing it after data exists is a capability mismatch
/// the engine reports as an error, never something it silently accepts.
pub trait Comparator: Send + Sync {
    /// Durable identity of this ordering, matched against persisted state
    fn name(&self) -> &'static str;

    /// Three-way comparison of two keys
    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering;

    /// Shorten `start` to a key in `[start, limit)` if a shorter separator
    /// exists. Used to shrink index entries; a no-op is always correct.
    fn find_shortest_separator(&self, _start: &mut Vec<u8>, _limit: &[u8]) {}

    /// Change `key` to a short key ordering at or after it.
    /// A no-op is always correct.
    fn find_short_successor(&self, _key: &mut Vec<u8>) {}
}

/// Lexicographic byte-wise ordering; the default comparator
#[derive(Debug, Clone, Copy, Default)]
pub struct BytewiseComparator;

impl Comparator for BytewiseComparator {
    fn name(&self) -> &'static str {
        "stratakv.BytewiseComparator"
    }

    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        a.cmp(b)
    }

    fn find_shortest_separator(&self, start: &mut Vec<u8>, limit: &[u8]) {
        // Find length of common prefix
        let min_len = start.len().min(limit.len());
        let mut diff_index = 0;
        while diff_index < min_len && start[diff_index] == limit[diff_index] {
            diff_index += 1;
        }

        // One string is a prefix of the other; do not shorten
        if diff_index >= min_len {
            return;
        }

        let diff_byte = start[diff_index];
        if diff_byte < 0xff && diff_byte + 1 < limit[diff_index] {
            start[diff_index] = diff_byte + 1;
            start.truncate(diff_index + 1);
            debug_assert_eq!(self.compare(start, limit), Ordering::Less);
        }
    }

    fn find_short_successor(&self, key: &mut Vec<u8>) {
        // Find first byte that can be incremented, drop the rest
        for i in 0..key.len() {
            if key[i] != 0xff {
                key[i] += 1;
                key.truncate(i + 1);
                return;
            }
        }
        // key is a run of 0xff bytes; leave it unchanged
    }
}
