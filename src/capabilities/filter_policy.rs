//! Probabilistic read filter capability
//!
//! A filter policy builds a compact membership summary for the keys in a
//! table file. Reads consult the summary first, skipping disk accesses for
//! keys the summary proves absent (e.g. a Bloom filter).

/// Probabilistic membership structure that reduces read amplification.
///
/// The summary bytes are persisted alongside table files, so the policy's
/// name participates in format identity: a summary created by one policy
/// must only be queried through a policy with the same name.
pub trait FilterPolicy: Send + Sync {
    /// Identifying name, persisted with each filter block
    fn name(&self) -> &'static str;

    /// Build a filter summarizing `keys` (which may contain duplicates)
    fn create_filter(&self, keys: &[&[u8]]) -> Vec<u8>;

    /// Return whether `key` may be present in the set summarized by
    /// `filter`. False positives are allowed; false negatives are not.
    fn key_may_match(&self, key: &[u8], filter: &[u8]) -> bool;
}
