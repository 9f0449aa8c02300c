//! Block cache capability
//!
//! A capacity-bounded key→value store the engine uses to cache
//! uncompressed blocks read from table files.

/// Capacity-bounded byte key→value store.
///
/// If no cache is configured on
/// [`DatabaseOptions`](crate::DatabaseOptions) and
/// [`no_block_cache`](crate::DatabaseOptions::no_block_cache) is false,
/// the engine creates an internal 8 MiB cache at open time; the
/// configuration itself never allocates one.
///
/// Implementations are shared across foreground readers and background
/// compactions, so every method takes `&self` and must be internally
/// synchronized.
pub trait Cache: Send + Sync {
    /// Insert a value, accounting `charge` bytes against the capacity.
    /// May evict other entries to stay within budget.
    fn insert(&self, key: &[u8], value: Vec<u8>, charge: usize);

    /// Look up a cached value
    fn lookup(&self, key: &[u8]) -> Option<Vec<u8>>;

    /// Drop an entry if present
    fn erase(&self, key: &[u8]);

    /// Capacity in bytes this cache was created with
    fn capacity(&self) -> usize;
}
