//! Per-read options

use crate::capabilities::Snapshot;

/// Options for a single read operation.
///
/// A cheap, call-scoped value type. The snapshot, when supplied, is
/// borrowed: these options never own, outlive, or release it.
#[derive(Clone, Copy)]
pub struct ReadOptions<'a> {
    /// Verify all data read from storage against its checksums.
    /// Default: false
    pub verify_checksums: bool,

    /// Cache the blocks read for this operation. Bulk scans should set
    /// this to false to avoid evicting the working set. Default: true
    pub fill_cache: bool,

    /// Read as of this snapshot, which must belong to the database being
    /// read and must not have been released. If None, the engine takes an
    /// implicit snapshot at the start of the read. Default: None
    pub snapshot: Option<&'a dyn Snapshot>,
}

impl<'a> ReadOptions<'a> {
    /// Read options with explicit checksum and cache-fill behavior
    pub fn new(verify_checksums: bool, fill_cache: bool) -> Self {
        Self {
            verify_checksums,
            fill_cache,
            snapshot: None,
        }
    }

    /// Pin this read to a snapshot
    pub fn with_snapshot(mut self, snapshot: &'a dyn Snapshot) -> Self {
        self.snapshot = Some(snapshot);
        self
    }
}

impl Default for ReadOptions<'_> {
    fn default() -> Self {
        Self {
            verify_checksums: false,
            fill_cache: true,
            snapshot: None,
        }
    }
}
