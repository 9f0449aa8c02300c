//! Per-write options

use serde::{Deserialize, Serialize};

/// Options for a single write operation.
///
/// The two flags are orthogonal. `sync = true, disable_wal = true` is
/// legal: the write skips the log entirely, so sync contributes nothing to
/// that write's log durability, but the engine still honors it for
/// whatever it does persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOptions {
    /// Flush the write from the OS buffer cache before the operation is
    /// considered complete. With `sync = false` a machine crash (not a
    /// mere process crash) may lose recent writes, with the crash
    /// semantics of the `write` system call; `sync = true` adds the
    /// semantics of a trailing `fsync`. Default: false
    pub sync: bool,

    /// Skip the write-ahead log for this write. The write may be lost
    /// after a crash. Default: false
    pub disable_wal: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            sync: false,
            disable_wal: false,
        }
    }
}
