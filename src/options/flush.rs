//! Per-flush options

use serde::{Deserialize, Serialize};

/// Options for a single flush operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlushOptions {
    /// Block until the flush is observably complete. When false, the
    /// flush is requested and the call returns immediately.
    /// Default: true
    pub wait: bool,
}

impl Default for FlushOptions {
    fn default() -> Self {
        Self { wait: true }
    }
}
