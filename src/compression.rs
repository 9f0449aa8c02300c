//! Block compression configuration
//!
//! Database contents are stored in a set of blocks, each of which holds a
//! sequence of key-value pairs. Each block may be compressed before being
//! stored in a file; [`CompressionType`] names the algorithm used.
//!
//! ## Persistent Format Coupling
//!
//! The numeric value of each `CompressionType` variant is written into the
//! on-disk block format. Existing values must NEVER be renumbered; a new
//! algorithm gets a new, appended value.

use serde::{Deserialize, Serialize};

use crate::error::StrataError;

/// Compression algorithm applied to blocks before they are written.
///
/// The discriminants are part of the persistent format on disk. Do not
/// change the values of existing entries; only append new ones.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompressionType {
    /// Store blocks uncompressed
    None = 0x0,

    /// Lightweight, fast compression. The default: it rarely hurts and
    /// often helps, and incompressible input is detected and stored raw.
    Snappy = 0x1,

    /// Zlib/deflate-style compression; slower, better ratio
    Zlib = 0x2,

    /// BZip2-style compression; slowest, best ratio
    Bzip2 = 0x3,
}

impl CompressionType {
    /// The persistent on-disk value for this algorithm
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for CompressionType {
    type Error = StrataError;

    /// Decode a persisted compression tag. Unknown values are a corruption
    /// or version-skew signal, reported as an invalid argument.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x0 => Ok(CompressionType::None),
            0x1 => Ok(CompressionType::Snappy),
            0x2 => Ok(CompressionType::Zlib),
            0x3 => Ok(CompressionType::Bzip2),
            other => Err(StrataError::InvalidArgument(format!(
                "unknown compression type tag: {:#x}",
                other
            ))),
        }
    }
}

impl Default for CompressionType {
    fn default() -> Self {
        CompressionType::Snappy
    }
}

/// Algorithm-specific tuning for block compression.
///
/// The three values are raw integers forwarded to the compression backend
/// (window size, effort level, strategy). There are no cross-field
/// invariants here; algorithm-specific validity is the backend's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionOptions {
    /// Base-two log of the compression window size (negative selects a
    /// raw/headerless stream where the backend supports it)
    pub window_bits: i32,

    /// Compression effort level (-1 selects the backend default)
    pub level: i32,

    /// Backend-specific strategy selector
    pub strategy: i32,
}

impl CompressionOptions {
    /// Create compression options with explicit tuning values
    pub fn new(window_bits: i32, level: i32, strategy: i32) -> Self {
        Self {
            window_bits,
            level,
            strategy,
        }
    }
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            window_bits: -14,
            level: -1,
            strategy: 0,
        }
    }
}
