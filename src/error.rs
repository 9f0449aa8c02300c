//! Error types for StrataKV options
//!
//! Provides a unified error type for the configuration boundary.
//!
//! The configuration types themselves do no I/O and perform no validation
//! beyond what default construction guarantees; errors here surface either
//! from the explicit [`validate`](crate::DatabaseOptions::validate) pass or
//! from the engine operations that consume the configuration.

use thiserror::Error;

/// Result type alias using StrataError
pub type Result<T> = std::result::Result<T, StrataError>;

/// Unified error type for the StrataKV configuration boundary
#[derive(Debug, Error)]
pub enum StrataError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Precondition Violations
    // -------------------------------------------------------------------------
    /// An option value is out of its documented range, or a cross-field
    /// relationship does not hold.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A snapshot passed in [`ReadOptions`](crate::ReadOptions) is stale or
    /// belongs to a different database.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    // -------------------------------------------------------------------------
    // Capability Mismatches
    // -------------------------------------------------------------------------
    /// The configured comparator does not match the one that created the
    /// existing persisted state. Fatal to open.
    #[error("Comparator mismatch: database created with '{existing}', configured with '{configured}'")]
    ComparatorMismatch {
        /// Comparator name recorded in the persisted state
        existing: String,
        /// Comparator name in the supplied configuration
        configured: String,
    },

    // -------------------------------------------------------------------------
    // Unsupported Operations
    // -------------------------------------------------------------------------
    /// An operation requires a capability that was not configured
    /// (e.g. a merge without a merge operator).
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}
