//! Snapshot capability
//!
//! A snapshot is an immutable point-in-time view of the database. The
//! engine creates and releases snapshots; the configuration layer only
//! carries borrowed references to them in
//! [`ReadOptions`](crate::ReadOptions).

/// Immutable point-in-time view of the database.
///
/// A snapshot passed to a read must belong to the database being read and
/// must not have been released. The engine rejects a detectable violation
/// as [`StrataError::InvalidSnapshot`](crate::StrataError::InvalidSnapshot);
/// an undetectable one is a precondition failure.
pub trait Snapshot {
    /// Sequence number of the last write visible through this snapshot
    fn sequence_number(&self) -> u64;
}
