//! Read-modify-write merge capability
//!
//! A merge operator lets callers issue associative updates without a
//! preceding read. The engine applies it during reads and compactions to
//! collapse a stack of operands into a single value.

/// User-supplied associative combination function over values.
///
/// A database opened without a merge operator reports merge operations as
/// [`StrataError::NotSupported`](crate::StrataError::NotSupported). Like
/// the comparator, the operator's name and semantics must match across
/// reopens of the same database; the one permitted upgrade is introducing
/// an operator to a database that never had one.
pub trait MergeOperator: Send + Sync {
    /// Durable identity of this operator, matched against persisted state
    fn name(&self) -> &'static str;

    /// Combine `existing` (if any) with `operand`, producing the merged
    /// value. Returning `None` signals a merge failure, which the engine
    /// surfaces as corruption of the affected key.
    fn merge(&self, key: &[u8], existing: Option<&[u8]>, operand: &[u8]) -> Option<Vec<u8>>;
}

impl core::fmt::Debug for dyn MergeOperator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MergeOperator")
            .field("name", &self.name())
            .finish()
    }
}
