//! Options Module
//!
//! The configuration contract consumed by the storage engine.
//!
//! ## Lifetimes
//!
//! - [`DatabaseOptions`] is passed once to the engine's open routine and
//!   retained for the lifetime of the handle.
//! - [`ReadOptions`], [`WriteOptions`], and [`FlushOptions`] are cheap
//!   per-call value types, constructed fresh (or reused) by the caller for
//!   each operation.

mod db;
mod flush;
mod read;
mod write;

pub use db::{DatabaseOptions, WalTtl};
pub use flush::FlushOptions;
pub use read::ReadOptions;
pub use write::WriteOptions;
