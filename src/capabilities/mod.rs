//! Capability Module
//!
//! Opaque extension points consumed by the storage engine and carried by
//! the configuration. The configuration stores shared handles
//! (`Arc<dyn Trait>`) to these capabilities; it does not implement the
//! engine behavior behind them.
//!
//! ## Ownership
//!
//! All handles are shared-ownership: the configuration keeps the underlying
//! capability alive for at least as long as any database handle that was
//! opened with it. [`Statistics`] carries one extra rule: a statistics
//! collector must not be shared across two live database handles, because
//! its updates are unsynchronized.

mod cache;
mod compaction_filter;
mod comparator;
mod env;
mod filter_policy;
mod logger;
mod merge_operator;
mod snapshot;
mod statistics;

pub use cache::Cache;
pub use compaction_filter::{CompactionFilter, FilterDecision};
pub use comparator::{BytewiseComparator, Comparator};
pub use env::{DefaultEnv, Env};
pub use filter_policy::FilterPolicy;
pub use logger::{FileLogger, Logger, MemoryLogger, TracingLogger};
pub use merge_operator::MergeOperator;
pub use snapshot::Snapshot;
pub use statistics::{BasicStatistics, Statistics, Ticker};
