//! # StrataKV Options
//!
//! The configuration contract for the StrataKV log-structured merge
//! storage engine:
//! - Database-wide options with safe, internally consistent defaults
//! - Per-operation read/write/flush options
//! - Opaque capability handles (comparator, merge operator, filters,
//!   cache, logger, env, statistics)
//! - A bulk-load preset transform
//!
//! The engine itself — memtables, sorted-table files, the write-ahead
//! log, the compaction scheduler — lives elsewhere; this crate only
//! defines the knobs that parameterize it and the contracts those knobs
//! must satisfy.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Caller                                │
//! │   DatabaseOptions (once, at open)   Read/Write/FlushOptions  │
//! │              │                         (per call)            │
//! └──────────────┼─────────────────────────────┼────────────────┘
//!                ▼                             ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Storage Engine                            │
//! │      open(options, path)      get / put / flush              │
//! └──────────────┬──────────────────────────────────────────────┘
//!                │ shared capability handles
//!          ┌─────┴──────┬──────────┬───────────┐
//!          ▼            ▼          ▼           ▼
//!    ┌──────────┐ ┌──────────┐ ┌────────┐ ┌────────────┐
//!    │Comparator│ │  Cache   │ │ Logger │ │ Statistics │
//!    └──────────┘ └──────────┘ └────────┘ └────────────┘
//! ```
//!
//! ## Usage
//!
//! ```
//! use stratakv_options::DatabaseOptions;
//!
//! let mut options = DatabaseOptions::default();
//! options.create_if_missing = true;
//! options.validate().expect("defaults are internally consistent");
//!
//! // Ingest-heavy workload: load everything into level 0, compact later
//! options.prepare_for_bulk_load();
//! assert!(options.disable_auto_compactions);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;

pub mod capabilities;
pub mod compression;
pub mod options;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, StrataError};

pub use capabilities::{
    BasicStatistics, BytewiseComparator, Cache, CompactionFilter, Comparator, DefaultEnv, Env,
    FileLogger, FilterDecision, FilterPolicy, Logger, MemoryLogger, MergeOperator, Snapshot,
    Statistics, Ticker, TracingLogger,
};
pub use compression::{CompressionOptions, CompressionType};
pub use options::{DatabaseOptions, FlushOptions, ReadOptions, WalTtl, WriteOptions};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the options contract
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
