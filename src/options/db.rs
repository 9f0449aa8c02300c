//! Database-wide options
//!
//! [`DatabaseOptions`] is the aggregate configuration passed to the
//! engine's open routine. Construction performs no I/O and allocates no
//! capability objects beyond the trivial defaults (bytewise comparator,
//! std environment); in particular no block cache is created here — cache
//! creation is deferred to open time.
//!
//! ## Mutability
//!
//! The configuration is conceptually immutable for the lifetime of an
//! open handle, except for the fields documented as dynamically
//! changeable (`block_size`, `block_restart_interval`, `compression`);
//! the engine synchronizes reads of those against its background threads.
//!
//! ## Sentinels
//!
//! Every trigger/size/factor field is either a strictly positive
//! magnitude or a documented sentinel (negative, zero, or max-value)
//! meaning "disabled"/"unbounded". The typed accessors near the bottom of
//! the impl decode the sentinels so callers do not have to compare
//! against magic values.

use std::path::PathBuf;
use std::sync::Arc;

use crate::capabilities::{
    BytewiseComparator, Cache, CompactionFilter, Comparator, DefaultEnv, Env, FilterPolicy,
    Logger, MergeOperator, Statistics,
};
use crate::compression::{CompressionOptions, CompressionType};
use crate::error::{Result, StrataError};

const KIB: usize = 1024;
const MIB: usize = 1024 * 1024;

/// Decoded view of `wal_ttl_seconds`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalTtl {
    /// Delete WAL segments as soon as they are no longer required (0)
    DeleteWhenObsolete,

    /// Archive WAL segments and delete them after this many seconds
    Keep(u64),

    /// Never delete WAL segments (`u64::MAX`)
    NeverDelete,
}

/// Database-scoped configuration; one instance per open database handle
#[derive(Clone)]
pub struct DatabaseOptions {
    // -------------------------------------------------------------------------
    // Identity & Extension Capabilities
    // -------------------------------------------------------------------------
    /// Comparator defining the order of keys in the database.
    ///
    /// Must have the same name and order keys exactly the same as the
    /// comparator used by previous opens of the same database.
    /// Default: lexicographic byte-wise ordering
    pub comparator: Arc<dyn Comparator>,

    /// Merge operator for read-modify-write updates. A merge issued on a
    /// database without one fails with a not-supported error.
    /// Default: None
    pub merge_operator: Option<Arc<dyn MergeOperator>>,

    /// Filter invoked during background compaction to drop or rewrite
    /// entries. Default: None
    pub compaction_filter: Option<Arc<dyn CompactionFilter>>,

    /// Probabilistic read filter (e.g. a Bloom filter policy) to reduce
    /// disk reads for absent keys. Default: None
    pub filter_policy: Option<Arc<dyn FilterPolicy>>,

    // -------------------------------------------------------------------------
    // Lifecycle & Safety
    // -------------------------------------------------------------------------
    /// Create the database if it is missing. Default: false
    pub create_if_missing: bool,

    /// Raise an error if the database already exists. Default: false
    pub error_if_exists: bool,

    /// Aggressively check processed data and stop early on any sign of
    /// corruption. Trades availability for early detection: one bad entry
    /// can make a large part of the database unreadable. Default: false
    pub paranoid_checks: bool,

    // -------------------------------------------------------------------------
    // Environment & Info Log
    // -------------------------------------------------------------------------
    /// Platform services (time, threads, files) used by the engine.
    /// Default: std-backed environment
    pub env: Arc<dyn Env>,

    /// Sink for engine progress/error messages. If None, the engine logs
    /// to a file in the same directory as the database contents.
    /// Default: None
    pub info_log: Option<Arc<dyn Logger>>,

    // -------------------------------------------------------------------------
    // Memory & Throughput
    // -------------------------------------------------------------------------
    /// Bytes of data to build up in memory (backed by an unsorted WAL)
    /// before converting to a sorted on-disk file. Larger buffers improve
    /// throughput, especially for bulk loads, at the cost of memory and
    /// recovery time. Default: 4 MiB
    pub write_buffer_size: usize,

    /// Maximum number of write buffers held in memory; 2 lets new writes
    /// proceed into one buffer while the other flushes. Default: 2
    pub max_write_buffer_number: i32,

    /// Number of open files the database may use (budget one per 2 MiB of
    /// working set). `-1` means unbounded. Default: 1000
    pub max_open_files: i32,

    /// Cache for uncompressed blocks. If None and `no_block_cache` is
    /// false, the engine creates an internal 8 MiB cache at open time.
    /// Default: None
    pub block_cache: Option<Arc<dyn Cache>>,

    /// Disable block caching entirely. When true, `block_cache` must be
    /// None. Default: false
    pub no_block_cache: bool,

    /// Approximate bytes of user data packed per block (uncompressed; the
    /// unit read from disk may be smaller when compression is enabled).
    /// Can be changed dynamically. Default: 4 KiB
    pub block_size: usize,

    /// Number of keys between restart points for delta encoding of keys.
    /// Can be changed dynamically; most callers should leave it alone.
    /// Default: 16
    pub block_restart_interval: i32,

    // -------------------------------------------------------------------------
    // Compression
    // -------------------------------------------------------------------------
    /// Algorithm used to compress blocks. Can be changed dynamically.
    /// Default: Snappy — lightweight, fast, and rarely worth disabling
    pub compression: CompressionType,

    /// Per-level compression override. Empty means the scalar
    /// `compression` applies to every level; otherwise the vector should
    /// hold one entry per level (see [`validate`](Self::validate)).
    /// Default: empty
    pub compression_per_level: Vec<CompressionType>,

    /// Algorithm-specific compression tuning
    pub compression_opts: CompressionOptions,

    // -------------------------------------------------------------------------
    // LSM Shape
    // -------------------------------------------------------------------------
    /// Number of levels in the tree. Default: 7
    pub num_levels: i32,

    /// Number of level-0 files that triggers compaction. Negative
    /// disables compaction-by-file-count. Default: 4
    pub level0_file_num_compaction_trigger: i32,

    /// Soft limit on level-0 files; writes are slowed at this point.
    /// Negative disables the slowdown. Default: 8
    pub level0_slowdown_writes_trigger: i32,

    /// Hard limit on level-0 files; writes stop at this point.
    /// Default: 12
    pub level0_stop_writes_trigger: i32,

    /// Highest level a freshly compacted memtable is pushed to if it
    /// creates no overlap, avoiding expensive level-0 → 1 compactions for
    /// fresh data. Default: 2
    pub max_mem_compaction_level: i32,

    /// Per-file target size at level 1; level L targets
    /// `target_file_size_base * target_file_size_multiplier^(L-1)`.
    /// Default: 2 MiB
    pub target_file_size_base: u64,

    /// Growth factor for per-file targets between levels. Default: 1
    /// (files at every level have similar size)
    pub target_file_size_multiplier: u32,

    /// Total byte budget for level 1; level L holds up to
    /// `max_bytes_for_level_base * max_bytes_for_level_multiplier^(L-1)`.
    /// Default: 10 MiB
    pub max_bytes_for_level_base: u64,

    /// Growth factor for level byte budgets. Default: 10
    pub max_bytes_for_level_multiplier: u32,

    /// Per-level scaling applied on top of
    /// `max_bytes_for_level_multiplier`; entry `L-1` scales the step from
    /// level L to L+1. Empty means 1 for every level. Default: empty
    pub max_bytes_for_level_multiplier_additional: Vec<u32>,

    /// Cap on total bytes in a compaction after expanding the lower-level
    /// file set, in units of the level's target file size. Default: 25
    pub expanded_compaction_factor: u32,

    /// Cap on bytes picked from the source level for one compaction, in
    /// units of the level's target file size. Default: 1
    pub source_compaction_factor: u32,

    /// Cap on grandparent (level+2) overlap before the compaction starts
    /// a new output file, in units of the target file size. Default: 10
    pub max_grandparent_overlap_factor: u32,

    // -------------------------------------------------------------------------
    // Observability
    // -------------------------------------------------------------------------
    /// Metrics collector. Must NOT be shared between two live database
    /// handles; updates are unsynchronized (see
    /// [`Statistics`](crate::Statistics)). Default: None
    pub statistics: Option<Arc<dyn Statistics>>,

    // -------------------------------------------------------------------------
    // Durability & IO
    // -------------------------------------------------------------------------
    /// Do not sync table file contents to stable storage; leave them to
    /// the OS buffer cache. Useful while bulk loading, after which the
    /// caller should sync the filesystem. Default: false
    pub disable_data_sync: bool,

    /// Issue fsync instead of fdatasync on every sync, for filesystems
    /// (e.g. ext3) that can lose files after a reboot. Default: false
    pub use_fsync: bool,

    /// Seconds between deploy-stats log lines; `-1` disables them.
    /// Default: 1800
    pub db_stats_log_interval: i32,

    /// Directory for info log files. Empty means alongside the database
    /// contents; otherwise log file names are prefixed with the data
    /// dir's absolute path. Default: empty
    pub db_log_dir: PathBuf,

    /// Disable compaction triggered by read misses. With a filter policy
    /// and fast storage a miss per level is cheap, making seek-triggered
    /// compaction counterproductive. Default: false
    pub disable_seek_compaction: bool,

    /// Period between scans for obsolete files, in microseconds. 0 means
    /// obsolete files are removed after every compaction run. Default: 0
    pub delete_obsolete_files_period_micros: u64,

    /// Maximum number of concurrent background compactions. Default: 1
    pub max_background_compactions: u32,

    /// Roll the info log once it exceeds this many bytes; 0 keeps a
    /// single log file. Default: 0
    pub max_log_file_size: usize,

    /// Roll the info log after it has been active this many seconds;
    /// 0 disables time-based rolling. Default: 0
    pub log_file_time_to_roll: u64,

    /// Maximum number of rolled info log files to keep. Default: 1000
    pub keep_log_file_num: usize,

    /// Writes are stalled while any level's compaction backlog score
    /// exceeds this value. Ignored when <= 1.0. Default: 0.0 (disabled)
    pub rate_limit: f64,

    /// Longest a single write may be stalled by `rate_limit`, in
    /// milliseconds. Default: 1000
    pub rate_limit_delay_milliseconds: u32,

    /// Roll the manifest file over once it reaches this size, deleting
    /// the old one. Default: `u64::MAX` (never roll)
    pub max_manifest_file_size: u64,

    /// Number of shard bits for the table cache. Default: 4
    pub table_cache_numshardbits: u32,

    /// Disable automatic background compaction; manual compactions can
    /// still be issued. Default: false
    pub disable_auto_compactions: bool,

    /// Seconds to keep a WAL segment after it stops being live. 0 deletes
    /// segments as soon as they are unneeded; `u64::MAX` keeps them
    /// forever; anything else archives them for that long. Default: 0
    pub wal_ttl_seconds: u64,

    /// Bytes to preallocate for manifest files, reducing random IO from
    /// manifest growth. Default: 4 MiB
    pub manifest_preallocation_size: usize,

    /// Drop duplicate/deleted keys while flushing a memtable.
    /// Default: true
    pub purge_redundant_kvs_while_flush: bool,

    // -------------------------------------------------------------------------
    // Read-path IO Posture
    // -------------------------------------------------------------------------
    /// Let the OS buffer data read from storage. Default: true
    pub allow_os_buffer: bool,

    /// Let the OS/filesystem read ahead around block reads.
    /// Default: true
    pub allow_readahead: bool,

    /// Let compaction reads use OS readahead, overriding
    /// `allow_readahead` for those reads. Default: true
    pub allow_readahead_compactions: bool,

    /// Allow mmap for reading table files. Default: false (predictable
    /// memory behavior)
    pub allow_mmap_reads: bool,

    /// Allow mmap for writing files. Default: true
    pub allow_mmap_writes: bool,

    /// Open files with close-on-exec so child processes do not inherit
    /// them. Default: true
    pub is_fd_close_on_exec: bool,

    /// Tolerate a corrupted WAL tail on recovery, losing the most recent
    /// writes instead of failing the open. Default: false
    pub skip_log_error_on_recovery: bool,
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        Self {
            comparator: Arc::new(BytewiseComparator),
            merge_operator: None,
            compaction_filter: None,
            filter_policy: None,
            create_if_missing: false,
            error_if_exists: false,
            paranoid_checks: false,
            env: Arc::new(DefaultEnv),
            info_log: None,
            write_buffer_size: 4 * MIB,
            max_write_buffer_number: 2,
            max_open_files: 1000,
            block_cache: None,
            no_block_cache: false,
            block_size: 4 * KIB,
            block_restart_interval: 16,
            compression: CompressionType::Snappy,
            compression_per_level: Vec::new(),
            compression_opts: CompressionOptions::default(),
            num_levels: 7,
            level0_file_num_compaction_trigger: 4,
            level0_slowdown_writes_trigger: 8,
            level0_stop_writes_trigger: 12,
            max_mem_compaction_level: 2,
            target_file_size_base: 2 * MIB as u64,
            target_file_size_multiplier: 1,
            max_bytes_for_level_base: 10 * MIB as u64,
            max_bytes_for_level_multiplier: 10,
            max_bytes_for_level_multiplier_additional: Vec::new(),
            expanded_compaction_factor: 25,
            source_compaction_factor: 1,
            max_grandparent_overlap_factor: 10,
            statistics: None,
            disable_data_sync: false,
            use_fsync: false,
            db_stats_log_interval: 1800,
            db_log_dir: PathBuf::new(),
            disable_seek_compaction: false,
            delete_obsolete_files_period_micros: 0,
            max_background_compactions: 1,
            max_log_file_size: 0,
            log_file_time_to_roll: 0,
            keep_log_file_num: 1000,
            rate_limit: 0.0,
            rate_limit_delay_milliseconds: 1000,
            max_manifest_file_size: u64::MAX,
            table_cache_numshardbits: 4,
            disable_auto_compactions: false,
            wal_ttl_seconds: 0,
            manifest_preallocation_size: 4 * MIB,
            purge_redundant_kvs_while_flush: true,
            allow_os_buffer: true,
            allow_readahead: true,
            allow_readahead_compactions: true,
            allow_mmap_reads: false,
            allow_mmap_writes: true,
            is_fd_close_on_exec: true,
            skip_log_error_on_recovery: false,
        }
    }
}

impl DatabaseOptions {
    /// Number of fields in the data model. [`dump`](Self::dump) logs
    /// exactly one line per field; keep this in sync when adding fields.
    pub const FIELD_COUNT: usize = 58;

    /// Create a configuration with default values for all fields
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Bulk Load Preset
    // =========================================================================

    /// Reconfigure for bulk loading: all data accumulates in level 0 with
    /// no automatic compaction, write buffers and file targets are
    /// widened, and data-file syncing is left to the OS.
    ///
    /// Returns `&mut self` to enable chaining. Idempotent: the overwritten
    /// fields are set to absolute values, and capability handles,
    /// comparator, and compression settings are never touched.
    ///
    /// After loading, issue a full-range manual compaction before relying
    /// on efficient reads — level-0-only storage defeats the engine's
    /// normal read-path assumptions.
    pub fn prepare_for_bulk_load(&mut self) -> &mut Self {
        // Never slow down or stop the ingest because of level-0 growth
        self.level0_file_num_compaction_trigger = -1;
        self.level0_slowdown_writes_trigger = -1;
        self.level0_stop_writes_trigger = i32::MAX;

        // No automatic compaction; the caller compacts manually after the
        // load completes
        self.disable_auto_compactions = true;
        self.disable_seek_compaction = true;

        // Leave table file syncing to the OS until the load finishes
        self.disable_data_sync = true;

        // A manual compaction should pick up all of level 0 in one run
        self.source_compaction_factor = u32::MAX;

        // Fewer, larger flushes and output files
        self.write_buffer_size = 64 * MIB;
        self.max_write_buffer_number = 6;
        self.target_file_size_base = 256 * MIB as u64;

        self
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Check cross-field relationships and documented ranges.
    ///
    /// This pass is explicit and optional: construction never runs it, and
    /// callers who skip it get the original permissive semantics. Engines
    /// are expected to run it once at open time.
    pub fn validate(&self) -> Result<()> {
        if self.write_buffer_size == 0 {
            return Err(invalid("write_buffer_size must be positive"));
        }
        if self.max_write_buffer_number < 1 {
            return Err(invalid("max_write_buffer_number must be at least 1"));
        }
        if self.max_open_files < 1 && self.max_open_files != -1 {
            return Err(invalid(
                "max_open_files must be at least 1, or -1 for unbounded",
            ));
        }
        if self.block_size == 0 {
            return Err(invalid("block_size must be positive"));
        }
        if self.block_restart_interval < 1 {
            return Err(invalid("block_restart_interval must be at least 1"));
        }
        if self.num_levels < 1 {
            return Err(invalid("num_levels must be at least 1"));
        }
        if self.max_background_compactions < 1 {
            return Err(invalid("max_background_compactions must be at least 1"));
        }
        if self.target_file_size_base == 0 || self.target_file_size_multiplier == 0 {
            return Err(invalid("target file size base/multiplier must be positive"));
        }
        if self.max_bytes_for_level_base == 0 || self.max_bytes_for_level_multiplier == 0 {
            return Err(invalid("level byte budget base/multiplier must be positive"));
        }
        if self.table_cache_numshardbits > 20 {
            return Err(invalid("table_cache_numshardbits must be at most 20"));
        }

        // Trigger ordering is only checkable when no trigger is disabled
        if self.level0_file_num_compaction_trigger >= 0
            && self.level0_slowdown_writes_trigger >= 0
            && self.level0_stop_writes_trigger >= 0
        {
            if self.level0_file_num_compaction_trigger > self.level0_slowdown_writes_trigger
                || self.level0_slowdown_writes_trigger > self.level0_stop_writes_trigger
            {
                return Err(invalid(
                    "level-0 triggers must satisfy compaction <= slowdown <= stop",
                ));
            }
        }

        if !self.compression_per_level.is_empty()
            && self.compression_per_level.len() != self.num_levels as usize
        {
            return Err(invalid(
                "compression_per_level must be empty or hold one entry per level",
            ));
        }

        if self.no_block_cache && self.block_cache.is_some() {
            return Err(invalid(
                "no_block_cache is set but a block_cache is configured",
            ));
        }

        if self.rate_limit > 0.0 && self.rate_limit <= 1.0 {
            tracing::warn!(
                rate_limit = self.rate_limit,
                "rate_limit values at or below 1.0 disable write stalling"
            );
        }

        Ok(())
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Log every field's current value, one line per field, for
    /// diagnostics written once at open time. Deterministic and
    /// non-mutating; [`FIELD_COUNT`](Self::FIELD_COUNT) lines are emitted.
    pub fn dump(&self, log: &dyn Logger) {
        let line = |name: &str, value: String| log.log(&format!("Options.{}: {}", name, value));

        line("comparator", self.comparator.name().to_string());
        line("merge_operator", capability_name(&self.merge_operator, |c| c.name()));
        line("compaction_filter", capability_name(&self.compaction_filter, |c| c.name()));
        line("filter_policy", capability_name(&self.filter_policy, |c| c.name()));
        line("create_if_missing", self.create_if_missing.to_string());
        line("error_if_exists", self.error_if_exists.to_string());
        line("paranoid_checks", self.paranoid_checks.to_string());
        line("env", self.env.name().to_string());
        line("info_log", presence(&self.info_log));
        line("write_buffer_size", self.write_buffer_size.to_string());
        line("max_write_buffer_number", self.max_write_buffer_number.to_string());
        line("max_open_files", self.max_open_files.to_string());
        line(
            "block_cache",
            match &self.block_cache {
                Some(cache) => format!("capacity={}", cache.capacity()),
                None => "(none)".to_string(),
            },
        );
        line("no_block_cache", self.no_block_cache.to_string());
        line("block_size", self.block_size.to_string());
        line("block_restart_interval", self.block_restart_interval.to_string());
        line("compression", format!("{:?}", self.compression));
        line("compression_per_level", format!("{:?}", self.compression_per_level));
        line(
            "compression_opts",
            format!(
                "window_bits={} level={} strategy={}",
                self.compression_opts.window_bits,
                self.compression_opts.level,
                self.compression_opts.strategy
            ),
        );
        line("num_levels", self.num_levels.to_string());
        line(
            "level0_file_num_compaction_trigger",
            self.level0_file_num_compaction_trigger.to_string(),
        );
        line(
            "level0_slowdown_writes_trigger",
            self.level0_slowdown_writes_trigger.to_string(),
        );
        line("level0_stop_writes_trigger", self.level0_stop_writes_trigger.to_string());
        line("max_mem_compaction_level", self.max_mem_compaction_level.to_string());
        line("target_file_size_base", self.target_file_size_base.to_string());
        line("target_file_size_multiplier", self.target_file_size_multiplier.to_string());
        line("max_bytes_for_level_base", self.max_bytes_for_level_base.to_string());
        line(
            "max_bytes_for_level_multiplier",
            self.max_bytes_for_level_multiplier.to_string(),
        );
        line(
            "max_bytes_for_level_multiplier_additional",
            format!("{:?}", self.max_bytes_for_level_multiplier_additional),
        );
        line("expanded_compaction_factor", self.expanded_compaction_factor.to_string());
        line("source_compaction_factor", self.source_compaction_factor.to_string());
        line(
            "max_grandparent_overlap_factor",
            self.max_grandparent_overlap_factor.to_string(),
        );
        line("statistics", presence(&self.statistics));
        line("disable_data_sync", self.disable_data_sync.to_string());
        line("use_fsync", self.use_fsync.to_string());
        line("db_stats_log_interval", self.db_stats_log_interval.to_string());
        line("db_log_dir", self.db_log_dir.display().to_string());
        line("disable_seek_compaction", self.disable_seek_compaction.to_string());
        line(
            "delete_obsolete_files_period_micros",
            self.delete_obsolete_files_period_micros.to_string(),
        );
        line("max_background_compactions", self.max_background_compactions.to_string());
        line("max_log_file_size", self.max_log_file_size.to_string());
        line("log_file_time_to_roll", self.log_file_time_to_roll.to_string());
        line("keep_log_file_num", self.keep_log_file_num.to_string());
        line("rate_limit", self.rate_limit.to_string());
        line(
            "rate_limit_delay_milliseconds",
            self.rate_limit_delay_milliseconds.to_string(),
        );
        line("max_manifest_file_size", self.max_manifest_file_size.to_string());
        line("table_cache_numshardbits", self.table_cache_numshardbits.to_string());
        line("disable_auto_compactions", self.disable_auto_compactions.to_string());
        line("wal_ttl_seconds", self.wal_ttl_seconds.to_string());
        line(
            "manifest_preallocation_size",
            self.manifest_preallocation_size.to_string(),
        );
        line(
            "purge_redundant_kvs_while_flush",
            self.purge_redundant_kvs_while_flush.to_string(),
        );
        line("allow_os_buffer", self.allow_os_buffer.to_string());
        line("allow_readahead", self.allow_readahead.to_string());
        line(
            "allow_readahead_compactions",
            self.allow_readahead_compactions.to_string(),
        );
        line("allow_mmap_reads", self.allow_mmap_reads.to_string());
        line("allow_mmap_writes", self.allow_mmap_writes.to_string());
        line("is_fd_close_on_exec", self.is_fd_close_on_exec.to_string());
        line(
            "skip_log_error_on_recovery",
            self.skip_log_error_on_recovery.to_string(),
        );
    }

    /// [`dump`](Self::dump) through the configured info log; a no-op when
    /// no info log is configured
    pub fn dump_to_info_log(&self) {
        if let Some(log) = &self.info_log {
            self.dump(log.as_ref());
        }
    }

    // =========================================================================
    // Level Geometry
    // =========================================================================

    /// Per-file target size at `level` (>= 1):
    /// `target_file_size_base * target_file_size_multiplier^(level-1)`
    pub fn target_file_size_for_level(&self, level: u32) -> u64 {
        debug_assert!(level >= 1);
        let mut size = self.target_file_size_base;
        for _ in 1..level {
            size *= u64::from(self.target_file_size_multiplier);
        }
        size
    }

    /// Total byte budget at `level` (>= 1):
    /// `max_bytes_for_level_base * max_bytes_for_level_multiplier^(level-1)`,
    /// with each step from level L to L+1 additionally scaled by
    /// `max_bytes_for_level_multiplier_additional[L-1]` when present
    pub fn max_bytes_for_level(&self, level: u32) -> u64 {
        debug_assert!(level >= 1);
        let mut bytes = self.max_bytes_for_level_base;
        for step in 1..level {
            let extra = self
                .max_bytes_for_level_multiplier_additional
                .get(step as usize - 1)
                .copied()
                .unwrap_or(1);
            bytes *= u64::from(self.max_bytes_for_level_multiplier) * u64::from(extra);
        }
        bytes
    }

    // =========================================================================
    // Sentinel Accessors
    // =========================================================================

    /// Level-0 compaction-by-file-count trigger, or None when disabled
    pub fn level0_compaction_trigger(&self) -> Option<i32> {
        (self.level0_file_num_compaction_trigger >= 0)
            .then_some(self.level0_file_num_compaction_trigger)
    }

    /// Level-0 write-slowdown trigger, or None when disabled
    pub fn level0_slowdown_trigger(&self) -> Option<i32> {
        (self.level0_slowdown_writes_trigger >= 0).then_some(self.level0_slowdown_writes_trigger)
    }

    /// Whether compaction-backlog write stalling is active
    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit > 1.0
    }

    /// Decoded WAL retention policy
    pub fn wal_ttl(&self) -> WalTtl {
        match self.wal_ttl_seconds {
            0 => WalTtl::DeleteWhenObsolete,
            u64::MAX => WalTtl::NeverDelete,
            secs => WalTtl::Keep(secs),
        }
    }

    /// Deploy-stats logging period in seconds, or None when disabled
    pub fn stats_log_interval(&self) -> Option<u32> {
        (self.db_stats_log_interval >= 0).then_some(self.db_stats_log_interval as u32)
    }

    // =========================================================================
    // Engine-facing Accessors
    // =========================================================================

    /// The configured merge operator, or the not-supported error a merge
    /// operation must surface when none is configured
    pub fn require_merge_operator(&self) -> Result<&Arc<dyn MergeOperator>> {
        self.merge_operator.as_ref().ok_or_else(|| {
            StrataError::NotSupported(
                "merge requires a merge_operator to be configured at open".to_string(),
            )
        })
    }
}

fn invalid(msg: &str) -> StrataError {
    StrataError::InvalidArgument(msg.to_string())
}

fn capability_name<T: ?Sized>(
    capability: &Option<Arc<T>>,
    name: fn(&T) -> &'static str,
) -> String {
    match capability {
        Some(c) => name(c.as_ref()).to_string(),
        None => "(none)".to_string(),
    }
}

fn presence<T: ?Sized>(capability: &Option<Arc<T>>) -> String {
    match capability {
        Some(_) => "(set)".to_string(),
        None => "(none)".to_string(),
    }
}
