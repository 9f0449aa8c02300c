//! Tests for the options data model
//!
//! These tests verify:
//! - Default values and internal consistency of DatabaseOptions
//! - The bulk-load preset transform (coverage, idempotence, purity)
//! - Dump completeness and determinism
//! - Level geometry math
//! - Persistent compression discriminants
//! - Per-operation option defaults

use std::sync::Arc;

use stratakv_options::{
    CompressionType, DatabaseOptions, FlushOptions, MemoryLogger, MergeOperator, ReadOptions,
    Snapshot, StrataError, WalTtl, WriteOptions,
};

// =============================================================================
// Test Stubs
// =============================================================================

struct FixedSnapshot {
    sequence: u64,
}

impl Snapshot for FixedSnapshot {
    fn sequence_number(&self) -> u64 {
        self.sequence
    }
}

struct ConcatMerge;

impl MergeOperator for ConcatMerge {
    fn name(&self) -> &'static str {
        "test.ConcatMerge"
    }

    fn merge(&self, _key: &[u8], existing: Option<&[u8]>, operand: &[u8]) -> Option<Vec<u8>> {
        let mut merged = existing.map(<[u8]>::to_vec).unwrap_or_default();
        merged.extend_from_slice(operand);
        Some(merged)
    }
}

struct NullCache;

impl stratakv_options::Cache for NullCache {
    fn insert(&self, _key: &[u8], _value: Vec<u8>, _charge: usize) {}

    fn lookup(&self, _key: &[u8]) -> Option<Vec<u8>> {
        None
    }

    fn erase(&self, _key: &[u8]) {}

    fn capacity(&self) -> usize {
        0
    }
}

// =============================================================================
// Default Construction Tests
// =============================================================================

#[test]
fn test_default_database_options_scenario() {
    let options = DatabaseOptions::default();

    assert!(!options.create_if_missing);
    assert!(!options.error_if_exists);
    assert!(!options.paranoid_checks);
    assert_eq!(options.max_open_files, 1000);
    assert_eq!(options.block_size, 4096);
    assert_eq!(options.write_buffer_size, 4 * 1024 * 1024);
    assert_eq!(options.max_write_buffer_number, 2);
    assert_eq!(options.block_restart_interval, 16);
    assert_eq!(options.compression, CompressionType::Snappy);
    assert_eq!(options.num_levels, 7);
    assert_eq!(options.max_background_compactions, 1);
    assert_eq!(options.wal_ttl_seconds, 0);
    assert!(!options.allow_mmap_reads);
    assert!(options.allow_mmap_writes);
    assert_eq!(options.manifest_preallocation_size, 4 * 1024 * 1024);
}

#[test]
fn test_default_database_options_are_valid() {
    // Every numeric field must be within its documented range out of the
    // box; the explicit validation pass is the range oracle
    let options = DatabaseOptions::default();
    options.validate().expect("defaults must validate");
}

#[test]
fn test_default_capabilities() {
    let options = DatabaseOptions::default();

    assert_eq!(options.comparator.name(), "stratakv.BytewiseComparator");
    assert!(options.merge_operator.is_none());
    assert!(options.compaction_filter.is_none());
    assert!(options.filter_policy.is_none());
    assert!(options.info_log.is_none());
    assert!(options.block_cache.is_none());
    assert!(options.statistics.is_none());
    assert!(!options.no_block_cache);
}

#[test]
fn test_default_rate_limit_disabled() {
    let options = DatabaseOptions::default();
    assert!(options.rate_limit <= 1.0);
    assert!(!options.rate_limit_enabled());
}

// =============================================================================
// Per-operation Option Tests
// =============================================================================

#[test]
fn test_default_write_options() {
    let write = WriteOptions::default();
    assert!(!write.sync);
    assert!(!write.disable_wal);
}

#[test]
fn test_sync_without_wal_is_legal() {
    // Orthogonal flags: sync degenerates to a no-op for the skipped log
    // entry but remains a legal combination
    let write = WriteOptions {
        sync: true,
        disable_wal: true,
    };
    assert!(write.sync && write.disable_wal);
}

#[test]
fn test_default_flush_options() {
    let flush = FlushOptions::default();
    assert!(flush.wait);
}

#[test]
fn test_default_read_options() {
    let read = ReadOptions::default();
    assert!(!read.verify_checksums);
    assert!(read.fill_cache);
    assert!(read.snapshot.is_none());
}

#[test]
fn test_read_options_keep_explicit_snapshot() {
    let snapshot = FixedSnapshot { sequence: 42 };
    let read = ReadOptions::default().with_snapshot(&snapshot);

    // No implicit snapshot substitution when one is supplied
    let held = read.snapshot.expect("snapshot must be kept");
    assert_eq!(held.sequence_number(), 42);
    assert!(std::ptr::eq(
        held as *const dyn Snapshot as *const u8,
        &snapshot as *const FixedSnapshot as *const u8
    ));
}

// =============================================================================
// Bulk Load Preset Tests
// =============================================================================

#[test]
fn test_bulk_load_disables_compaction() {
    let mut options = DatabaseOptions::default();
    options.prepare_for_bulk_load();

    assert!(options.disable_auto_compactions);
    assert!(options.level0_compaction_trigger().is_none());
    assert!(options.level0_slowdown_trigger().is_none());
    assert!(options.level0_file_num_compaction_trigger < 0);
    assert_eq!(options.level0_stop_writes_trigger, i32::MAX);
    assert!(options.disable_data_sync);
}

#[test]
fn test_bulk_load_widens_buffers() {
    let baseline = DatabaseOptions::default();
    let mut options = DatabaseOptions::default();
    options.prepare_for_bulk_load();

    assert!(options.write_buffer_size > baseline.write_buffer_size);
    assert!(options.max_write_buffer_number > baseline.max_write_buffer_number);
    assert!(options.target_file_size_base > baseline.target_file_size_base);
}

#[test]
fn test_bulk_load_preserves_capabilities() {
    let mut options = DatabaseOptions::default();
    options.merge_operator = Some(Arc::new(ConcatMerge));

    let comparator_before = Arc::clone(&options.comparator);
    let merge_before = Arc::clone(options.merge_operator.as_ref().unwrap());
    let env_before = Arc::clone(&options.env);

    options.prepare_for_bulk_load();

    assert!(Arc::ptr_eq(&comparator_before, &options.comparator));
    assert!(Arc::ptr_eq(
        &merge_before,
        options.merge_operator.as_ref().unwrap()
    ));
    assert!(Arc::ptr_eq(&env_before, &options.env));
    assert!(options.compaction_filter.is_none());
    assert!(options.filter_policy.is_none());
    assert_eq!(options.compression, CompressionType::Snappy);
}

#[test]
fn test_bulk_load_is_idempotent() {
    let mut once = DatabaseOptions::default();
    once.prepare_for_bulk_load();

    let mut twice = DatabaseOptions::default();
    twice.prepare_for_bulk_load().prepare_for_bulk_load();

    // Dump is a complete, deterministic field enumeration, so equal dumps
    // mean equal configurations
    let log_once = MemoryLogger::new();
    let log_twice = MemoryLogger::new();
    once.dump(&log_once);
    twice.dump(&log_twice);
    assert_eq!(log_once.lines(), log_twice.lines());
}

#[test]
fn test_bulk_load_result_is_openable() {
    let mut options = DatabaseOptions::default();
    options.prepare_for_bulk_load();
    options.validate().expect("bulk-load preset must validate");
}

// =============================================================================
// Dump Tests
// =============================================================================

#[test]
fn test_dump_visits_every_field_exactly_once() {
    let options = DatabaseOptions::default();
    let log = MemoryLogger::new();
    options.dump(&log);

    let lines = log.lines();
    assert_eq!(lines.len(), DatabaseOptions::FIELD_COUNT);

    // Field-count parity: distinct field names equals the number of
    // fields in the data model, guarding against silently-added fields
    let mut names: Vec<&str> = lines
        .iter()
        .map(|line| {
            line.split(':')
                .next()
                .expect("dump lines are 'Options.<field>: <value>'")
        })
        .collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), DatabaseOptions::FIELD_COUNT);
}

#[test]
fn test_dump_is_deterministic() {
    let options = DatabaseOptions::default();
    let first = MemoryLogger::new();
    let second = MemoryLogger::new();
    options.dump(&first);
    options.dump(&second);
    assert_eq!(first.lines(), second.lines());
}

#[test]
fn test_dump_without_info_log_is_noop() {
    let options = DatabaseOptions::default();
    assert!(options.info_log.is_none());
    options.dump_to_info_log();
}

#[test]
fn test_dump_through_info_log() {
    let log = Arc::new(MemoryLogger::new());
    let mut options = DatabaseOptions::default();
    options.info_log = Some(Arc::clone(&log) as Arc<dyn stratakv_options::Logger>);

    options.dump_to_info_log();
    assert_eq!(log.len(), DatabaseOptions::FIELD_COUNT);
}

// =============================================================================
// Level Geometry Tests
// =============================================================================

#[test]
fn test_target_file_size_flat_by_default() {
    // Default multiplier is 1: similar file sizes at every level
    let options = DatabaseOptions::default();
    for level in 1..=options.num_levels as u32 {
        assert_eq!(
            options.target_file_size_for_level(level),
            options.target_file_size_base
        );
    }
}

#[test]
fn test_target_file_size_exact_exponential() {
    let mut options = DatabaseOptions::default();
    options.target_file_size_base = 2 * 1024 * 1024;
    options.target_file_size_multiplier = 10;

    let mut expected = options.target_file_size_base;
    for level in 1..=options.num_levels as u32 {
        assert_eq!(options.target_file_size_for_level(level), expected);
        expected *= 10;
    }
}

#[test]
fn test_max_bytes_for_level_exact_exponential() {
    let options = DatabaseOptions::default();

    let mut expected = options.max_bytes_for_level_base;
    for level in 1..=options.num_levels as u32 {
        assert_eq!(options.max_bytes_for_level(level), expected);
        expected *= u64::from(options.max_bytes_for_level_multiplier);
    }
}

#[test]
fn test_max_bytes_for_level_additional_multiplier() {
    let mut options = DatabaseOptions::default();
    options.max_bytes_for_level_multiplier_additional = vec![2, 1, 1, 1, 1, 1];

    let base = options.max_bytes_for_level_base;
    let mult = u64::from(options.max_bytes_for_level_multiplier);
    assert_eq!(options.max_bytes_for_level(1), base);
    // The step out of level 1 is scaled by the extra factor of 2
    assert_eq!(options.max_bytes_for_level(2), base * mult * 2);
    assert_eq!(options.max_bytes_for_level(3), base * mult * 2 * mult);
}

// =============================================================================
// Compression Discriminant Tests
// =============================================================================

#[test]
fn test_compression_type_values_are_frozen() {
    // Part of the persistent on-disk format; must never change
    assert_eq!(CompressionType::None.as_u8(), 0);
    assert_eq!(CompressionType::Snappy.as_u8(), 1);
    assert_eq!(CompressionType::Zlib.as_u8(), 2);
    assert_eq!(CompressionType::Bzip2.as_u8(), 3);
}

#[test]
fn test_compression_type_decodes_from_tag() {
    for tag in 0u8..=3 {
        let decoded = CompressionType::try_from(tag).unwrap();
        assert_eq!(decoded.as_u8(), tag);
    }
}

#[test]
fn test_compression_type_rejects_unknown_tag() {
    let err = CompressionType::try_from(9).unwrap_err();
    assert!(matches!(err, StrataError::InvalidArgument(_)));
}

#[test]
fn test_compression_type_serialization_round_trip() {
    for variant in [
        CompressionType::None,
        CompressionType::Snappy,
        CompressionType::Zlib,
        CompressionType::Bzip2,
    ] {
        let bytes = bincode::serialize(&variant).unwrap();
        // Serde tags unit variants by index, which matches the frozen
        // discriminants exactly
        assert_eq!(bytes, u32::from(variant.as_u8()).to_le_bytes());
        let recovered: CompressionType = bincode::deserialize(&bytes).unwrap();
        assert_eq!(recovered, variant);
    }
}

#[test]
fn test_default_compression_options() {
    let opts = stratakv_options::CompressionOptions::default();
    assert_eq!(opts.window_bits, -14);
    assert_eq!(opts.level, -1);
    assert_eq!(opts.strategy, 0);
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_validate_rejects_zero_block_size() {
    let mut options = DatabaseOptions::default();
    options.block_size = 0;
    assert!(matches!(
        options.validate(),
        Err(StrataError::InvalidArgument(_))
    ));
}

#[test]
fn test_validate_rejects_zero_write_buffer() {
    let mut options = DatabaseOptions::default();
    options.write_buffer_size = 0;
    assert!(options.validate().is_err());
}

#[test]
fn test_validate_rejects_trigger_order_violation() {
    let mut options = DatabaseOptions::default();
    options.level0_slowdown_writes_trigger = options.level0_stop_writes_trigger + 1;
    assert!(options.validate().is_err());
}

#[test]
fn test_validate_allows_disabled_triggers_in_any_order() {
    // A negative trigger is disabled; ordering is not checkable then
    let mut options = DatabaseOptions::default();
    options.level0_slowdown_writes_trigger = -1;
    options.level0_file_num_compaction_trigger = 100;
    options.validate().expect("disabled triggers skip ordering");
}

#[test]
fn test_validate_rejects_compression_per_level_mismatch() {
    let mut options = DatabaseOptions::default();
    options.compression_per_level = vec![CompressionType::None; 3];
    assert_eq!(options.num_levels, 7);
    assert!(options.validate().is_err());

    options.compression_per_level = vec![CompressionType::Zlib; 7];
    options.validate().expect("one entry per level is valid");
}

#[test]
fn test_validate_rejects_cache_with_no_block_cache() {
    let mut options = DatabaseOptions::default();
    options.no_block_cache = true;
    options.block_cache = Some(Arc::new(NullCache));
    assert!(options.validate().is_err());
}

#[test]
fn test_validate_max_open_files_sentinel() {
    let mut options = DatabaseOptions::default();
    options.max_open_files = -1;
    options.validate().expect("-1 means unbounded");

    options.max_open_files = 0;
    assert!(options.validate().is_err());
}

#[test]
fn test_validate_rejects_oversized_shard_bits() {
    let mut options = DatabaseOptions::default();
    options.table_cache_numshardbits = 21;
    assert!(options.validate().is_err());
}

// =============================================================================
// Sentinel Accessor Tests
// =============================================================================

#[test]
fn test_wal_ttl_decoding() {
    let mut options = DatabaseOptions::default();
    assert_eq!(options.wal_ttl(), WalTtl::DeleteWhenObsolete);

    options.wal_ttl_seconds = 3600;
    assert_eq!(options.wal_ttl(), WalTtl::Keep(3600));

    options.wal_ttl_seconds = u64::MAX;
    assert_eq!(options.wal_ttl(), WalTtl::NeverDelete);
}

#[test]
fn test_stats_log_interval_sentinel() {
    let mut options = DatabaseOptions::default();
    assert_eq!(options.stats_log_interval(), Some(1800));

    options.db_stats_log_interval = -1;
    assert_eq!(options.stats_log_interval(), None);
}

#[test]
fn test_rate_limit_threshold() {
    let mut options = DatabaseOptions::default();
    options.rate_limit = 1.0;
    assert!(!options.rate_limit_enabled());

    options.rate_limit = 1.5;
    assert!(options.rate_limit_enabled());
}

// =============================================================================
// Merge Operator Accessor Tests
// =============================================================================

#[test]
fn test_merge_without_operator_is_not_supported() {
    let options = DatabaseOptions::default();
    let err = options.require_merge_operator().unwrap_err();
    assert!(matches!(err, StrataError::NotSupported(_)));
}

#[test]
fn test_merge_operator_accessor() {
    let mut options = DatabaseOptions::default();
    options.merge_operator = Some(Arc::new(ConcatMerge));

    let operator = options.require_merge_operator().unwrap();
    assert_eq!(operator.name(), "test.ConcatMerge");
    let merged = operator.merge(b"k", Some(b"ab"), b"cd").unwrap();
    assert_eq!(merged, b"abcd");
}
