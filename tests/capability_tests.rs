//! Tests for the capability handles
//!
//! These tests verify:
//! - Bytewise comparator ordering and key-shortening helpers
//! - Logger implementations (memory capture, file append)
//! - Statistics counters and the single-owner claim protocol
//! - The default environment

use std::cmp::Ordering;
use std::fs;

use stratakv_options::{
    BasicStatistics, BytewiseComparator, Comparator, DefaultEnv, Env, FileLogger, Logger,
    MemoryLogger, Statistics, Ticker,
};

// =============================================================================
// Comparator Tests
// =============================================================================

#[test]
fn test_bytewise_comparator_orders_lexicographically() {
    let cmp = BytewiseComparator;

    assert_eq!(cmp.compare(b"abc", b"abd"), Ordering::Less);
    assert_eq!(cmp.compare(b"abd", b"abc"), Ordering::Greater);
    assert_eq!(cmp.compare(b"abc", b"abc"), Ordering::Equal);
    // A prefix sorts before its extension
    assert_eq!(cmp.compare(b"ab", b"abc"), Ordering::Less);
    // Byte values, not characters
    assert_eq!(cmp.compare(b"\x01", b"\xff"), Ordering::Less);
}

#[test]
fn test_bytewise_comparator_name() {
    assert_eq!(BytewiseComparator.name(), "stratakv.BytewiseComparator");
}

#[test]
fn test_find_shortest_separator_shortens() {
    let cmp = BytewiseComparator;
    let mut start = b"abcdefghij".to_vec();
    cmp.find_shortest_separator(&mut start, b"abzzz");

    assert_eq!(start, b"abd");
    assert_eq!(cmp.compare(&start, b"abzzz"), Ordering::Less);
    assert_eq!(cmp.compare(b"abcdefghij", &start), Ordering::Less);
}

#[test]
fn test_find_shortest_separator_prefix_unchanged() {
    let cmp = BytewiseComparator;
    let mut start = b"abc".to_vec();
    cmp.find_shortest_separator(&mut start, b"abcdef");
    assert_eq!(start, b"abc");
}

#[test]
fn test_find_short_successor() {
    let cmp = BytewiseComparator;

    let mut key = b"abcd".to_vec();
    cmp.find_short_successor(&mut key);
    assert_eq!(key, b"b");

    let mut key = b"\xff\xff\x61".to_vec();
    cmp.find_short_successor(&mut key);
    assert_eq!(key, b"\xff\xff\x62");

    // A run of 0xff has no short successor
    let mut key = vec![0xff, 0xff];
    cmp.find_short_successor(&mut key);
    assert_eq!(key, vec![0xff, 0xff]);
}

// =============================================================================
// Logger Tests
// =============================================================================

#[test]
fn test_memory_logger_captures_in_order() {
    let log = MemoryLogger::new();
    assert!(log.is_empty());

    log.log("first");
    log.log("second");

    assert_eq!(log.len(), 2);
    assert_eq!(log.lines(), vec!["first".to_string(), "second".to_string()]);
}

#[test]
fn test_file_logger_appends_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("INFO.log");

    let log = FileLogger::open(&path).unwrap();
    log.log("open complete");
    log.log("compaction scheduled");
    drop(log);

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "open complete\ncompaction scheduled\n");
}

#[test]
fn test_file_logger_reopen_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("INFO.log");

    FileLogger::open(&path).unwrap().log("one");
    FileLogger::open(&path).unwrap().log("two");

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "one\ntwo\n");
}

// =============================================================================
// Statistics Tests
// =============================================================================

#[test]
fn test_statistics_tickers_accumulate() {
    let stats = BasicStatistics::new();
    assert_eq!(stats.tick_count(Ticker::BytesWritten), 0);

    stats.record_tick(Ticker::BytesWritten, 100);
    stats.record_tick(Ticker::BytesWritten, 24);
    stats.record_tick(Ticker::BlockCacheMiss, 1);

    assert_eq!(stats.tick_count(Ticker::BytesWritten), 124);
    assert_eq!(stats.tick_count(Ticker::BlockCacheMiss), 1);
    assert_eq!(stats.tick_count(Ticker::BlockCacheHit), 0);
}

#[test]
fn test_statistics_claim_is_exclusive() {
    // One live database handle per collector: a second claim must fail
    // until the first owner releases
    let stats = BasicStatistics::new();

    assert!(stats.claim());
    assert!(!stats.claim());

    stats.release();
    assert!(stats.claim());
}

// =============================================================================
// Environment Tests
// =============================================================================

#[test]
fn test_default_env_clock() {
    let env = DefaultEnv;
    assert_eq!(env.name(), "stratakv.DefaultEnv");

    let before = env.now_micros();
    let after = env.now_micros();
    assert!(before > 0);
    assert!(after >= before);
}
