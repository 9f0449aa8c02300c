//! Environment capability
//!
//! The environment abstracts the platform services the engine relies on
//! (time, thread scheduling, file operations). The configuration stores a
//! shared handle so tests and embedders can substitute a deterministic or
//! instrumented environment; this crate pins only the surface the
//! configuration layer itself references.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Platform services abstraction consumed by the engine.
///
/// The handle outlives every database opened with it; the engine's
/// background threads keep using it until they shut down.
pub trait Env: Send + Sync {
    /// Identifying name, written to the info log at open
    fn name(&self) -> &'static str {
        "env"
    }

    /// Microseconds since the Unix epoch
    fn now_micros(&self) -> u64;

    /// Block the calling thread for at least `micros` microseconds
    fn sleep_for_micros(&self, micros: u64);
}

/// Default environment backed by the standard library
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEnv;

impl Env for DefaultEnv {
    fn name(&self) -> &'static str {
        "stratakv.DefaultEnv"
    }

    fn now_micros(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros() as u64)
            .unwrap_or(0)
    }

    fn sleep_for_micros(&self, micros: u64) {
        thread::sleep(Duration::from_micros(micros));
    }
}
