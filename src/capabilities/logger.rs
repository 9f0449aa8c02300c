//! Info log capability
//!
//! The info log is an append-only text sink for engine progress and error
//! messages. When [`DatabaseOptions::info_log`](crate::DatabaseOptions)
//! is absent, the engine writes to a file stored in the same directory as
//! the database contents.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use parking_lot::Mutex;

use crate::error::Result;

/// Append-only text sink for engine diagnostics.
///
/// Implementations may be called concurrently from foreground writers,
/// background compactions, and the open path; every call takes `&self`.
pub trait Logger: Send + Sync {
    /// Append one line to the sink
    fn log(&self, line: &str);
}

/// Logger that forwards each line to the `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, line: &str) {
        tracing::info!(target: "stratakv", "{}", line);
    }
}

/// Logger that appends lines to a file
pub struct FileLogger {
    file: Mutex<File>,
}

impl FileLogger {
    /// Open (or create) the log file at `path` in append mode
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl Logger for FileLogger {
    fn log(&self, line: &str) {
        let mut file = self.file.lock();
        // A failed diagnostic write must not take down the caller
        let _ = writeln!(file, "{}", line);
    }
}

/// Logger that captures lines in memory, for tests and diagnostics capture
#[derive(Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<String>>,
}

impl MemoryLogger {
    /// Create an empty capture buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line logged so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Number of lines logged so far
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// Whether nothing has been logged yet
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}
