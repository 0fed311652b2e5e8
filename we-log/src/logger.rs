use crate::level::{Level, Mode};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::{error, info, trace, warn};

/// Category used when the caller does not name one.
pub const DEFAULT_CATEGORY: &str = "application";

/// Records kept by a logger built without an explicit capacity.
pub const DEFAULT_CAPACITY: usize = 1024;

/// One message accepted by a [`Logger`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub level: Level,
    pub category: String,
    pub message: String,
    /// Time since the logger was created.
    pub elapsed: Duration,
}

/// Leveled logger writing to an in-memory sink.
///
/// Every accepted message is kept as a [`LogRecord`] and emitted as a
/// `tracing` event at the matching level, with the category as a field.
/// The sink holds at most `capacity` records; once full, the oldest record
/// is dropped for each new one.
#[derive(Debug)]
pub struct Logger {
    mode: Mode,
    started: Instant,
    capacity: usize,
    records: Mutex<VecDeque<LogRecord>>,
}

impl Logger {
    /// Creates a logger whose mode comes from the environment.
    pub fn new() -> Self {
        Self::with_mode(Mode::from_env())
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self::with_capacity(mode, DEFAULT_CAPACITY)
    }

    /// Creates a logger keeping at most `capacity` records. With a capacity
    /// of zero messages are still emitted as `tracing` events but not kept.
    pub fn with_capacity(mode: Mode, capacity: usize) -> Self {
        Self {
            mode,
            started: Instant::now(),
            capacity,
            records: Mutex::new(VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY))),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Writes `message` at `level` under `category`.
    ///
    /// Returns `false` when the message was suppressed, which happens for
    /// error-level messages in production mode.
    pub fn log(&self, message: &str, level: Level, category: &str) -> bool {
        if level == Level::Error && self.mode.is_production() {
            return false;
        }

        match level {
            Level::Error => error!(category, "{message}"),
            Level::Warning => warn!(category, "{message}"),
            Level::Info => info!(category, "{message}"),
            Level::Trace => trace!(category, "{message}"),
        }

        if self.capacity == 0 {
            return true;
        }
        let mut sink = self.sink();
        if sink.len() == self.capacity {
            sink.pop_front();
        }
        sink.push_back(LogRecord {
            level,
            category: category.to_owned(),
            message: message.to_owned(),
            elapsed: self.started.elapsed(),
        });
        true
    }

    /// Writes an error-level message under the default category.
    pub fn error(&self, message: &str) -> bool {
        self.log(message, Level::Error, DEFAULT_CATEGORY)
    }

    /// Snapshot of the sink, oldest first.
    pub fn records(&self) -> Vec<LogRecord> {
        self.sink().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.sink().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sink().is_empty()
    }

    /// Empties the sink.
    pub fn clear(&self) {
        self.sink().clear();
    }

    fn sink(&self) -> MutexGuard<'_, VecDeque<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
