//! Log record captured at call time

use super::arg::Arg;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};

/// Everything `Logger::log` captures before handing off to the dispatcher.
///
/// Short-lived: built once per accepted call and consumed by exactly one
/// dispatch job.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    /// Logger threshold at the moment of the call.
    pub threshold: i64,
    pub level: LogLevel,
    pub parts: Vec<Arg>,
}

impl LogRecord {
    pub fn new(level: LogLevel, threshold: i64, parts: Vec<Arg>) -> Self {
        Self {
            timestamp: Utc::now(),
            threshold,
            level,
            parts,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
