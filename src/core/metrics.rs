//! Dispatch metrics for observability
//!
//! Counters for what the dispatcher accepted, delivered and failed to write.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for one dispatcher
///
/// # Example
///
/// ```
/// use rust_leveled_logger::DispatchMetrics;
///
/// let metrics = DispatchMetrics::new();
///
/// metrics.record_submitted();
/// metrics.record_line_written();
///
/// assert_eq!(metrics.records_submitted(), 1);
/// assert_eq!(metrics.lines_written(), 1);
/// ```
#[derive(Debug)]
pub struct DispatchMetrics {
    /// Records queued by accepted `log` calls
    records_submitted: AtomicU64,

    /// Records fully processed by the worker
    records_delivered: AtomicU64,

    /// Lines successfully written, counted once per stream
    lines_written: AtomicU64,

    /// Stream writes that returned an error or panicked
    write_failures: AtomicU64,
}

impl DispatchMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            records_submitted: AtomicU64::new(0),
            records_delivered: AtomicU64::new(0),
            lines_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_submitted(&self) -> u64 {
        self.records_submitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn records_delivered(&self) -> u64 {
        self.records_delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Records submitted but not yet delivered
    pub fn pending(&self) -> u64 {
        self.records_submitted()
            .saturating_sub(self.records_delivered())
    }

    #[inline]
    pub fn record_submitted(&self) -> u64 {
        self.records_submitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.records_delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_line_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Get write failure rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been attempted.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures() as f64;
        let total = self.lines_written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.records_submitted.store(0, Ordering::Relaxed);
        self.records_delivered.store(0, Ordering::Relaxed);
        self.lines_written.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for DispatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DispatchMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            records_submitted: AtomicU64::new(self.records_submitted()),
            records_delivered: AtomicU64::new(self.records_delivered()),
            lines_written: AtomicU64::new(self.lines_written()),
            write_failures: AtomicU64::new(self.write_failures()),
        }
    }
}
