//! Deferred write path
//!
//! A `Dispatcher` owns one FIFO queue and the single worker thread draining
//! it. Loggers only enqueue; the worker renders each record and fans the
//! lines out to the routes of the record's table, one job at a time.

use super::{
    error::{LoggerError, Result},
    layout::LineLayout,
    log_record::LogRecord,
    metrics::DispatchMetrics,
    stream::{call_isolated, panic_message},
    stream_table::StreamTable,
};
use crossbeam_channel::{bounded, unbounded, Sender};
use parking_lot::{Mutex, RwLock};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, OnceLock};
use std::thread::{self, JoinHandle, ThreadId};
use std::time::{Duration, Instant};

/// Default shutdown timeout for dispatcher cleanup (5 seconds)
///
/// Used when a dispatcher is dropped without an explicit `shutdown()`.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Callback for failed stream writes
///
/// Receives the stream name and the error. Replaces the default stderr report.
pub type WriteFailureCallback = Arc<dyn Fn(&str, &LoggerError) + Send + Sync>;

static GLOBAL: OnceLock<Arc<Dispatcher>> = OnceLock::new();

/// One accepted `log` call plus what is needed to write it out.
pub(crate) struct Job {
    pub(crate) record: LogRecord,
    pub(crate) name: Option<Arc<str>>,
    pub(crate) streams: StreamTable,
    pub(crate) layout: LineLayout,
}

enum Task {
    Write(Box<Job>),
    Barrier(Sender<()>),
}

pub struct Dispatcher {
    sender: RwLock<Option<Sender<Task>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
    worker_id: Option<ThreadId>,
    metrics: Arc<DispatchMetrics>,
}

impl Dispatcher {
    /// Start a dispatcher with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    /// The process-wide dispatcher used by loggers that are not given one.
    ///
    /// Started on first use and never shut down; call [`Dispatcher::flush`]
    /// before exiting if queued lines must reach their streams.
    pub fn global() -> Arc<Dispatcher> {
        Arc::clone(GLOBAL.get_or_init(|| {
            let dispatcher = Dispatcher::builder()
                .thread_name("log-dispatch-global")
                .build()
                .unwrap_or_else(|e| {
                    eprintln!(
                        "[LOGGER CRITICAL] Failed to start global dispatcher: {}. \
                         Log calls will be discarded.",
                        e
                    );
                    Dispatcher::stopped()
                });
            Arc::new(dispatcher)
        }))
    }

    fn stopped() -> Self {
        Self {
            sender: RwLock::new(None),
            worker: Mutex::new(None),
            worker_id: None,
            metrics: Arc::new(DispatchMetrics::new()),
        }
    }

    fn spawn(thread_name: String, on_failure: Option<WriteFailureCallback>) -> Result<Self> {
        let (sender, receiver) = unbounded::<Task>();
        let metrics = Arc::new(DispatchMetrics::new());
        let metrics_clone = Arc::clone(&metrics);

        let handle = thread::Builder::new()
            .name(thread_name)
            .spawn(move || {
                // Tasks run strictly in submission order
                for task in receiver.iter() {
                    match task {
                        Task::Write(job) => {
                            let delivered = panic::catch_unwind(AssertUnwindSafe(|| {
                                deliver(&job, &metrics_clone, on_failure.as_ref())
                            }));
                            if let Err(payload) = delivered {
                                eprintln!(
                                    "[LOGGER CRITICAL] Dispatch of one record panicked: {}. \
                                     The worker continues with the next record.",
                                    panic_message(payload.as_ref())
                                );
                            }
                        }
                        Task::Barrier(ack) => {
                            let _ = ack.send(());
                        }
                    }
                }
            })
            .map_err(|e| {
                LoggerError::io_operation("spawning dispatch worker", "thread spawn failed", e)
            })?;

        Ok(Self {
            sender: RwLock::new(Some(sender)),
            worker_id: Some(handle.thread().id()),
            worker: Mutex::new(Some(handle)),
            metrics,
        })
    }

    /// Queue a job. Never blocks; silently ignored once shut down.
    pub(crate) fn submit(&self, job: Job) {
        let sender = self.sender.read();
        if let Some(ref sender) = *sender {
            self.metrics.record_submitted();
            // Disconnected means the worker is gone; the call stays fire-and-forget
            let _ = sender.send(Task::Write(Box::new(job)));
        }
    }

    /// Block until every job queued before this call has been written.
    ///
    /// Must not be called from inside a [`LogStream`](crate::LogStream); the worker would wait on
    /// itself, so that case is rejected with an error.
    pub fn flush(&self) -> Result<()> {
        if self.is_worker_thread() {
            return Err(LoggerError::config(
                "Dispatcher",
                "flush called from the dispatch worker",
            ));
        }

        let (ack_tx, ack_rx) = bounded(1);
        {
            let sender = self.sender.read();
            let sender = sender.as_ref().ok_or(LoggerError::DispatcherStopped)?;
            sender
                .send(Task::Barrier(ack_tx))
                .map_err(|_| LoggerError::DispatcherStopped)?;
        }
        ack_rx.recv().map_err(|_| LoggerError::DispatcherStopped)
    }

    /// Whether the dispatcher accepts jobs and its worker is alive.
    pub fn is_running(&self) -> bool {
        self.sender.read().is_some()
            && self
                .worker
                .lock()
                .as_ref()
                .is_some_and(|handle| !handle.is_finished())
    }

    pub(crate) fn is_worker_thread(&self) -> bool {
        self.worker_id == Some(thread::current().id())
    }

    pub fn metrics(&self) -> &DispatchMetrics {
        &self.metrics
    }

    /// Stop accepting jobs, drain the queue and join the worker.
    ///
    /// # Returns
    ///
    /// `true` if the worker finished within `timeout`, `false` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use rust_leveled_logger::Dispatcher;
    /// use std::time::Duration;
    ///
    /// let dispatcher = Dispatcher::new().unwrap();
    /// assert!(dispatcher.shutdown(Duration::from_secs(1)));
    /// assert!(!dispatcher.is_running());
    /// ```
    pub fn shutdown(&self, timeout: Duration) -> bool {
        // Closing the channel lets the worker drain what is queued, then exit
        drop(self.sender.write().take());

        let Some(handle) = self.worker.lock().take() else {
            return true;
        };
        if self.is_worker_thread() {
            eprintln!("[LOGGER WARNING] Dispatcher shut down from its own worker; not joining.");
            return false;
        }

        let start = Instant::now();
        loop {
            if handle.is_finished() {
                if let Err(e) = handle.join() {
                    eprintln!(
                        "[LOGGER ERROR] Dispatch worker panicked during shutdown: {:?}",
                        e
                    );
                    return false;
                }
                return true;
            }

            if start.elapsed() >= timeout {
                eprintln!(
                    "[LOGGER WARNING] Dispatch worker did not finish within {:?} timeout. \
                     Some lines may be lost.",
                    timeout
                );
                return false;
            }

            thread::sleep(Duration::from_millis(10));
        }
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);

        let failures = self.metrics.write_failures();
        if failures > 0 {
            eprintln!(
                "[LOGGER WARNING] Dispatcher shutting down with {} failed writes (failure rate: {:.2}%)",
                failures,
                self.metrics.failure_rate()
            );
        }
    }
}

/// Render one job and fan its lines out.
///
/// The table stays locked for the whole job, so on any stream the lines of
/// one record are contiguous and in order.
fn deliver(job: &Job, metrics: &DispatchMetrics, on_failure: Option<&WriteFailureCallback>) {
    let level = job.record.level;
    let lines = job.layout.render(&job.record, job.name.as_deref());
    let mut routes = job.streams.lock_routes();

    for line in lines {
        let text = line + "\n";
        for route in routes
            .entries
            .iter_mut()
            .filter(|route| route.levels.contains(level))
        {
            match call_isolated(route.stream.as_mut(), |stream| stream.write(&text)) {
                Ok(()) => {
                    metrics.record_line_written();
                }
                Err(e) => {
                    metrics.record_write_failure();
                    report_failure(route.stream.name(), &e, on_failure);
                }
            }
        }
    }

    metrics.record_delivered();
}

fn report_failure(stream: &str, error: &LoggerError, on_failure: Option<&WriteFailureCallback>) {
    if let Some(callback) = on_failure {
        // A panicking callback must not cost the remaining streams their line
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| callback(stream, error))) {
            eprintln!(
                "[LOGGER CRITICAL] Write failure callback panicked: {}. Original error: {}",
                panic_message(payload.as_ref()),
                error
            );
        }
        return;
    }

    match error {
        LoggerError::StreamPanicked { .. } => eprintln!(
            "[LOGGER CRITICAL] {}. Other streams continue to function.",
            error
        ),
        _ => eprintln!("[LOGGER ERROR] Stream '{}' write failed: {}", stream, error),
    }
}

/// Builder for constructing a Dispatcher
///
/// # Example
/// ```
/// use rust_leveled_logger::Dispatcher;
/// use std::sync::Arc;
///
/// let dispatcher = Dispatcher::builder()
///     .thread_name("audit-log")
///     .on_write_failure(Arc::new(|stream, error| {
///         eprintln!("ALERT: {} failed: {}", stream, error);
///     }))
///     .build()
///     .unwrap();
/// assert!(dispatcher.is_running());
/// ```
pub struct DispatcherBuilder {
    thread_name: String,
    on_write_failure: Option<WriteFailureCallback>,
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Self {
            thread_name: "log-dispatch".to_string(),
            on_write_failure: None,
        }
    }

    /// Set the worker thread name
    #[must_use = "builder methods return a new value"]
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Set a callback for failed stream writes
    #[must_use = "builder methods return a new value"]
    pub fn on_write_failure(mut self, callback: WriteFailureCallback) -> Self {
        self.on_write_failure = Some(callback);
        self
    }

    /// Spawn the worker
    pub fn build(self) -> Result<Dispatcher> {
        Dispatcher::spawn(self.thread_name, self.on_write_failure)
    }
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
