//! Main logger implementation

use super::{
    arg::Arg,
    dispatcher::{Dispatcher, Job},
    error::Result,
    layout::LineLayout,
    level_value::LevelValue,
    log_level::{LevelSet, LogLevel, LEVELS},
    log_record::LogRecord,
    stream::LogStream,
    stream_table::StreamTable,
    timestamp::TimestampZone,
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Threshold of a logger that is not given one.
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Warning;

/// Optional construction settings for [`Logger::with_options`].
#[derive(Clone, Default)]
pub struct LoggerOptions {
    /// Routing table to use by reference. `None` means a fresh default table.
    pub streams: Option<StreamTable>,
    /// Dispatcher to queue on. `None` means [`Dispatcher::global`].
    pub dispatcher: Option<Arc<Dispatcher>>,
    pub layout: LineLayout,
}

pub struct Logger {
    name: Option<Arc<str>>,
    threshold: RwLock<i64>,
    streams: StreamTable,
    layout: LineLayout,
    dispatcher: Arc<Dispatcher>,
}

impl Logger {
    /// Anonymous logger: `WARNING` threshold, standard output for every level.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(None, i64::from(DEFAULT_LEVEL.rank()), LoggerOptions::default())
    }

    /// Like [`Logger::new`], with a display name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::from_parts(
            Some(name.into()),
            i64::from(DEFAULT_LEVEL.rank()),
            LoggerOptions::default(),
        )
    }

    /// Construct with every setting explicit.
    ///
    /// Fails with `InvalidArgument` when `level` is not an integer.
    pub fn with_options(
        name: Option<&str>,
        level: Option<LevelValue>,
        options: LoggerOptions,
    ) -> Result<Self> {
        let threshold = match level {
            Some(value) => value.to_rank()?,
            None => i64::from(DEFAULT_LEVEL.rank()),
        };
        Ok(Self::from_parts(name.map(String::from), threshold, options))
    }

    fn from_parts(name: Option<String>, threshold: i64, options: LoggerOptions) -> Self {
        Self {
            name: name.map(Arc::from),
            threshold: RwLock::new(threshold),
            streams: options.streams.unwrap_or_else(StreamTable::with_stdout),
            layout: options.layout,
            dispatcher: options.dispatcher.unwrap_or_else(Dispatcher::global),
        }
    }

    /// The frozen level registry, most severe first.
    pub fn levels() -> &'static [(&'static str, u8)] {
        &LEVELS
    }

    /// Rank of a level by name, case-insensitive.
    pub fn level_rank(name: &str) -> Option<u8> {
        name.parse::<LogLevel>().ok().map(LogLevel::rank)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Current threshold rank.
    pub fn level(&self) -> i64 {
        *self.threshold.read()
    }

    /// Change the threshold.
    ///
    /// The value must coerce to an integer; otherwise `InvalidArgument` is
    /// returned and the previous threshold stays in place.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_leveled_logger::{LogLevel, Logger};
    ///
    /// let logger = Logger::new();
    /// logger.set_level(LogLevel::Info).unwrap();
    /// assert!(logger.set_level(2.5).is_err());
    /// assert_eq!(logger.level(), 3);
    /// ```
    pub fn set_level(&self, value: impl Into<LevelValue>) -> Result<()> {
        let rank = value.into().to_rank()?;
        *self.threshold.write() = rank;
        Ok(())
    }

    /// Whether a call at `level` would be accepted right now.
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        i64::from(level.rank()) <= self.level()
    }

    /// The routing table this logger writes through (shared, not a copy).
    pub fn streams(&self) -> &StreamTable {
        &self.streams
    }

    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    pub fn layout(&self) -> LineLayout {
        self.layout
    }

    /// Log the given message parts at `level`.
    ///
    /// The threshold check happens here, synchronously. An accepted call
    /// captures the clock, the threshold and the parts, queues one job and
    /// returns before anything is written. Routing is decided later, when the
    /// job runs.
    pub fn log<I>(&self, level: LogLevel, parts: I)
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        let threshold = self.level();
        if i64::from(level.rank()) > threshold {
            return;
        }

        let record = LogRecord::new(level, threshold, parts.into_iter().map(Into::into).collect());
        self.dispatcher.submit(Job {
            record,
            name: self.name.clone(),
            streams: self.streams.clone(),
            layout: self.layout,
        });
    }

    #[inline]
    pub fn severe<I>(&self, parts: I)
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.log(LogLevel::Severe, parts);
    }

    #[inline]
    pub fn warning<I>(&self, parts: I)
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.log(LogLevel::Warning, parts);
    }

    #[inline]
    pub fn info<I>(&self, parts: I)
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.log(LogLevel::Info, parts);
    }

    #[inline]
    pub fn fine<I>(&self, parts: I)
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.log(LogLevel::Fine, parts);
    }

    #[inline]
    pub fn finer<I>(&self, parts: I)
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.log(LogLevel::Finer, parts);
    }

    #[inline]
    pub fn finest<I>(&self, parts: I)
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.log(LogLevel::Finest, parts);
    }

    /// Wait for every queued job on this logger's dispatcher, then flush the
    /// streams of this logger's table.
    pub fn flush(&self) -> Result<()> {
        self.dispatcher.flush()?;
        self.streams.flush()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_leveled_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .name("svc")
    ///     .level(LogLevel::Info)
    ///     .stream(MemoryStream::new(), LevelSet::all())
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(logger.level(), 3);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("streams", &self.streams)
            .field("layout", &self.layout)
            .finish()
    }
}

/// Accepted calls are never revoked: dropping a logger waits until its queued
/// lines have been written and its streams flushed.
impl Drop for Logger {
    fn drop(&mut self) {
        // On the worker the queue cannot drain while we wait on it
        if self.dispatcher.is_worker_thread() || !self.dispatcher.is_running() {
            return;
        }

        if let Err(e) = self.flush() {
            eprintln!(
                "[LOGGER ERROR] Failed to flush logger '{}' on drop: {}",
                self.name().unwrap_or("<anonymous>"),
                e
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_leveled_logger::prelude::*;
///
/// let errors = MemoryStream::named("errors");
/// let logger = Logger::builder()
///     .name("worker")
///     .level("4")
///     .stream(ConsoleStream::stdout(), LevelSet::at_least(LogLevel::Info))
///     .stream(errors.clone(), LogLevel::Severe)
///     .timezone(TimestampZone::Utc)
///     .build()
///     .unwrap();
/// assert_eq!(logger.streams().len(), 2);
/// ```
pub struct LoggerBuilder {
    name: Option<String>,
    level: Option<LevelValue>,
    streams: Option<StreamTable>,
    dispatcher: Option<Arc<Dispatcher>>,
    layout: LineLayout,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            name: None,
            level: None,
            streams: None,
            dispatcher: None,
            layout: LineLayout::default(),
        }
    }

    /// Set the display name
    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the initial threshold; validated by `build`
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: impl Into<LevelValue>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Use an existing routing table by reference
    #[must_use = "builder methods return a new value"]
    pub fn streams(mut self, table: StreamTable) -> Self {
        self.streams = Some(table);
        self
    }

    /// Add a route; starts from an empty table rather than the default one
    #[must_use = "builder methods return a new value"]
    pub fn stream<S>(mut self, stream: S, levels: impl Into<LevelSet>) -> Self
    where
        S: LogStream + 'static,
    {
        self.streams
            .get_or_insert_with(StreamTable::new)
            .insert(stream, levels);
        self
    }

    /// Queue on a specific dispatcher instead of the global one
    #[must_use = "builder methods return a new value"]
    pub fn dispatcher(mut self, dispatcher: Arc<Dispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Set the zone used for the prefix timestamp
    #[must_use = "builder methods return a new value"]
    pub fn timezone(mut self, zone: TimestampZone) -> Self {
        self.layout.zone = zone;
        self
    }

    /// Enable ANSI styling of the prefix segments
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, colors: bool) -> Self {
        self.layout.colors = colors;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        Logger::with_options(
            self.name.as_deref(),
            self.level,
            LoggerOptions {
                streams: self.streams,
                dispatcher: self.dispatcher,
                layout: self.layout,
            },
        )
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use crate::streams::MemoryStream;

    fn memory_logger(level: LogLevel) -> (Logger, MemoryStream) {
        let memory = MemoryStream::new();
        let logger = Logger::builder()
            .name("test")
            .level(level)
            .stream(memory.clone(), LevelSet::all())
            .dispatcher(Arc::new(Dispatcher::new().unwrap()))
            .timezone(TimestampZone::Utc)
            .build()
            .unwrap();
        (logger, memory)
    }

    #[test]
    fn test_defaults() {
        let logger = Logger::new();
        assert_eq!(logger.level(), 2);
        assert_eq!(logger.name(), None);
        assert_eq!(logger.streams().len(), 1);
        assert_eq!(logger.layout(), LineLayout::default());
    }

    #[test]
    fn test_each_logger_gets_its_own_default_table() {
        let a = Logger::named("a");
        let b = Logger::named("b");
        assert!(!a.streams().same_table(b.streams()));
    }

    #[test]
    fn test_custom_table_is_held_by_reference() {
        let table = StreamTable::new();
        let logger = Logger::with_options(
            Some("svc"),
            None,
            LoggerOptions {
                streams: Some(table.clone()),
                ..LoggerOptions::default()
            },
        )
        .unwrap();

        table.insert(MemoryStream::new(), LevelSet::all());
        assert!(logger.streams().same_table(&table));
        assert_eq!(logger.streams().len(), 1);
    }

    #[test]
    fn test_invalid_initial_level_fails() {
        let err = Logger::builder().level("loud").build().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidArgument { .. }));

        let err = Logger::with_options(None, Some(LevelValue::Float(1.5)), LoggerOptions::default())
            .unwrap_err();
        assert!(matches!(err, LoggerError::InvalidArgument { .. }));
    }

    #[test]
    fn test_set_level_keeps_previous_on_error() {
        let logger = Logger::new();
        logger.set_level(5).unwrap();
        assert!(logger.set_level("five").is_err());
        assert!(logger.set_level(f64::NAN).is_err());
        assert_eq!(logger.level(), 5);
    }

    #[test]
    fn test_rejected_call_queues_nothing() {
        let (logger, memory) = memory_logger(LogLevel::Info);
        logger.fine(["x"]);
        logger.log(LogLevel::Finest, ["y"]);
        logger.flush().unwrap();

        assert!(memory.lines().is_empty());
        assert_eq!(logger.dispatcher().metrics().records_submitted(), 0);
    }

    #[test]
    fn test_convenience_methods_use_their_level() {
        let (logger, memory) = memory_logger(LogLevel::Finest);
        logger.severe(["s"]);
        logger.warning(["w"]);
        logger.info(["i"]);
        logger.fine(["f"]);
        logger.finer(["fr"]);
        logger.finest(["fst"]);
        logger.flush().unwrap();

        let lines = memory.lines();
        let expected = [
            ("SEVERE", "s"),
            ("WARNING", "w"),
            ("INFO", "i"),
            ("FINE", "f"),
            ("FINER", "fr"),
            ("FINEST", "fst"),
        ];
        assert_eq!(lines.len(), expected.len());
        for (line, (level, text)) in lines.iter().zip(expected) {
            assert!(
                line.ends_with(&format!("[test][{}] *** {}", level, text)),
                "{}",
                line
            );
        }
    }

    #[test]
    fn test_is_enabled_follows_threshold() {
        let logger = Logger::new();
        assert!(logger.is_enabled(LogLevel::Severe));
        assert!(logger.is_enabled(LogLevel::Warning));
        assert!(!logger.is_enabled(LogLevel::Info));

        logger.set_level(0).unwrap();
        assert!(!logger.is_enabled(LogLevel::Severe));
    }

    #[test]
    fn test_drop_delivers_accepted_lines() {
        let (logger, memory) = memory_logger(LogLevel::Severe);
        let dispatcher = Arc::clone(logger.dispatcher());
        for i in 0..3 {
            logger.severe([format!("accepted {}", i)]);
        }
        drop(logger);

        let lines = memory.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].ends_with("*** accepted 2"));
        assert_eq!(dispatcher.metrics().pending(), 0);
    }

    #[test]
    fn test_drop_on_global_dispatcher_delivers_lines() {
        let memory = MemoryStream::new();
        let table = StreamTable::new();
        table.insert(memory.clone(), LevelSet::all());
        let logger = Logger::with_options(
            Some("svc"),
            None,
            LoggerOptions {
                streams: Some(table),
                ..LoggerOptions::default()
            },
        )
        .unwrap();
        logger.severe(["before exit"]);
        drop(logger);

        let lines = memory.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("[svc][SEVERE] *** before exit"));
    }

    #[test]
    fn test_drop_after_dispatcher_shutdown_is_quiet() {
        let (logger, memory) = memory_logger(LogLevel::Severe);
        logger.severe(["drained"]);
        assert!(logger.dispatcher().shutdown(std::time::Duration::from_secs(5)));
        logger.severe(["discarded"]);
        drop(logger);
        assert_eq!(memory.lines().len(), 1);
    }

    #[test]
    fn test_level_lookup() {
        assert_eq!(Logger::level_rank("info"), Some(3));
        assert_eq!(Logger::level_rank("verbose"), None);
        assert_eq!(Logger::levels().len(), 6);
    }
}
