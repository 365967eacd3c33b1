//! # Rust Leveled Logger
//!
//! A small leveled logging facility: named loggers with a severity threshold,
//! deferred FIFO dispatch, and per-stream level routing.
//!
//! ## Features
//!
//! - **Six fixed levels**: `SEVERE` (1) down to `FINEST` (6); lower is more severe
//! - **Eager filtering, deferred writing**: the threshold is checked at call
//!   time, formatting and writing happen later on a dispatch worker
//! - **Stream routing**: each stream accepts its own set of levels
//! - **Multi-line aware**: continuation lines keep the prefix and align under
//!   the first line
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//! use rust_leveled_logger::warning;
//!
//! let memory = MemoryStream::new();
//! let logger = Logger::builder()
//!     .name("svc")
//!     .level(LogLevel::Info)
//!     .stream(memory.clone(), LevelSet::all())
//!     .build()
//!     .unwrap();
//!
//! warning!(logger, "disk at %d%%", 87);
//! logger.flush().unwrap();
//!
//! assert!(memory.lines()[0].ends_with("[svc][WARNING] *** disk at 87%"));
//! ```

pub mod core;
pub mod macros;
pub mod streams;

pub mod prelude {
    pub use crate::core::{
        Arg, DispatchMetrics, Dispatcher, LevelSet, LevelValue, LineLayout, LogLevel, LogStream,
        Logger, LoggerBuilder, LoggerError, LoggerOptions, Result, SharedStream, StreamId,
        StreamTable, TimestampZone,
    };
    pub use crate::streams::{ConsoleStream, MemoryStream, WriterStream};
}

pub use core::{
    format_parts, Arg, DispatchMetrics, Dispatcher, DispatcherBuilder, LevelSet, LevelValue,
    LineLayout, LogLevel, LogRecord, LogStream, Logger, LoggerBuilder, LoggerError,
    LoggerOptions, Result, SharedStream, StreamId, StreamTable, TimestampZone,
    WriteFailureCallback,
    DEFAULT_LEVEL, DEFAULT_SHUTDOWN_TIMEOUT, LEVELS,
};
pub use streams::{ConsoleStream, MemoryStream, WriterStream};
