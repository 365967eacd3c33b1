//! Core logger types and traits

pub mod arg;
pub mod dispatcher;
pub mod error;
pub mod layout;
pub mod level_value;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod stream;
pub mod stream_table;
pub mod timestamp;

pub use arg::{format_parts, Arg};
pub use dispatcher::{Dispatcher, DispatcherBuilder, WriteFailureCallback, DEFAULT_SHUTDOWN_TIMEOUT};
pub use error::{LoggerError, Result};
pub use layout::{LineLayout, CONTINUATION_MARKER, FIRST_LINE_MARKER};
pub use level_value::LevelValue;
pub use log_level::{LevelSet, LogLevel, LEVELS};
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder, LoggerOptions, DEFAULT_LEVEL};
pub use metrics::DispatchMetrics;
pub use stream::{LogStream, SharedStream};
pub use stream_table::{StreamId, StreamTable};
pub use timestamp::{TimestampZone, TIMESTAMP_PATTERN};
