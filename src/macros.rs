//! Logging macros for mixed-type message parts.
//!
//! Every argument is converted with `Arg::from`, so text, integers, floats and
//! booleans can be passed side by side. The first argument may be a format
//! string using `%s`, `%d`, `%i`, `%f` and `%%`.
//!
//! # Examples
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//! use rust_leveled_logger::info;
//!
//! let logger = Logger::new();
//! logger.set_level(LogLevel::Info).unwrap();
//!
//! info!(logger, "Server started");
//! info!(logger, "Server listening on port %d", 8080);
//! info!(logger, "user", 42, "performed", "login");
//! # logger.flush().unwrap();
//! ```

/// Log message parts at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_leveled_logger::log;
/// log!(logger, LogLevel::Severe, "Simple message");
/// log!(logger, LogLevel::Severe, "Error code: %d", 500);
/// # logger.flush().unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:expr),+ $(,)?) => {
        $logger.log($level, [$($crate::Arg::from($arg)),+])
    };
}

/// Log a severe-level message.
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_leveled_logger::severe;
/// severe!(logger, "Failed to connect to %s", "database");
/// # logger.flush().unwrap();
/// ```
#[macro_export]
macro_rules! severe {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Severe, $($arg),+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg),+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg),+)
    };
}

/// Log a fine-level message.
#[macro_export]
macro_rules! fine {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Fine, $($arg),+)
    };
}

/// Log a finer-level message.
#[macro_export]
macro_rules! finer {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Finer, $($arg),+)
    };
}

/// Log a finest-level message.
#[macro_export]
macro_rules! finest {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Finest, $($arg),+)
    };
}
