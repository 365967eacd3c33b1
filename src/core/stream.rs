//! Output stream trait for log destinations

use super::error::{LoggerError, Result};
use parking_lot::{Mutex, MutexGuard};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// A destination that accepts text.
///
/// The dispatcher calls `write` once per rendered line, with the trailing
/// `\n` already appended.
///
/// # Restrictions
///
/// Stream code runs on the dispatch worker while the routing table it is
/// registered in is locked. Implementations must not touch that table (not
/// even `len()`), and must not call `flush` on a logger or dispatcher; the
/// worker would wait on itself.
pub trait LogStream: Send + Sync {
    fn write(&mut self, text: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

impl<S: LogStream + ?Sized> LogStream for Box<S> {
    fn write(&mut self, text: &str) -> Result<()> {
        (**self).write(text)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// One stream registered in several routing tables.
///
/// Clones write to the same underlying stream. The name is captured when the
/// wrapper is created, so reports still say which stream failed.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::prelude::*;
/// use rust_leveled_logger::SharedStream;
///
/// let audit = SharedStream::new(MemoryStream::named("audit"));
/// let http = StreamTable::new();
/// let db = StreamTable::new();
/// http.insert(audit.clone(), LogLevel::Severe);
/// db.insert(audit.clone(), LogLevel::Severe);
/// assert_eq!(audit.name(), "audit");
/// ```
pub struct SharedStream<S> {
    name: Arc<str>,
    inner: Arc<Mutex<S>>,
}

impl<S: LogStream> SharedStream<S> {
    pub fn new(stream: S) -> Self {
        Self {
            name: Arc::from(stream.name()),
            inner: Arc::new(Mutex::new(stream)),
        }
    }

    /// Access the wrapped stream. Blocks while the worker is writing to it.
    pub fn lock(&self) -> MutexGuard<'_, S> {
        self.inner.lock()
    }
}

impl<S> Clone for SharedStream<S> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: LogStream> LogStream for SharedStream<S> {
    fn write(&mut self, text: &str) -> Result<()> {
        self.inner.lock().write(text)
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.lock().flush()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Run one stream operation, turning a panic into `StreamPanicked`.
pub(crate) fn call_isolated<F>(stream: &mut dyn LogStream, op: F) -> Result<()>
where
    F: FnOnce(&mut dyn LogStream) -> Result<()>,
{
    match panic::catch_unwind(AssertUnwindSafe(|| op(&mut *stream))) {
        Ok(result) => result,
        Err(payload) => Err(LoggerError::stream_panicked(
            stream.name(),
            panic_message(payload.as_ref()),
        )),
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
