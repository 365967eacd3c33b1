//! Stream routing table
//!
//! Maps each registered stream to the set of levels it accepts. The table is a
//! shared handle: clones point at the same routes, so a logger built with a
//! caller's table observes every later change the caller makes to it.

use super::error::{LoggerError, Result};
use super::log_level::{LevelSet, LogLevel};
use super::stream::{call_isolated, LogStream};
use crate::streams::ConsoleStream;
use parking_lot::{RwLock, RwLockWriteGuard};
use std::fmt;
use std::sync::Arc;

/// Handle to a route, returned by [`StreamTable::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreamId(u64);

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub(crate) struct Route {
    pub(crate) id: StreamId,
    pub(crate) stream: Box<dyn LogStream>,
    pub(crate) levels: LevelSet,
}

#[derive(Default)]
pub(crate) struct Routes {
    next_id: u64,
    pub(crate) entries: Vec<Route>,
}

#[derive(Clone, Default)]
pub struct StreamTable {
    inner: Arc<RwLock<Routes>>,
}

impl StreamTable {
    /// An empty table. Messages routed through it go nowhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default table: standard output, accepting every level.
    pub fn with_stdout() -> Self {
        let table = Self::new();
        table.insert(ConsoleStream::stdout(), LevelSet::all());
        table
    }

    /// Register a stream with its accepted levels.
    pub fn insert<S>(&self, stream: S, levels: impl Into<LevelSet>) -> StreamId
    where
        S: LogStream + 'static,
    {
        let mut routes = self.inner.write();
        let id = StreamId(routes.next_id);
        routes.next_id += 1;
        routes.entries.push(Route {
            id,
            stream: Box::new(stream),
            levels: levels.into(),
        });
        id
    }

    /// Replace the accepted levels of a route.
    pub fn set_levels(&self, id: StreamId, levels: impl Into<LevelSet>) -> Result<()> {
        let mut routes = self.inner.write();
        let route = routes
            .entries
            .iter_mut()
            .find(|route| route.id == id)
            .ok_or_else(|| unknown_stream(id))?;
        route.levels = levels.into();
        Ok(())
    }

    pub fn levels(&self, id: StreamId) -> Option<LevelSet> {
        self.inner
            .read()
            .entries
            .iter()
            .find(|route| route.id == id)
            .map(|route| route.levels)
    }

    /// Unregister a route and hand the stream back.
    pub fn remove(&self, id: StreamId) -> Result<Box<dyn LogStream>> {
        let mut routes = self.inner.write();
        let position = routes
            .entries
            .iter()
            .position(|route| route.id == id)
            .ok_or_else(|| unknown_stream(id))?;
        Ok(routes.entries.remove(position).stream)
    }

    /// Whether any route currently accepts `level`.
    pub fn accepts(&self, level: LogLevel) -> bool {
        self.inner
            .read()
            .entries
            .iter()
            .any(|route| route.levels.contains(level))
    }

    pub fn ids(&self) -> Vec<StreamId> {
        self.inner.read().entries.iter().map(|route| route.id).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }

    /// Whether both handles point at the same table.
    pub fn same_table(&self, other: &StreamTable) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Flush every stream. All streams are attempted, even past one that
    /// panics; the first error is returned.
    pub fn flush(&self) -> Result<()> {
        let mut routes = self.inner.write();
        let mut first_error = None;
        for route in routes.entries.iter_mut() {
            if let Err(e) = call_isolated(route.stream.as_mut(), |stream| stream.flush()) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Exclusive access for one dispatch job.
    pub(crate) fn lock_routes(&self) -> RwLockWriteGuard<'_, Routes> {
        self.inner.write()
    }
}

impl fmt::Debug for StreamTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let routes = self.inner.read();
        let mut list = f.debug_list();
        for route in &routes.entries {
            list.entry(&format_args!(
                "{} {} -> {}",
                route.id,
                route.stream.name(),
                route.levels
            ));
        }
        list.finish()
    }
}

fn unknown_stream(id: StreamId) -> LoggerError {
    LoggerError::invalid_argument("stream", format!("no stream registered as {}", id))
}
