//! In-memory stream, mostly for tests and for capturing output

use crate::core::{LogStream, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Captures every write. Clones share the same buffer, so a clone can be
/// registered in a routing table while another clone is inspected.
#[derive(Debug, Clone)]
pub struct MemoryStream {
    name: String,
    writes: Arc<Mutex<Vec<String>>>,
}

impl MemoryStream {
    pub fn new() -> Self {
        Self::named("memory")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            writes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Raw write calls, newline included.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }

    /// Written lines with their trailing newline removed.
    pub fn lines(&self) -> Vec<String> {
        self.writes
            .lock()
            .iter()
            .map(|text| text.strip_suffix('\n').unwrap_or(text).to_string())
            .collect()
    }

    /// Everything written, concatenated.
    pub fn contents(&self) -> String {
        self.writes.lock().concat()
    }

    pub fn len(&self) -> usize {
        self.writes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.writes.lock().clear();
    }
}

impl Default for MemoryStream {
    fn default() -> Self {
        Self::new()
    }
}

impl LogStream for MemoryStream {
    fn write(&mut self, text: &str) -> Result<()> {
        self.writes.lock().push(text.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
