//! Stream over any `io::Write`

use crate::core::{LogStream, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Adapts an `io::Write` (file, socket, buffer) into a log stream.
pub struct WriterStream<W: Write + Send + Sync> {
    name: String,
    writer: W,
}

impl<W: Write + Send + Sync> WriterStream<W> {
    pub fn new(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}

impl WriterStream<BufWriter<File>> {
    /// Append to a file, creating it when missing.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rust_leveled_logger::streams::WriterStream;
    ///
    /// let stream = WriterStream::file("/var/log/app.log").unwrap();
    /// ```
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;
        Ok(Self::new(path.display().to_string(), BufWriter::new(file)))
    }
}

impl<W: Write + Send + Sync> LogStream for WriterStream<W> {
    fn write(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<W: Write + Send + Sync> Drop for WriterStream<W> {
    fn drop(&mut self) {
        // Buffered writers would otherwise lose their tail
        let _ = self.writer.flush();
    }
}
