//! Console stream implementation

use crate::core::{LogStream, LoggerError, Result};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Stdout,
    Stderr,
}

/// Standard output or standard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleStream {
    target: Target,
}

impl ConsoleStream {
    pub fn stdout() -> Self {
        Self {
            target: Target::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            target: Target::Stderr,
        }
    }

    pub fn is_stdout(&self) -> bool {
        self.target == Target::Stdout
    }
}

impl Default for ConsoleStream {
    fn default() -> Self {
        Self::stdout()
    }
}

impl LogStream for ConsoleStream {
    fn write(&mut self, text: &str) -> Result<()> {
        let result = match self.target {
            Target::Stdout => io::stdout().lock().write_all(text.as_bytes()),
            Target::Stderr => io::stderr().lock().write_all(text.as_bytes()),
        };
        result.map_err(|e| LoggerError::io_operation("writing log line", self.name(), e))
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            Target::Stdout => io::stdout().flush()?,
            Target::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.target {
            Target::Stdout => "stdout",
            Target::Stderr => "stderr",
        }
    }
}
