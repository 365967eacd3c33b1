//! Stream implementations

pub mod console;
pub mod memory;
pub mod writer;

pub use console::ConsoleStream;
pub use memory::MemoryStream;
pub use writer::WriterStream;

pub use crate::core::{LogStream, SharedStream};
