//! Line layout: prefix, markers and multi-line splitting
//!
//! Every physical line has the shape
//!
//! ```text
//! [2025-01-08 10:30:45][name][LEVEL] *** first line
//! [2025-01-08 10:30:45][name][LEVEL]     continuation
//! ```

use super::arg::format_parts;
use super::log_record::LogRecord;
use super::timestamp::TimestampZone;
use colored::Colorize;

/// Marker in front of the first line of a message.
pub const FIRST_LINE_MARKER: &str = "***";
/// Marker in front of continuation lines; same width as the first-line marker.
pub const CONTINUATION_MARKER: &str = "   ";

/// How a record is turned into text lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineLayout {
    pub zone: TimestampZone,
    /// Wrap segments in ANSI styling. Off by default.
    pub colors: bool,
}

impl LineLayout {
    pub fn new(zone: TimestampZone, colors: bool) -> Self {
        Self { zone, colors }
    }

    /// `[<timestamp>][<name>][<LEVEL>]`
    pub fn prefix(&self, record: &LogRecord, name: Option<&str>) -> String {
        let timestamp = self.zone.format(&record.timestamp);
        let name = name.unwrap_or("");
        let level = record.level.to_str();

        if self.colors {
            format!(
                "[{}][{}][{}]",
                timestamp.dimmed(),
                name.bold(),
                level.color(record.level.color())
            )
        } else {
            format!("[{}][{}][{}]", timestamp, name, level)
        }
    }

    /// Render a record into its lines, without trailing newlines.
    pub fn render(&self, record: &LogRecord, name: Option<&str>) -> Vec<String> {
        let prefix = self.prefix(record, name);
        let message = format_parts(&record.parts).replace('\r', "");

        message
            .split('\n')
            .enumerate()
            .map(|(idx, line)| {
                let marker = if idx == 0 {
                    FIRST_LINE_MARKER
                } else {
                    CONTINUATION_MARKER
                };
                format!("{} {} {}", prefix, marker, line)
            })
            .collect()
    }
}
