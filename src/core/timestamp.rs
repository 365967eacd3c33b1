//! Timestamp rendering for the line prefix
//!
//! Records capture `Utc::now()`; rendering converts to the configured zone and
//! always uses second precision: `2025-01-08 10:30:45`.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// strftime pattern of the prefix timestamp.
pub const TIMESTAMP_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Zone the prefix timestamp is rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampZone {
    /// The host's local time zone.
    #[default]
    Local,
    Utc,
}

impl TimestampZone {
    /// Format a captured instant as `YYYY-MM-DD HH:mm:ss`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_leveled_logger::TimestampZone;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let instant = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
    /// assert_eq!(TimestampZone::Utc.format(&instant), "2025-01-08 10:30:45");
    /// ```
    #[must_use]
    pub fn format(&self, instant: &DateTime<Utc>) -> String {
        match self {
            TimestampZone::Local => instant
                .with_timezone(&Local)
                .format(TIMESTAMP_PATTERN)
                .to_string(),
            TimestampZone::Utc => instant.format(TIMESTAMP_PATTERN).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.987 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(987)
    }

    #[test]
    fn test_utc_format_drops_subseconds() {
        let result = TimestampZone::Utc.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08 10:30:45");
    }

    #[test]
    fn test_local_format_matches_chrono_local() {
        let instant = fixed_datetime();
        let expected = instant
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        assert_eq!(TimestampZone::Local.format(&instant), expected);
    }

    #[test]
    fn test_format_shape() {
        let result = TimestampZone::default().format(&Utc::now());
        assert_eq!(result.len(), 19);
        let bytes = result.as_bytes();
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');
        assert_eq!(bytes[10], b' ');
        assert_eq!(bytes[13], b':');
        assert_eq!(bytes[16], b':');
    }

    #[test]
    fn test_default_is_local() {
        assert_eq!(TimestampZone::default(), TimestampZone::Local);
    }
}
