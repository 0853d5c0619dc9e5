//! Timestamp formatting for log lines

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering policy for the timestamp that opens every log line.
///
/// The default renders the short-date/long-time style the line format
/// contract specifies, made deterministic and locale-independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Short date, long time with UTC offset: `01/30/24 14:05:09 +0000`
    #[default]
    ShortDateLongTime,

    /// ISO 8601 with milliseconds and offset: `2024-01-30T14:05:09.123+00:00`
    Iso8601,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use tracelog::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%Y-%m-%d".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::ShortDateLongTime => {
                datetime.format("%m/%d/%y %H:%M:%S %z").to_string()
            }
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}
