//! Log record structure and line formatting

use super::call_site::CallSite;
use super::severity::Severity;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Local};
use serde::Serialize;

/// One accepted log event: severity, rendered payload, call site, and
/// the timestamp captured at call time.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
    pub call_site: CallSite,
    pub timestamp: DateTime<Local>,
}

impl LogRecord {
    pub fn new(severity: Severity, message: String, call_site: CallSite) -> Self {
        Self {
            severity,
            message,
            call_site,
            timestamp: Local::now(),
        }
    }

    /// Render the record into the single line handed to the sink:
    ///
    /// ```text
    /// <timestamp> - <file-stem>.<function>: [<line>] [<Tag>]  <payload>
    /// ```
    ///
    /// Field order, punctuation, and the two spaces between tag and
    /// payload are part of the observable contract. The payload is
    /// rendered verbatim.
    pub fn format(&self, timestamp_format: &TimestampFormat) -> String {
        format!(
            "{} - {}.{}: [{}] {}  {}",
            timestamp_format.format(&self.timestamp),
            self.call_site.file_stem(),
            self.call_site.function_name(),
            self.call_site.line,
            self.severity.prefix(),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe_record(severity: Severity, message: &str) -> LogRecord {
        LogRecord::new(
            severity,
            message.to_string(),
            CallSite::new("src/server/handlers.rs", "app::handlers::dispatch", 42),
        )
    }

    #[test]
    fn test_line_layout_after_timestamp() {
        let record = probe_record(Severity::Warn, "queue depth high");
        let line = record.format(&TimestampFormat::default());

        let (_, rest) = line.split_once(" - ").expect("separator present");
        assert_eq!(rest, "handlers.dispatch: [42] [Warn]  queue depth high");
    }

    #[test]
    fn test_timestamp_opens_the_line() {
        let record = probe_record(Severity::Info, "x");
        let line = record.format(&TimestampFormat::default());

        // `%m/%d/%y %H:%M:%S %z` renders as a fixed-width 23-char field
        let (timestamp, _) = line.split_once(" - ").expect("separator present");
        assert_eq!(timestamp.len(), 23);
        assert_eq!(&timestamp[2..3], "/");
        assert_eq!(&timestamp[5..6], "/");
    }

    #[test]
    fn test_payload_rendered_verbatim() {
        let record = probe_record(Severity::Error, "odd payload\twith\ttabs");
        let line = record.format(&TimestampFormat::default());
        assert!(line.ends_with("[Error]  odd payload\twith\ttabs"));
    }

    #[test]
    fn test_custom_timestamp_format() {
        let record = probe_record(Severity::Debug, "x");
        let line = record.format(&TimestampFormat::Custom("@".to_string()));
        assert_eq!(line, "@ - handlers.dispatch: [42] [Debug]  x");
    }
}
