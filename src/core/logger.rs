//! Main logger implementation

use super::{
    call_site::CallSite, record::LogRecord, severity::Severity, sink::LogSink,
    timestamp::TimestampFormat,
};
use crate::sinks::ConsoleSink;
use parking_lot::RwLock;
use std::fmt;
use std::sync::OnceLock;

/// A leveled logger: filters calls against a minimum severity and
/// forwards each accepted, formatted line to the active [`LogSink`].
///
/// The threshold and the sink are the only mutable state, both behind
/// locks so `change`, `set_sink`, and `log` are safe to call from any
/// thread. Pass a `Logger` by reference to the code that needs it, or
/// use [`Logger::global`] for a single ambient instance.
pub struct Logger {
    threshold: RwLock<Severity>,
    sink: RwLock<Box<dyn LogSink>>,
    timestamp_format: TimestampFormat,
}

impl Logger {
    /// Create a logger with the default configuration: threshold
    /// `Debug`, console sink, short-date/long-time timestamps.
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: RwLock::new(Severity::Debug),
            sink: RwLock::new(Box::new(ConsoleSink::new())),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use tracelog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .threshold(Severity::Warn)
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// The process-wide ambient instance, created with the default
    /// configuration on first access.
    pub fn global() -> &'static Logger {
        static GLOBAL: OnceLock<Logger> = OnceLock::new();
        GLOBAL.get_or_init(Logger::new)
    }

    /// Set the minimum severity that will be emitted. Calls below the
    /// threshold are silently dropped. Takes effect immediately for
    /// all subsequent `log` calls.
    pub fn change(&self, threshold: Severity) {
        *self.threshold.write() = threshold;
    }

    /// Current filtering threshold.
    pub fn threshold(&self) -> Severity {
        *self.threshold.read()
    }

    /// Replace the active output destination. Subsequent accepted log
    /// calls go to the new sink and none to the old one.
    pub fn set_sink(&self, sink: Box<dyn LogSink>) {
        *self.sink.write() = sink;
    }

    /// Whether a call at `severity` would currently be emitted.
    #[inline]
    pub fn enabled(&self, severity: Severity) -> bool {
        severity.rank() >= self.threshold.read().rank()
    }

    /// Filter, format, and forward one log call.
    ///
    /// Suppressed calls return before any formatting happens. Accepted
    /// calls produce exactly one `write` on the active sink. The
    /// logging macros supply the call site automatically; direct
    /// callers pass their own, and whatever they pass is rendered
    /// verbatim.
    pub fn log(&self, severity: Severity, payload: impl fmt::Display, call_site: CallSite) {
        if !self.enabled(severity) {
            return;
        }

        let record = LogRecord::new(severity, payload.to_string(), call_site);
        let line = record.format(&self.timestamp_format);
        self.sink.read().write(&line);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use tracelog::prelude::*;
/// use tracelog::sinks::MemorySink;
///
/// let logger = Logger::builder()
///     .threshold(Severity::Info)
///     .sink(Box::new(MemorySink::new()))
///     .build();
/// ```
pub struct LoggerBuilder {
    threshold: Severity,
    sink: Option<Box<dyn LogSink>>,
    timestamp_format: TimestampFormat,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            threshold: Severity::Debug,
            sink: None,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the minimum severity
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the output sink. Defaults to the console sink if not used.
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Box<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Set the timestamp format
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            threshold: RwLock::new(self.threshold),
            sink: RwLock::new(
                self.sink
                    .unwrap_or_else(|| Box::new(ConsoleSink::new())),
            ),
            timestamp_format: self.timestamp_format,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
