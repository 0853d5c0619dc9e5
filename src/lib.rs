//! # Tracelog
//!
//! A minimal, leveled logging facade: severity filtering, line
//! formatting with call-site metadata, and a pluggable output sink.
//!
//! ## Features
//!
//! - **Leveled Filtering**: Debug, Info, Warn, Error thresholds compared by rank
//! - **Call-Site Capture**: file, function, and line recorded automatically by the macros
//! - **Pluggable Sinks**: console by default, swappable for a capturing sink in tests
//! - **Thread Safe**: threshold and sink changes are synchronized
//!
//! ## Quick start
//!
//! ```
//! use tracelog::prelude::*;
//! use tracelog::{info, warn};
//!
//! let logger = Logger::new();
//! info!(logger, "service listening on {}", 8080);
//!
//! logger.change(Severity::Warn);
//! info!(logger, "suppressed");
//! warn!(logger, "still emitted");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallSite, Logger, LoggerBuilder, LogRecord, LogSink, ParseSeverityError, Severity,
        TimestampFormat,
    };
    pub use crate::sinks::ConsoleSink;
}

pub use self::core::{
    CallSite, Logger, LoggerBuilder, LogRecord, LogSink, ParseSeverityError, Severity,
    TimestampFormat,
};
pub use self::sinks::ConsoleSink;
