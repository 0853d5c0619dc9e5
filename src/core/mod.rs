//! Core logger types and traits

pub mod call_site;
pub mod error;
pub mod logger;
pub mod record;
pub mod severity;
pub mod sink;
pub mod timestamp;

pub use call_site::CallSite;
pub use error::ParseSeverityError;
pub use logger::{Logger, LoggerBuilder};
pub use record::LogRecord;
pub use severity::Severity;
pub use sink::LogSink;
pub use timestamp::TimestampFormat;
