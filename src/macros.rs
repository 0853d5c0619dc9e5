//! Logging macros with automatic call-site capture.
//!
//! These macros format the payload like `format!` and attach the
//! caller's file, enclosing function, and line number to the log call,
//! so call sites never spell that metadata out by hand.
//!
//! # Examples
//!
//! ```
//! use tracelog::prelude::*;
//! use tracelog::info;
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Capture the current call site: `file!()`, the enclosing function's
/// name, and `line!()`.
///
/// The function name comes from the type name of a function item
/// declared in place, which the compiler renders as the enclosing
/// path plus `::f`; the trailing segment is stripped here.
#[macro_export]
macro_rules! callsite {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        $crate::CallSite::new(file!(), &name[..name.len() - 3], line!())
    }};
}

/// Log a message with automatic formatting and call-site capture.
///
/// # Examples
///
/// ```
/// # use tracelog::prelude::*;
/// # let logger = Logger::new();
/// use tracelog::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, format_args!($($arg)+), $crate::callsite!())
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use tracelog::prelude::*;
/// # let logger = Logger::new();
/// use tracelog::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use tracelog::prelude::*;
/// # let logger = Logger::new();
/// use tracelog::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use tracelog::prelude::*;
/// # let logger = Logger::new();
/// use tracelog::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use tracelog::prelude::*;
/// # let logger = Logger::new();
/// use tracelog::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}
