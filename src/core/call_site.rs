//! Call-site metadata carried on every log record

use serde::Serialize;
use std::path::Path;

/// Identifies where a log call originated: source file, enclosing
/// function, and 1-based line number.
///
/// The logging macros build one automatically from `file!()`, the
/// enclosing function's type name, and `line!()`. Callers going
/// through [`Logger::log`](super::Logger::log) directly supply their
/// own; the values are rendered verbatim, with no validation or
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallSite {
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
}

impl CallSite {
    pub fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// Base name of the source file with its extension stripped,
    /// e.g. `src/core/logger.rs` becomes `logger`.
    pub fn file_stem(&self) -> &str {
        Path::new(self.file)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(self.file)
    }

    /// Bare function name: the last path segment of the captured
    /// function path, with closure frames trimmed.
    pub fn function_name(&self) -> &str {
        let mut name = self.function;
        while let Some(stripped) = name.strip_suffix("::{{closure}}") {
            name = stripped;
        }
        name.rsplit("::").next().unwrap_or(name)
    }
}
