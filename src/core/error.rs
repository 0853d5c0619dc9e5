//! Error types
//!
//! The logging path itself has no error taxonomy: `log` and `write`
//! either perform their effect or are a no-op, and sink faults
//! propagate to the caller. The only fallible operation in the crate
//! is parsing a [`Severity`](super::Severity) from text.

/// Returned when a string does not name a known severity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid severity: '{input}'")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}
