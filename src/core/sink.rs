//! Sink trait for log output destinations

/// A destination for finished, formatted log lines.
///
/// The logger formats each accepted call into a single string and
/// hands it to the active sink exactly once. Implementations decide
/// what "writing" means: the console sink prints to stdout, the
/// memory sink records for inspection in tests.
pub trait LogSink: Send + Sync {
    fn write(&self, message: &str);
}
