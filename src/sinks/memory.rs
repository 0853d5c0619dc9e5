//! Capturing sink for test isolation

use crate::core::LogSink;
use parking_lot::Mutex;
use std::sync::Arc;

/// Records every written line in order instead of printing it.
///
/// Clones share the same storage, so a test can keep a handle, hand a
/// clone to the logger, and inspect what arrived:
///
/// ```
/// use tracelog::prelude::*;
/// use tracelog::sinks::MemorySink;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder().sink(Box::new(sink.clone())).build();
///
/// tracelog::info!(logger, "captured");
/// assert!(sink.read_last().unwrap().contains("captured"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently written message, if any since the last clear.
    pub fn read_last(&self) -> Option<String> {
        self.messages.lock().last().cloned()
    }

    /// Discard all recorded messages.
    pub fn clear(&self) {
        self.messages.lock().clear();
    }

    /// All recorded messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

impl LogSink for MemorySink {
    fn write(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let sink = MemorySink::new();
        sink.write("first");
        sink.write("second");
        assert_eq!(sink.messages(), vec!["first", "second"]);
        assert_eq!(sink.read_last().as_deref(), Some("second"));
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_read_last_empty() {
        let sink = MemorySink::new();
        assert_eq!(sink.read_last(), None);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_clear_discards_everything() {
        let sink = MemorySink::new();
        sink.write("message");
        sink.clear();
        assert!(sink.is_empty());
        assert_eq!(sink.read_last(), None);
    }

    #[test]
    fn test_clones_share_storage() {
        let sink = MemorySink::new();
        let handle = sink.clone();
        sink.write("shared");
        assert_eq!(handle.read_last().as_deref(), Some("shared"));
    }
}
