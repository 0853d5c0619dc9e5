//! Sink implementations

pub mod console;
pub mod memory;

pub use console::ConsoleSink;
pub use memory::MemorySink;

// Re-export the trait next to its implementations
pub use crate::core::LogSink;
