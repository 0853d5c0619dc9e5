//! Sink redirection example
//!
//! Demonstrates swapping the output sink at runtime: messages go to a
//! capturing sink, are inspected, then flow back to the console.
//!
//! Run with: cargo run --example sink_redirection

use tracelog::prelude::*;
use tracelog::sinks::MemorySink;
use tracelog::{info, warn};

fn main() {
    println!("=== Tracelog - Sink Redirection Example ===\n");

    let logger = Logger::new();

    println!("1. Redirecting into a memory sink:");
    let capture = MemorySink::new();
    logger.set_sink(Box::new(capture.clone()));

    info!(logger, "recorded, not printed");
    warn!(logger, "also recorded");

    println!("   captured {} messages", capture.len());
    if let Some(last) = capture.read_last() {
        println!("   last captured: {}", last);
    }

    println!("\n2. Back to the console:");
    logger.set_sink(Box::new(ConsoleSink::new()));
    info!(logger, "printed again");

    println!("\n3. Clearing the capture:");
    capture.clear();
    println!("   captured {} messages after clear", capture.len());

    println!("\n=== Example completed successfully! ===");
}
