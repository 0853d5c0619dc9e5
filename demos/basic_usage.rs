//! Basic logger usage example
//!
//! Demonstrates leveled logging to the console with call-site capture.
//!
//! Run with: cargo run --example basic_usage

use tracelog::prelude::*;
use tracelog::{debug, error, info, warn};

fn main() {
    println!("=== Tracelog - Basic Usage Example ===\n");

    // Default configuration: Debug threshold, console sink
    let logger = Logger::new();

    println!("1. Logging at different levels:");
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");
    warn!(logger, "This is a warning message");
    error!(logger, "This is an error message");

    println!("\n2. Raising the threshold to Warn:");
    logger.change(Severity::Warn);
    debug!(logger, "Debug message (hidden)");
    info!(logger, "Info message (hidden)");
    warn!(logger, "Warning message (visible)");
    error!(logger, "Error message (visible)");

    println!("\n3. Formatted payloads:");
    logger.change(Severity::Debug);
    let port = 8080;
    info!(logger, "Server listening on port {}", port);
    warn!(logger, "Retry attempt {} of {}", 2, 5);

    println!("\n4. The ambient instance:");
    info!(Logger::global(), "logged through Logger::global()");

    println!("\n=== Example completed successfully! ===");
}
