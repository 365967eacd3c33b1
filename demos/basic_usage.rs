//! Basic logger usage example
//!
//! Demonstrates the six levels, the threshold, multi-line messages and
//! printf-style formatting on the default stdout table.
//!
//! Run with: cargo run --example basic_usage

use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{info, severe, warning};

fn main() -> Result<()> {
    println!("=== Leveled Logger - Basic Usage Example ===\n");

    // Default table routes every level to stdout; default threshold is WARNING
    let logger = Logger::named("demo");

    println!("1. Default threshold ({}):", logger.level());
    logger.severe(["This is a severe message"]);
    logger.warning(["This is a warning message"]);
    logger.info(["This info message is dropped"]);
    logger.flush()?;

    println!("\n2. Lowering the threshold to FINEST:");
    logger.set_level(LogLevel::Finest)?;
    logger.severe(["severe"]);
    logger.warning(["warning"]);
    logger.info(["info"]);
    logger.fine(["fine"]);
    logger.finer(["finer"]);
    logger.finest(["finest"]);
    logger.flush()?;

    println!("\n3. Thresholds must be integers:");
    match logger.set_level(2.5) {
        Ok(()) => println!("   unexpected: 2.5 accepted"),
        Err(e) => println!("   rejected: {}", e),
    }
    logger.set_level("3")?;
    println!("   threshold is now {}", logger.level());

    println!("\n4. Formatting and multi-line messages:");
    warning!(logger, "disk at %d%%", 87);
    info!(logger, "user %s logged in", "alice", "(extra part)");
    severe!(logger, "request failed:\n  at handler\r\n  at router");
    logger.flush()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
