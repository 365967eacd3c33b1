//! Stream routing example
//!
//! Demonstrates per-stream level sets, a table shared by two loggers and
//! routing changes that apply to messages still in the queue.
//!
//! Run with: cargo run --example stream_routing

use rust_leveled_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Leveled Logger - Stream Routing Example ===\n");

    // Problems go to stderr, everything else to stdout
    let table = StreamTable::new();
    let out = table.insert(
        ConsoleStream::stdout(),
        [LogLevel::Info, LogLevel::Fine, LogLevel::Finer, LogLevel::Finest],
    );
    let err = table.insert(
        ConsoleStream::stderr(),
        [LogLevel::Severe, LogLevel::Warning],
    );
    println!("stdout {} accepts {}", out, table.levels(out).unwrap_or_default());
    println!("stderr {} accepts {}\n", err, table.levels(err).unwrap_or_default());

    let http = Logger::builder()
        .name("http")
        .level(LogLevel::Finest)
        .streams(table.clone())
        .build()?;
    let db = Logger::builder()
        .name("db")
        .level(LogLevel::Info)
        .streams(table.clone())
        .build()?;

    println!("1. Two loggers sharing one table:");
    http.info(["GET /health 200"]);
    db.warning(["slow query took %dms", "1250"]);
    http.severe(["upstream timed out"]);
    db.fine(["below the db threshold, dropped"]);
    http.flush()?;

    println!("\n2. Routing is read when the queued message is written:");
    http.fine(["queued while stdout still accepts FINE"]);
    table.set_levels(out, LevelSet::only(LogLevel::Info))?;
    http.flush()?;
    println!("   (the FINE line above may or may not appear, depending on timing)");

    println!("\n3. Collecting lines in memory:");
    let memory = MemoryStream::named("audit");
    let audit = table.insert(memory.clone(), LevelSet::at_least(LogLevel::Warning));
    db.warning([Arg::from("replica lag %d seconds"), Arg::from(12)]);
    db.flush()?;
    table.remove(audit)?;
    for line in memory.lines() {
        println!("   captured: {}", line);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
