//! Basic logger usage example
//!
//! Demonstrates level gating, context fields and both printers.
//!
//! Run with: cargo run --example basic_usage

use agent_logger::prelude::*;
use agent_logger::{debug, info, notice, warn};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Agent Logger - Basic Usage Example ===\n");

    // Text printer on stdout, colored when stdout is a terminal
    agent_logger::enable_windows_colors();
    let logger = ConsoleLogger::new(Arc::new(TextPrinter::stdout()));

    println!("1. Logging at every level:");
    debug!(logger, "Loaded {} plugins", 3);
    info!(logger, "Agent starting");
    notice!(logger, "Registered with the API");
    warn!(logger, "Retrying ping ({} of {})", 2, 5);
    logger.error("Upload failed");

    println!("\n2. Info floor hides debug:");
    let quiet = logger.with_level(Level::Info);
    quiet.debug("hidden");
    quiet.info("visible");

    println!("\n3. Context fields:");
    let job = quiet.with_fields([Field::new("job", "0190-abcd")?, Field::new("step", "build")?]);
    job.info("Job accepted");
    quiet.info("Parent logger is unchanged");

    println!("\n4. JSON lines from config:");
    let json = LoggerConfig::new()
        .apply_flags(false, false)
        .format(OutputFormat::Json)
        .build()?;
    json.with_fields([Field::new("job", "42")?]).error("boom");

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
