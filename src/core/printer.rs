//! Printer trait for rendering log lines to a destination

use super::{field::Fields, level::Level};
use parking_lot::Mutex;
use std::io::Write;

/// Renders one leveled message and its fields as a single line.
///
/// Printing never fails from the caller's point of view; a destination
/// that rejects the write is reported on stderr and otherwise ignored.
pub trait Printer: Send + Sync {
    fn print(&self, level: Level, message: &str, fields: &Fields);
    fn name(&self) -> &str;
}

/// Boxed byte sink behind its own mutex so a shared printer can write
/// through `&self`.
pub(crate) struct Sink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Sink {
    pub(crate) fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Write and flush one complete line. Callers hold the output lock.
    pub(crate) fn write_line(&self, printer: &str, line: &[u8]) {
        let mut writer = self.writer.lock();
        let result = writer.write_all(line).and_then(|()| writer.flush());
        if let Err(e) = result {
            let _ = writeln!(
                std::io::stderr(),
                "[LOGGER ERROR] {} printer write failed: {}",
                printer,
                e
            );
        }
    }
}
