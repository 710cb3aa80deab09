//! Main logger implementation

use super::{
    field::{Field, Fields},
    level::Level,
    printer::Printer,
};
use crate::printers::TextPrinter;
use std::fmt;
use std::sync::Arc;

/// Hook run after a fatal line has been written, with the exit status.
pub type ExitFn = Arc<dyn Fn(i32) + Send + Sync>;

/// Exit status passed to the exit hook by [`ConsoleLogger::fatal`]
pub const FATAL_EXIT_CODE: i32 = 1;

/// Leveled logger carrying context fields.
///
/// Values are cheap to clone. The `with_*` builders return a new logger
/// with its own level and its own copy of the fields, but the printer
/// (and therefore the destination and output lock) stays shared.
#[derive(Clone)]
pub struct ConsoleLogger {
    level: Level,
    fields: Fields,
    printer: Arc<dyn Printer>,
    exit_fn: ExitFn,
}

impl ConsoleLogger {
    /// Logger at the most verbose level that exits the process on fatal.
    #[must_use]
    pub fn new(printer: Arc<dyn Printer>) -> Self {
        Self {
            level: Level::Debug,
            fields: Fields::new(),
            printer,
            exit_fn: Arc::new(|code| std::process::exit(code)),
        }
    }

    /// Logger that writes nowhere, for code paths that must stay quiet
    #[must_use]
    pub fn discard() -> Self {
        Self::new(Arc::new(TextPrinter::new(std::io::sink())))
    }

    /// Replace the hook `fatal` calls after writing its line
    #[must_use]
    pub fn with_exit_fn(mut self, exit_fn: ExitFn) -> Self {
        self.exit_fn = exit_fn;
        self
    }

    /// New logger with `fields` appended to this logger's fields
    #[must_use]
    pub fn with_fields<I>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        let mut clone = self.clone();
        clone.fields.add(fields);
        clone
    }

    /// New logger with a different minimum level
    #[must_use]
    pub fn with_level(&self, level: Level) -> Self {
        let mut clone = self.clone();
        clone.level = level;
        clone
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn printer(&self) -> &Arc<dyn Printer> {
        &self.printer
    }

    /// Whether a call at `level` would be rendered.
    ///
    /// Debug is all-or-nothing: only a debug floor lets it through.
    /// Error and fatal always pass.
    pub fn enabled(&self, level: Level) -> bool {
        match level {
            Level::Debug => self.level == Level::Debug,
            Level::Info | Level::Notice | Level::Warn => self.level <= level,
            Level::Error | Level::Fatal => true,
        }
    }

    /// Render `message` at `level` if the gate allows it.
    ///
    /// `fatal` goes through here too but only [`ConsoleLogger::fatal`]
    /// runs the exit hook.
    pub fn log(&self, level: Level, message: impl fmt::Display) {
        if self.enabled(level) {
            self.printer
                .print(level, &message.to_string(), &self.fields);
        }
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, message);
    }

    pub fn notice(&self, message: impl fmt::Display) {
        self.log(Level::Notice, message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Level::Warn, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::Error, message);
    }

    /// Write the message, then call the exit hook with status 1.
    ///
    /// With the default hook this never returns.
    pub fn fatal(&self, message: impl fmt::Display) {
        self.log(Level::Fatal, message);
        (self.exit_fn)(FATAL_EXIT_CODE);
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("level", &self.level)
            .field("fields", &self.fields)
            .field("printer", &self.printer.name())
            .finish()
    }
}
