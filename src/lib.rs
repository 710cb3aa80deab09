//! # Agent Logger
//!
//! Leveled, field-annotated console logging for command-line agents.
//!
//! ## Features
//!
//! - **Level Gate**: debug is all-or-nothing, errors always get through
//! - **Context Fields**: immutable `with_fields` / `with_level` builders
//! - **Two Printers**: colored text for operators, JSON lines for automation
//! - **Thread Safe**: one output lock keeps concurrent lines whole
//!
//! ```
//! use agent_logger::prelude::*;
//! use std::sync::Arc;
//!
//! let logger = ConsoleLogger::new(Arc::new(TextPrinter::new(std::io::sink())))
//!     .with_level(Level::Info);
//! let job = logger.with_fields([Field::new("job", 42).unwrap()]);
//! agent_logger::info!(job, "hello {}", "world");
//! ```

pub mod core;
pub mod macros;
pub mod printers;

pub mod prelude {
    pub use crate::core::{
        ColorChoice, ConsoleLogger, DefaultPresenter, Destination, Field, FieldPresenter, Fields,
        Level, LoggerConfig, LoggerError, OutputFormat, OutputLock, Presenter, Printer, Result,
    };
    pub use crate::printers::{JsonPrinter, TextPrinter};
}

pub use crate::core::{
    colors_supported, enable_windows_colors, ColorChoice, ConsoleLogger, DefaultPresenter,
    Destination, ExitFn, Field, FieldPresenter, Fields, Level, LoggerConfig, LoggerError,
    OutputFormat, OutputLock, Presenter, Printer, Result, AGENT_NAME_FIELD, FATAL_EXIT_CODE,
};
pub use printers::{JsonPrinter, TextPrinter};
