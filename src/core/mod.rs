//! Core logger types and traits

pub mod config;
pub mod error;
pub mod field;
pub mod level;
pub mod logger;
pub mod output_lock;
pub mod presenter;
pub mod printer;
pub mod terminal;

pub use config::{ColorChoice, Destination, LoggerConfig, OutputFormat};
pub use error::{LoggerError, Result};
pub use field::{Field, Fields};
pub use level::Level;
pub use logger::{ConsoleLogger, ExitFn, FATAL_EXIT_CODE};
pub use output_lock::OutputLock;
pub use presenter::{DefaultPresenter, FieldPresenter, Presenter, AGENT_NAME_FIELD};
pub use printer::Printer;
pub use terminal::{colors_supported, enable_windows_colors};
