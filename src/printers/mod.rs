//! Printer implementations

pub mod json;
pub mod text;

pub use json::JsonPrinter;
pub use text::{TextPrinter, DATE_FORMAT};

// Re-export trait for convenience
pub use crate::core::Printer;
