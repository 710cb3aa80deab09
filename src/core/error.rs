//! Error types for the logger system
//!
//! Logging calls never fail. These errors only surface while building
//! fields, parsing configuration or opening a destination.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A field was constructed with an empty key
    #[error("Field key must not be empty")]
    EmptyFieldKey,

    /// Unknown level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Unknown output format name
    #[error("Invalid output format: '{0}'")]
    InvalidFormat(String),

    /// Unknown color choice
    #[error("Invalid color choice: '{0}'")]
    InvalidColorChoice(String),

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }
}
