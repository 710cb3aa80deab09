//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a `println!`-style interface on top of
//! [`ConsoleLogger`](crate::ConsoleLogger). Arguments are captured with
//! `format_args!`, so nothing is formatted when the level gate drops the
//! call.
//!
//! # Examples
//!
//! ```
//! use agent_logger::prelude::*;
//! use agent_logger::info;
//!
//! let logger = ConsoleLogger::discard();
//!
//! info!(logger, "Agent started");
//!
//! let job = "0190-abcd";
//! info!(logger, "Accepted job {}", job);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use agent_logger::prelude::*;
/// # let logger = ConsoleLogger::discard();
/// use agent_logger::log;
/// log!(logger, Level::Notice, "Simple message");
/// log!(logger, Level::Warn, "Retry {} of {}", 2, 5);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// ```
/// # use agent_logger::prelude::*;
/// # let logger = ConsoleLogger::discard();
/// use agent_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Notice, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message. Never filtered.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal message and run the logger's exit hook.
///
/// # Examples
///
/// ```
/// # use agent_logger::prelude::*;
/// # use std::sync::Arc;
/// # let logger = ConsoleLogger::discard().with_exit_fn(Arc::new(|_| {}));
/// use agent_logger::fatal;
/// fatal!(logger, "Unable to recover: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format_args!($($arg)+))
    };
}
