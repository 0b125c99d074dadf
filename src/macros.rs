//! Logging macros for ergonomic log message formatting.
//!
//! Each macro formats like `format!` and records the full call site,
//! including the enclosing function, which the plain methods cannot see.
//! With a logger as first argument they log through it (anything that
//! implements [`LevelLogger`](crate::LevelLogger), or a reference to one);
//! starting with the format string they log through the default logger.
//!
//! # Examples
//!
//! ```
//! use console_logger::prelude::*;
//! use console_logger::{error, info};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder()
//!     .timestamp(false)
//!     .color(ColorMode::Never)
//!     .output(sink.clone())
//!     .build();
//!
//! // Basic logging
//! info!(logger, "Server started").unwrap();
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//!
//! // Error lines carry the call site
//! error!(logger, "bind failed").unwrap();
//! let lines = sink.lines();
//! assert!(lines[2].starts_with("[ERROR] "));
//! assert!(lines[2].ends_with(" bind failed"));
//! ```

/// Log a message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::builder().output(MemorySink::new()).build();
/// use console_logger::log;
/// log!(logger, Severity::Info, "Simple message").unwrap();
/// log!(logger, Severity::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $crate::LevelLogger::log(
            &$logger,
            $severity,
            $crate::call_site!(),
            ::std::format_args!($($arg)+),
        )
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::builder().output(MemorySink::new()).build();
/// use console_logger::trace;
/// trace!(logger, "Entering function: calculate()").unwrap();
/// trace!(logger, "Variable value: {}", 42).unwrap();
/// ```
#[macro_export]
macro_rules! trace {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::default_logger(), $crate::Severity::Trace, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::default_logger(), $crate::Severity::Debug, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::builder().output(MemorySink::new()).build();
/// use console_logger::info;
/// info!(logger, "Application started").unwrap();
/// info!(logger, "Processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::default_logger(), $crate::Severity::Info, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::default_logger(), $crate::Severity::Warn, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::builder().output(MemorySink::new()).build();
/// use console_logger::error;
/// error!(logger, "Failed to connect to database").unwrap();
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::default_logger(), $crate::Severity::Error, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a fatal-level message and exit the process with status 1.
///
/// # Examples
///
/// ```no_run
/// # use console_logger::prelude::*;
/// # let logger = Logger::new();
/// use console_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($fmt:literal $($arg:tt)*) => {
        $crate::LevelLogger::fatal_at(
            $crate::default_logger(),
            $crate::call_site!(),
            ::std::format_args!($fmt $($arg)*),
        )
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::LevelLogger::fatal_at(
            &$logger,
            $crate::call_site!(),
            ::std::format_args!($($arg)+),
        )
    };
}
