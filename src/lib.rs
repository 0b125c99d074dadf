//! # Console Logger
//!
//! A leveled, colorized console logger.
//!
//! ## Features
//!
//! - **Allocation-conscious**: one reusable line buffer per logger, with
//!   integers and timestamps encoded straight into it
//! - **Thread Safe**: concurrent callers never see interleaved lines
//! - **Terminal Aware**: color switches on when the sink is a terminal
//! - **Call Sites**: error, fatal and debug lines carry `function:file:line`
//! - **Easy to Use**: a process-wide default logger behind free functions
//!   and macros, or explicit `Logger` instances
//!
//! ## Line format
//!
//! ```text
//! [ERROR] 2021/05/16 09:06:54 app::run:main.rs:12 connection refused
//! ```
//!
//! # Example
//!
//! ```
//! use console_logger::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder()
//!     .timestamp(false)
//!     .color(ColorMode::Never)
//!     .output(sink.clone())
//!     .build();
//!
//! console_logger::info!(logger, "listening on port {}", 8080).unwrap();
//! assert_eq!(sink.to_string_lossy(), "[INFO]  listening on port 8080\n");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallSite, ColorMode, LevelLogger, LogLevel, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, NoopLogger, Result, Severity,
    };
    pub use crate::sinks::{FileSink, MemorySink, Sink};
}

pub use crate::core::global::{
    configure, debug, error, fatal, info, set_log_level, set_output, trace, warn,
};
#[cfg(feature = "log-facade")]
pub use crate::core::init_log_facade;
pub use crate::core::{
    default_logger, CallSite, ColorMode, LevelLogger, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, NoopLogger, Prefix, Result, Severity, FATAL_EXIT_CODE,
};
pub use sinks::{FileSink, MemorySink, Sink};
