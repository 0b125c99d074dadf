//! Process-wide default logger
//!
//! Built on first use from [`LoggerConfig::from_env`] and kept for the life
//! of the process. The free functions here are `#[track_caller]`, so the
//! call site reported for them is the caller's, exactly as if the caller had
//! used a `Logger` directly.
//!
//! Code that needs isolation (tests in particular) should construct its own
//! [`Logger`] instead of going through this instance.

use super::{
    call_site::CallSite,
    config::LoggerConfig,
    error::Result,
    log_level::{LogLevel, Severity},
    logger::Logger,
};
use crate::sinks::Sink;
use std::fmt;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The shared instance, created on first call.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| {
        let config = LoggerConfig::from_env().unwrap_or_else(|e| {
            eprintln!(
                "[LOGGER WARNING] Ignoring logger environment settings: {}",
                e
            );
            LoggerConfig::default()
        });
        Logger::builder().config(config).build()
    })
}

pub fn set_log_level(level: LogLevel) {
    default_logger().set_log_level(level);
}

pub fn set_output<S: Sink + 'static>(sink: S) {
    default_logger().set_output(sink);
}

pub fn configure(config: &LoggerConfig) {
    default_logger().configure(config);
}

#[inline]
#[track_caller]
pub fn trace(message: impl fmt::Display) -> Result<()> {
    default_logger().log(Severity::Trace, CallSite::caller(), message)
}

#[inline]
#[track_caller]
pub fn debug(message: impl fmt::Display) -> Result<()> {
    default_logger().log(Severity::Debug, CallSite::caller(), message)
}

#[inline]
#[track_caller]
pub fn info(message: impl fmt::Display) -> Result<()> {
    default_logger().log(Severity::Info, CallSite::caller(), message)
}

#[inline]
#[track_caller]
pub fn warn(message: impl fmt::Display) -> Result<()> {
    default_logger().log(Severity::Warn, CallSite::caller(), message)
}

#[inline]
#[track_caller]
pub fn error(message: impl fmt::Display) -> Result<()> {
    default_logger().log(Severity::Error, CallSite::caller(), message)
}

#[track_caller]
pub fn fatal(message: impl fmt::Display) -> ! {
    default_logger().fatal_at(CallSite::caller(), message)
}
