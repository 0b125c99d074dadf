//! Leveled logging capability
//!
//! Code that only needs to emit records can take `&dyn LevelLogger` and be
//! handed either a real [`Logger`](super::Logger) or a [`NoopLogger`].

use super::{
    call_site::CallSite,
    error::Result,
    log_level::{LogLevel, Severity},
    logger::{Logger, FATAL_EXIT_CODE},
};
use crate::sinks::Sink;
use std::fmt;
use std::process;

pub trait LevelLogger: Send + Sync {
    fn log(
        &self,
        severity: Severity,
        call_site: CallSite,
        message: fmt::Arguments<'_>,
    ) -> Result<()>;

    fn set_log_level(&self, level: LogLevel);

    fn set_output(&self, sink: Box<dyn Sink>);

    #[track_caller]
    fn trace(&self, message: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Trace, CallSite::caller(), message)
    }

    #[track_caller]
    fn debug(&self, message: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Debug, CallSite::caller(), message)
    }

    #[track_caller]
    fn info(&self, message: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Info, CallSite::caller(), message)
    }

    #[track_caller]
    fn warn(&self, message: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Warn, CallSite::caller(), message)
    }

    #[track_caller]
    fn error(&self, message: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Error, CallSite::caller(), message)
    }

    /// Emit at fatal severity, then exit with status 1 whatever happened.
    #[track_caller]
    fn fatal(&self, message: fmt::Arguments<'_>) -> ! {
        self.fatal_at(CallSite::caller(), message)
    }

    fn fatal_at(&self, call_site: CallSite, message: fmt::Arguments<'_>) -> ! {
        let _ = self.log(Severity::Fatal, call_site, message);
        process::exit(FATAL_EXIT_CODE)
    }
}

impl<T: LevelLogger + ?Sized> LevelLogger for &T {
    fn log(
        &self,
        severity: Severity,
        call_site: CallSite,
        message: fmt::Arguments<'_>,
    ) -> Result<()> {
        T::log(*self, severity, call_site, message)
    }

    fn set_log_level(&self, level: LogLevel) {
        T::set_log_level(*self, level);
    }

    fn set_output(&self, sink: Box<dyn Sink>) {
        T::set_output(*self, sink);
    }

    fn fatal_at(&self, call_site: CallSite, message: fmt::Arguments<'_>) -> ! {
        T::fatal_at(*self, call_site, message)
    }
}

impl LevelLogger for Logger {
    fn log(
        &self,
        severity: Severity,
        call_site: CallSite,
        message: fmt::Arguments<'_>,
    ) -> Result<()> {
        Logger::log(self, severity, call_site, message)
    }

    fn set_log_level(&self, level: LogLevel) {
        Logger::set_log_level(self, level);
    }

    fn set_output(&self, sink: Box<dyn Sink>) {
        Logger::set_output(self, sink);
    }

    fn fatal_at(&self, call_site: CallSite, message: fmt::Arguments<'_>) -> ! {
        Logger::fatal_at(self, call_site, message)
    }
}

/// Discards every record. Fatal still exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl LevelLogger for NoopLogger {
    #[inline]
    fn log(
        &self,
        _severity: Severity,
        _call_site: CallSite,
        _message: fmt::Arguments<'_>,
    ) -> Result<()> {
        Ok(())
    }

    fn set_log_level(&self, _level: LogLevel) {}

    fn set_output(&self, _sink: Box<dyn Sink>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ColorMode;
    use crate::sinks::MemorySink;

    fn record_through(logger: &dyn LevelLogger) -> Result<()> {
        logger.warn(format_args!("disk at {}%", 91))?;
        logger.error(format_args!("disk full"))
    }

    #[test]
    fn test_logger_behind_trait() {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .color(ColorMode::Never)
            .timestamp(false)
            .output(sink.clone())
            .build();

        record_through(&logger).expect("Failed to log");

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "[WARN]  disk at 91%");
        assert!(lines[1].starts_with("[ERROR] "));
        assert!(lines[1].ends_with(" disk full"));
    }

    #[test]
    fn test_trait_level_and_output() {
        let first = MemorySink::new();
        let second = MemorySink::new();
        let logger = Logger::builder()
            .color(ColorMode::Never)
            .timestamp(false)
            .output(first.clone())
            .build();
        let handle: &dyn LevelLogger = &logger;

        handle.set_log_level(LogLevel::Error);
        handle.info(format_args!("hidden")).expect("Failed to log");
        handle.set_output(Box::new(second.clone()));
        handle.error(format_args!("shown")).expect("Failed to log");

        assert!(first.is_empty());
        assert_eq!(second.lines().len(), 1);
        assert_eq!(logger.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_noop_logger() {
        let noop = NoopLogger;
        noop.set_log_level(LogLevel::All);
        noop.set_output(Box::new(MemorySink::new()));
        assert!(record_through(&noop).is_ok());
        assert!(noop.trace(format_args!("ignored")).is_ok());
    }

    #[test]
    fn test_reference_forwards() {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .color(ColorMode::Never)
            .timestamp(false)
            .output(sink.clone())
            .build();
        let by_ref = &logger;

        LevelLogger::set_log_level(&by_ref, LogLevel::Warn);
        LevelLogger::info(&by_ref, format_args!("hidden")).expect("Failed to log");
        LevelLogger::warn(&by_ref, format_args!("shown")).expect("Failed to log");

        assert_eq!(sink.lines(), vec!["[WARN]  shown"]);
    }
}
