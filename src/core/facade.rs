//! Bridge to the `log` crate facade
//!
//! Lets libraries that log through `log::info!` and friends end up in a
//! [`Logger`]. Levels map one-to-one; `log` has no fatal level, so nothing
//! routed through the facade ever exits the process.

use super::{
    call_site::{CallSite, UNKNOWN_FILE, UNKNOWN_FUNCTION},
    error::{LoggerError, Result},
    global::default_logger,
    log_level::Severity,
    logger::Logger,
};

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warn,
            log::Level::Info => Severity::Info,
            log::Level::Debug => Severity::Debug,
            log::Level::Trace => Severity::Trace,
        }
    }
}

fn record_call_site(record: &log::Record<'_>) -> CallSite {
    CallSite::new(
        record.module_path_static().unwrap_or(UNKNOWN_FUNCTION),
        record.file_static().unwrap_or(UNKNOWN_FILE),
        record.line().unwrap_or(0),
    )
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        !self.is_quiet() && Severity::from(metadata.level()).is_enabled(self.log_level())
    }

    fn log(&self, record: &log::Record<'_>) {
        let severity = Severity::from(record.level());
        if !severity.is_enabled(self.log_level()) {
            return;
        }
        if let Err(e) = self.output(&record_call_site(record), severity.prefix(), record.args()) {
            eprintln!("[LOGGER ERROR] Failed to write log record: {}", e);
        }
    }

    fn flush(&self) {
        if let Err(e) = Logger::flush(self) {
            eprintln!("[LOGGER ERROR] Failed to flush sink: {}", e);
        }
    }
}

/// Install the default logger as the `log` facade's backend.
///
/// Fails if another backend was installed first.
pub fn init_log_facade() -> Result<()> {
    log::set_logger(default_logger()).map_err(|_| LoggerError::SetLogger)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
