//! Main logger implementation

use super::{
    call_site::CallSite,
    color::ColorBuffer,
    config::{ColorMode, LoggerConfig},
    error::{LoggerError, Result},
    log_level::{LogLevel, Severity},
    prefix::Prefix,
    timestamp,
};
use crate::sinks::Sink;
use parking_lot::RwLock;
use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::process;

/// Exit status used by the fatal severity.
pub const FATAL_EXIT_CODE: i32 = 1;

const INITIAL_BUFFER_CAPACITY: usize = 256;

struct State {
    color: bool,
    sink: Box<dyn Sink>,
    debug: bool,
    timestamp: bool,
    quiet: bool,
    buf: ColorBuffer,
    level: LogLevel,
}

/// A synchronous, single-sink console logger.
///
/// One read-write lock guards the configuration, the sink and a line buffer
/// reused by every call. Formatting and writing happen under the write lock,
/// so lines from concurrent callers never interleave.
///
/// # Example
///
/// ```
/// use console_logger::{Logger, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::new();
/// logger.set_output(sink.clone()).without_timestamp();
///
/// logger.info("hello").unwrap();
/// assert_eq!(sink.to_string_lossy(), "[INFO]  hello\n");
/// ```
pub struct Logger {
    state: RwLock<State>,
}

impl Logger {
    /// Logger writing to stdout, colored when stdout is a terminal, with
    /// timestamps on and every severity enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(LoggerConfig::default(), Box::new(io::stdout()))
    }

    fn from_parts(config: LoggerConfig, sink: Box<dyn Sink>) -> Self {
        let color = config.color.resolve(sink.is_tty());
        Self {
            state: RwLock::new(State {
                color,
                sink,
                debug: config.debug,
                timestamp: config.timestamp,
                quiet: config.quiet,
                buf: ColorBuffer::with_capacity(INITIAL_BUFFER_CAPACITY),
                level: config.level,
            }),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use console_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .level(LogLevel::Warn)
    ///     .color(ColorMode::Never)
    ///     .output(MemorySink::new())
    ///     .build();
    /// assert_eq!(logger.log_level(), LogLevel::Warn);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn set_log_level(&self, level: LogLevel) -> &Self {
        self.state.write().level = level;
        self
    }

    pub fn log_level(&self) -> LogLevel {
        self.state.read().level
    }

    /// Replace the sink. Color is switched on exactly when the new sink
    /// reports a terminal, overriding any earlier [`with_color`](Self::with_color).
    pub fn set_output<S: Sink + 'static>(&self, sink: S) -> &Self {
        let color = sink.is_tty();
        let mut state = self.state.write();
        state.color = color;
        state.sink = Box::new(sink);
        self
    }

    pub fn with_color(&self) -> &Self {
        self.state.write().color = true;
        self
    }

    pub fn without_color(&self) -> &Self {
        self.state.write().color = false;
        self
    }

    /// Set the debug flag. Purely informational: Debug and Trace output is
    /// gated by the threshold alone.
    pub fn with_debug(&self) -> &Self {
        self.state.write().debug = true;
        self
    }

    pub fn without_debug(&self) -> &Self {
        self.state.write().debug = false;
        self
    }

    pub fn with_timestamp(&self) -> &Self {
        self.state.write().timestamp = true;
        self
    }

    pub fn without_timestamp(&self) -> &Self {
        self.state.write().timestamp = false;
        self
    }

    /// Suppress all output until [`no_quiet`](Self::no_quiet).
    pub fn quiet(&self) -> &Self {
        self.state.write().quiet = true;
        self
    }

    pub fn no_quiet(&self) -> &Self {
        self.state.write().quiet = false;
        self
    }

    pub fn is_debug(&self) -> bool {
        self.state.read().debug
    }

    pub fn is_quiet(&self) -> bool {
        self.state.read().quiet
    }

    pub fn is_color(&self) -> bool {
        self.state.read().color
    }

    pub fn is_timestamp(&self) -> bool {
        self.state.read().timestamp
    }

    /// Apply a whole configuration snapshot at once.
    ///
    /// [`ColorMode::Auto`] probes the current sink.
    pub fn configure(&self, config: &LoggerConfig) -> &Self {
        let mut state = self.state.write();
        state.color = config.color.resolve(state.sink.is_tty());
        state.level = config.level;
        state.timestamp = config.timestamp;
        state.debug = config.debug;
        state.quiet = config.quiet;
        self
    }

    /// Snapshot of the current settings, with color reported as resolved.
    pub fn config(&self) -> LoggerConfig {
        let state = self.state.read();
        LoggerConfig {
            level: state.level,
            color: if state.color {
                ColorMode::Always
            } else {
                ColorMode::Never
            },
            timestamp: state.timestamp,
            debug: state.debug,
            quiet: state.quiet,
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.state.write().sink.flush()?;
        Ok(())
    }

    /// Format one line and write it to the sink.
    ///
    /// Layout: prefix, optional `YYYY/MM/DD HH:MM:SS `, optional
    /// `function:file:line ` (when the prefix asks for it), the message, and
    /// a newline unless the message already ends with one. Returns `Ok(())`
    /// without doing anything when quiet; otherwise returns the sink's error,
    /// if any.
    pub fn output(
        &self,
        call_site: &CallSite,
        prefix: &Prefix,
        message: impl fmt::Display,
    ) -> Result<()> {
        if self.is_quiet() {
            return Ok(());
        }

        // Rendered before locking: a Display that logs would otherwise deadlock.
        let mut text = String::new();
        write!(text, "{}", message).map_err(|_| {
            LoggerError::formatter("message", "Display implementation returned an error")
        })?;
        let call_site = if prefix.requires_call_site() {
            call_site.resolved()
        } else {
            *call_site
        };
        let now = timestamp::now();

        let mut guard = self.state.write();
        let State {
            color,
            sink,
            timestamp: show_time,
            quiet,
            buf,
            ..
        } = &mut *guard;
        if *quiet {
            return Ok(());
        }
        let color = *color;

        buf.reset();
        buf.append(prefix.bytes(color));

        if *show_time {
            if color {
                buf.blue();
            }
            timestamp::append_timestamp(buf, &now);
            if color {
                buf.off();
            }
        }

        if prefix.requires_call_site() {
            if color {
                buf.orange();
            }
            buf.append(call_site.function().as_bytes());
            buf.append_byte(b':');
            buf.append(call_site.file().as_bytes());
            buf.append_byte(b':');
            buf.append_int(u64::from(call_site.line()), 0);
            buf.append_byte(b' ');
            if color {
                buf.off();
            }
        }

        buf.append(text.as_bytes());
        if !text.ends_with('\n') {
            buf.append_byte(b'\n');
        }

        sink.write_all(buf.bytes())?;
        sink.flush()?;
        Ok(())
    }

    /// Gate on severity, then emit through [`output`](Self::output).
    ///
    /// [`Severity::Fatal`] never returns: see [`fatal_at`](Self::fatal_at).
    pub fn log(
        &self,
        severity: Severity,
        call_site: CallSite,
        message: impl fmt::Display,
    ) -> Result<()> {
        if severity == Severity::Fatal {
            self.fatal_at(call_site, message);
        }
        if !severity.is_enabled(self.log_level()) {
            return Ok(());
        }
        self.output(&call_site, severity.prefix(), message)
    }

    /// Emit a fatal record (unless the threshold is [`LogLevel::Off`] or the
    /// logger is quiet) and exit the process with status 1.
    pub fn fatal_at(&self, call_site: CallSite, message: impl fmt::Display) -> ! {
        if Severity::Fatal.is_enabled(self.log_level()) {
            if let Err(e) = self.output(&call_site, Severity::Fatal.prefix(), message) {
                eprintln!("[LOGGER ERROR] Failed to write fatal record: {}", e);
            }
        }
        process::exit(FATAL_EXIT_CODE)
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl fmt::Display) -> Result<()> {
        self.log(Severity::Trace, CallSite::caller(), message)
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) -> Result<()> {
        self.log(Severity::Debug, CallSite::caller(), message)
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) -> Result<()> {
        self.log(Severity::Info, CallSite::caller(), message)
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) -> Result<()> {
        self.log(Severity::Warn, CallSite::caller(), message)
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) -> Result<()> {
        self.log(Severity::Error, CallSite::caller(), message)
    }

    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.fatal_at(CallSite::caller(), message)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config())
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use console_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .level(LogLevel::Info)
///     .timestamp(false)
///     .output(sink.clone())
///     .build();
///
/// logger.warn("disk almost full").unwrap();
/// assert_eq!(sink.to_string_lossy(), "[WARN]  disk almost full\n");
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    sink: Option<Box<dyn Sink>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            sink: None,
        }
    }

    /// Start from a full configuration snapshot
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn color(mut self, mode: ColorMode) -> Self {
        self.config.color = mode;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp(mut self, enabled: bool) -> Self {
        self.config.timestamp = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn debug(mut self, enabled: bool) -> Self {
        self.config.debug = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn quiet(mut self, enabled: bool) -> Self {
        self.config.quiet = enabled;
        self
    }

    /// Write to `sink` instead of stdout
    #[must_use = "builder methods return a new value"]
    pub fn output<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let sink = self.sink.unwrap_or_else(|| Box::new(io::stdout()));
        Logger::from_parts(self.config, sink)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
