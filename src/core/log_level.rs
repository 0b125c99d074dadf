//! Log level definitions
//!
//! [`LogLevel`] is the threshold a [`Logger`](super::Logger) is configured
//! with; [`Severity`] is the level a single record is emitted at.

use super::error::LoggerError;
use super::prefix::{self, Prefix};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum severity threshold.
///
/// `All` and `Off` are sentinels: they bound the ordering but have no
/// prefix of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    All = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
    Off = 5,
}

impl LogLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::All => "ALL",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Off => "OFF",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    /// Parse a threshold name, case-insensitively.
    ///
    /// `trace` and `debug` parse as [`LogLevel::All`], the only threshold
    /// that lets those severities through.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALL" | "TRACE" | "DEBUG" => Ok(LogLevel::All),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            "OFF" | "NONE" => Ok(LogLevel::Off),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

/// Severity of a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Whether a record of this severity passes `threshold`.
    ///
    /// Info through Fatal pass when `threshold <= level`. Debug and Trace
    /// have no threshold of their own and pass only under
    /// [`LogLevel::All`].
    ///
    /// ```
    /// use console_logger::{LogLevel, Severity};
    ///
    /// assert!(Severity::Error.is_enabled(LogLevel::Error));
    /// assert!(!Severity::Warn.is_enabled(LogLevel::Error));
    /// assert!(Severity::Debug.is_enabled(LogLevel::All));
    /// assert!(!Severity::Debug.is_enabled(LogLevel::Info));
    /// ```
    #[inline]
    pub fn is_enabled(self, threshold: LogLevel) -> bool {
        match self {
            Severity::Fatal => threshold <= LogLevel::Fatal,
            Severity::Error => threshold <= LogLevel::Error,
            Severity::Warn => threshold <= LogLevel::Warn,
            Severity::Info => threshold <= LogLevel::Info,
            Severity::Debug | Severity::Trace => threshold == LogLevel::All,
        }
    }

    #[inline]
    pub fn prefix(self) -> &'static Prefix {
        prefix::for_severity(self)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}
