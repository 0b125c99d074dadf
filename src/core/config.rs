//! Logger configuration
//!
//! A [`LoggerConfig`] is a plain snapshot of every runtime option. It can be
//! deserialized from an application's own config file, read from the
//! environment, or applied to a live logger in one step.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

pub const ENV_LEVEL: &str = "CONSOLE_LOG_LEVEL";
pub const ENV_COLOR: &str = "CONSOLE_LOG_COLOR";
pub const ENV_TIMESTAMP: &str = "CONSOLE_LOG_TIMESTAMP";
pub const ENV_DEBUG: &str = "CONSOLE_LOG_DEBUG";
pub const ENV_QUIET: &str = "CONSOLE_LOG_QUIET";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// How color is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when the sink reports a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against the sink's terminal probe.
    pub fn resolve(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        })
    }
}

impl FromStr for ColorMode {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" | "on" | "true" | "1" => Ok(ColorMode::Always),
            "never" | "off" | "false" | "0" => Ok(ColorMode::Never),
            other => Err(LoggerError::config(
                "color",
                format!("expected auto, always or never, got '{}'", other),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub color: ColorMode,
    pub timestamp: bool,
    pub debug: bool,
    pub quiet: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::All,
            color: ColorMode::Auto,
            timestamp: true,
            debug: false,
            quiet: false,
        }
    }
}

impl LoggerConfig {
    /// Read overrides from the process environment.
    ///
    /// Unset variables keep their defaults. `NO_COLOR` (non-empty) selects
    /// [`ColorMode::Never`] unless `CONSOLE_LOG_COLOR` is also set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_LEVEL) {
            config.level = value
                .parse()
                .map_err(|e: LoggerError| LoggerError::config(ENV_LEVEL, e.to_string()))?;
        }

        match lookup(ENV_COLOR) {
            Some(value) => {
                config.color = value.parse().map_err(|_| {
                    LoggerError::config(
                        ENV_COLOR,
                        format!("expected auto, always or never, got '{}'", value),
                    )
                })?;
            }
            None => {
                if lookup(ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
                    config.color = ColorMode::Never;
                }
            }
        }

        if let Some(value) = lookup(ENV_TIMESTAMP) {
            config.timestamp = parse_flag(ENV_TIMESTAMP, &value)?;
        }
        if let Some(value) = lookup(ENV_DEBUG) {
            config.debug = parse_flag(ENV_DEBUG, &value)?;
        }
        if let Some(value) = lookup(ENV_QUIET) {
            config.quiet = parse_flag(ENV_QUIET, &value)?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LoggerError::config(
            key,
            format!("expected a boolean, got '{}'", value),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.level, LogLevel::All);
        assert!(config.timestamp);
        assert!(!config.quiet);
    }

    #[test]
    fn test_overrides() {
        let config = LoggerConfig::from_lookup(lookup(&[
            (ENV_LEVEL, "warn"),
            (ENV_COLOR, "never"),
            (ENV_TIMESTAMP, "off"),
            (ENV_DEBUG, "yes"),
            (ENV_QUIET, "0"),
        ]))
        .expect("Failed to log");

        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.color, ColorMode::Never);
        assert!(!config.timestamp);
        assert!(config.debug);
        assert!(!config.quiet);
    }

    #[test]
    fn test_no_color() {
        let config = LoggerConfig::from_lookup(lookup(&[(ENV_NO_COLOR, "1")])).unwrap();
        assert_eq!(config.color, ColorMode::Never);

        let config = LoggerConfig::from_lookup(lookup(&[(ENV_NO_COLOR, "")])).unwrap();
        assert_eq!(config.color, ColorMode::Auto);

        let config =
            LoggerConfig::from_lookup(lookup(&[(ENV_NO_COLOR, "1"), (ENV_COLOR, "always")]))
                .expect("Failed to log");
        assert_eq!(config.color, ColorMode::Always);
    }

    #[test]
    fn test_invalid_values() {
        let err = LoggerConfig::from_lookup(lookup(&[(ENV_LEVEL, "loud")])).unwrap_err();
        assert!(err.to_string().contains(ENV_LEVEL));

        let err = LoggerConfig::from_lookup(lookup(&[(ENV_QUIET, "maybe")])).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { ref component, .. } if component == ENV_QUIET));

        assert!(LoggerConfig::from_lookup(lookup(&[(ENV_COLOR, "rainbow")])).is_err());
    }

    #[test]
    fn test_color_mode_resolve() {
        assert!(ColorMode::Auto.resolve(true));
        assert!(!ColorMode::Auto.resolve(false));
        assert!(ColorMode::Always.resolve(false));
        assert!(!ColorMode::Never.resolve(true));
    }
}
