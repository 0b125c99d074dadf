//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The sink rejected a write or flush
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecognised threshold name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// A message's `Display` implementation failed
    #[error("Formatter error ({format_type}): {message}")]
    Formatter {
        format_type: String,
        message: String,
    },

    /// The `log` facade already has a backend installed
    #[cfg(feature = "log-facade")]
    #[error("Failed to install log facade backend")]
    SetLogger,
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Formatter {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from the output sink.
    pub fn is_io(&self) -> bool {
        matches!(self, LoggerError::Io(_))
    }
}
