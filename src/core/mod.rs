//! Core logger types and traits

pub mod buffer;
pub mod call_site;
pub mod color;
pub mod config;
pub mod error;
#[cfg(feature = "log-facade")]
pub mod facade;
pub mod global;
pub mod level_logger;
pub mod log_level;
pub mod logger;
pub mod prefix;
pub mod timestamp;

pub use buffer::Buffer;
pub use call_site::CallSite;
pub use color::ColorBuffer;
pub use config::{ColorMode, LoggerConfig};
pub use error::{LoggerError, Result};
#[cfg(feature = "log-facade")]
pub use facade::init_log_facade;
pub use global::default_logger;
pub use level_logger::{LevelLogger, NoopLogger};
pub use log_level::{LogLevel, Severity};
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use prefix::Prefix;
