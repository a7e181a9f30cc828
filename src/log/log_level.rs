use std::fmt;

use crate::log::constants::{CYAN, DEBUG_TAG, ERROR_TAG, INFO_TAG, RED, WARN_TAG, YELLOW};

/// Defines the severity levels for log messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Developer diagnostics, only emitted when debug output is compiled in.
    Debug,
    /// Informational messages that highlight the progress of the application.
    Info,
    /// Designates potentially harmful situations.
    Warning,
    /// Designates error events. Always shown on the console.
    Error,
}

impl LogLevel {
    /// Fixed-width bracketed label, trailing space included.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Debug => DEBUG_TAG,
            LogLevel::Info => INFO_TAG,
            LogLevel::Warning => WARN_TAG,
            LogLevel::Error => ERROR_TAG,
        }
    }

    /// ANSI color the tag is painted with on the console.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            LogLevel::Debug | LogLevel::Info => CYAN,
            LogLevel::Warning => YELLOW,
            LogLevel::Error => RED,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        };
        f.write_str(name)
    }
}

impl From<::log::Level> for LogLevel {
    fn from(level: ::log::Level) -> Self {
        match level {
            ::log::Level::Error => LogLevel::Error,
            ::log::Level::Warn => LogLevel::Warning,
            ::log::Level::Info => LogLevel::Info,
            ::log::Level::Debug | ::log::Level::Trace => LogLevel::Debug,
        }
    }
}
