//! Process-wide logger for code that cannot thread a [`Logger`] through.
//!
//! This is a thin wrapper: the singleton is an ordinary [`Logger`] stored in a
//! `OnceLock`. Calling [`init`] again reconfigures the same instance, which
//! truncates the configured file once more.

use std::sync::OnceLock;

use crate::log::{log_config::LoggerConfig, log_error::LogError, logger::Logger};

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Initializes (or re-initializes) the global logger.
///
/// An empty `file_path` disables the file sink.
///
/// # Errors
///
/// [`LogError::OpenFile`] if the file cannot be opened. On re-initialization
/// the previous configuration stays in effect.
pub fn init(
    file_path: &str,
    show_info: bool,
    show_warn: bool,
) -> Result<&'static Logger, LogError> {
    init_with(LoggerConfig::new(file_path, show_info, show_warn))
}

/// Same as [`init`] with a prepared [`LoggerConfig`].
///
/// # Errors
///
/// [`LogError::OpenFile`] if the file cannot be opened.
pub fn init_with(config: LoggerConfig) -> Result<&'static Logger, LogError> {
    if let Some(existing) = GLOBAL.get() {
        existing.reconfigure(config)?;
        return Ok(existing);
    }

    let logger = Logger::open(config.clone())?;
    if GLOBAL.set(logger).is_err() {
        // Another thread won the race; apply our configuration on top of it.
        if let Some(existing) = GLOBAL.get() {
            existing.reconfigure(config)?;
        }
    }
    GLOBAL.get().ok_or(LogError::NotInitialized)
}

/// The global logger, once [`init`] has succeeded.
#[must_use]
pub fn logger() -> Option<&'static Logger> {
    GLOBAL.get()
}

/// Registers the global logger with the `log` facade and sets its max level.
///
/// # Errors
///
/// - [`LogError::NotInitialized`] if [`init`] has not run yet.
/// - [`LogError::BridgeAlreadyInstalled`] if another `log` logger is registered.
pub fn install_log_bridge(max_level: ::log::LevelFilter) -> Result<(), LogError> {
    let logger = logger().ok_or(LogError::NotInitialized)?;
    ::log::set_logger(logger).map_err(|_| LogError::BridgeAlreadyInstalled)?;
    ::log::set_max_level(max_level);
    Ok(())
}
