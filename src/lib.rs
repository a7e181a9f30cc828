//! sitelog is a small, synchronous console/file logger that tags every record
//! with its severity and the file:line it was issued from, plus the `{}`
//! template formatter it uses for messages.
//!
//! ```no_run
//! use sitelog::log::{Logger, LoggerConfig};
//!
//! let logger = Logger::open(LoggerConfig::new("app.log", true, false))?;
//! logger.info("starting");
//! sitelog::logger_error!(logger, "lost {} of {} peers", 2, 5);
//! # Ok::<(), sitelog::log::LogError>(())
//! ```

/// Handles configuration loading and management.
pub mod config;
/// Leveled logging to the console and an optional file.
pub mod log;
/// `{}` template substitution and concatenation.
pub mod text;
