pub mod call_site;
pub mod constants;
pub mod global;
pub mod log_bridge;
pub mod log_config;
pub mod log_error;
pub mod log_level;
pub mod log_macros;
pub mod log_msg;
pub mod log_sink;
pub mod logger;
pub mod noop_log_sink;

pub use call_site::CallSite;
pub use log_config::LoggerConfig;
pub use log_error::LogError;
pub use log_level::LogLevel;
pub use log_sink::LogSink;
pub use logger::Logger;
pub use noop_log_sink::NoopLogSink;
