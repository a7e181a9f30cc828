// Fixed-width level tags. The trailing space is part of the tag.
pub const DEBUG_TAG: &str = "[  DEBUG  ] ";
pub const INFO_TAG: &str = "[  INFO   ] ";
pub const WARN_TAG: &str = "[ WARNING ] ";
pub const ERROR_TAG: &str = "[  ERROR  ] ";

// ANSI color codes used on the console only.
pub const RED: &str = "\x1b[0;31m";
pub const YELLOW: &str = "\x1b[1;33m";
pub const BLUE: &str = "\x1b[1;34m";
pub const CYAN: &str = "\x1b[0;36m";
pub const RESET: &str = "\x1b[0m";

/// Config section read by [`LoggerConfig::from_config`](crate::log::log_config::LoggerConfig::from_config).
pub const CONFIG_SECTION: &str = "Logging";
pub const CONFIG_FILE_KEY: &str = "log_file";
pub const CONFIG_SHOW_INFO_KEY: &str = "show_info";
pub const CONFIG_SHOW_WARN_KEY: &str = "show_warn";
