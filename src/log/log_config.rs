use std::path::PathBuf;

use crate::{
    config::{Config, ConfigError},
    log::constants::{CONFIG_FILE_KEY, CONFIG_SECTION, CONFIG_SHOW_INFO_KEY, CONFIG_SHOW_WARN_KEY},
};

/// What a [`Logger`](crate::log::logger::Logger) writes and where.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Log file, truncated when the logger opens it. `None` disables the file sink.
    pub file_path: Option<PathBuf>,
    /// Echo info records on stdout.
    pub show_info: bool,
    /// Echo warning records on stdout.
    pub show_warn: bool,
}

impl LoggerConfig {
    /// An empty `file_path` means no file sink. A leading `~` is expanded.
    #[must_use]
    pub fn new(file_path: &str, show_info: bool, show_warn: bool) -> Self {
        let file_path = (!file_path.is_empty()).then(|| expand_path(file_path));
        Self {
            file_path,
            show_info,
            show_warn,
        }
    }

    /// Reads the `[Logging]` section: `log_file`, `show_info`, `show_warn`.
    /// Missing keys keep their defaults.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            file_path: config
                .get_non_empty(CONFIG_SECTION, CONFIG_FILE_KEY)
                .map(expand_path),
            show_info: config
                .get_bool(CONFIG_SECTION, CONFIG_SHOW_INFO_KEY)?
                .unwrap_or(false),
            show_warn: config
                .get_bool(CONFIG_SECTION, CONFIG_SHOW_WARN_KEY)?
                .unwrap_or(false),
        })
    }
}

/// Expands tilde (`~`) in file paths to the user's home directory.
fn expand_path(path_str: &str) -> PathBuf {
    if path_str.starts_with('~') {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from);

        if let Some(mut home_path) = home {
            if path_str == "~" {
                return home_path;
            }
            if let Some(rest) = path_str
                .strip_prefix("~/")
                .or_else(|| path_str.strip_prefix("~\\"))
            {
                home_path.push(rest);
                return home_path;
            }
        }
    }
    PathBuf::from(path_str)
}
