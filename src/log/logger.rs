use crate::log::{
    call_site::CallSite, log_config::LoggerConfig, log_error::LogError, log_level::LogLevel,
    log_msg::LogMsg, log_sink::LogSink,
};

use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

/// Whether debug records are emitted at all. Compiled in for debug builds, or
/// for any build with the `log-debug` feature.
pub const DEBUG_ENABLED: bool = cfg!(any(debug_assertions, feature = "log-debug"));

type ConsoleWriter = Box<dyn Write + Send>;

/// Everything guarded by the sink lock.
struct Sinks {
    show_info: bool,
    show_warn: bool,
    stdout: ConsoleWriter,
    stderr: ConsoleWriter,
    file: Option<File>,
    file_path: Option<PathBuf>,
}

impl Sinks {
    fn write_file(&mut self, line: &str) {
        if let Some(file) = self.file.as_mut() {
            let _ = file.write_all(line.as_bytes());
        }
    }

    fn write_stdout(&mut self, line: &str) {
        let _ = self.stdout.write_all(line.as_bytes());
        let _ = self.stdout.flush();
    }

    fn write_stderr(&mut self, line: &str) {
        let _ = self.stderr.write_all(line.as_bytes());
        let _ = self.stderr.flush();
    }
}

/// Synchronous console/file logger.
///
/// Every record is written on the calling thread while holding one lock, so
/// records from concurrent callers never interleave. Routing per level:
///
/// | level   | stdout              | stderr | file            |
/// |---------|---------------------|--------|-----------------|
/// | debug   | if [`DEBUG_ENABLED`]| -      | -               |
/// | info    | if `show_info`      | -      | if open         |
/// | warning | if `show_warn`      | -      | if open         |
/// | error   | -                   | always | if open         |
///
/// Write failures are swallowed; only opening the file sink reports errors.
///
/// # Example
///
/// ```no_run
/// use sitelog::log::{log_config::LoggerConfig, logger::Logger};
///
/// let logger = Logger::open(LoggerConfig::new("run.log", true, true))?;
/// logger.info("service started");
/// sitelog::logger_warn!(logger, "queue at {}%", 93);
/// # Ok::<(), sitelog::log::log_error::LogError>(())
/// ```
pub struct Logger {
    sinks: Mutex<Sinks>,
}

impl Logger {
    /// Creates a logger writing to the process stdout/stderr.
    ///
    /// # Errors
    ///
    /// [`LogError::OpenFile`] if a file path is configured and cannot be opened.
    pub fn open(config: LoggerConfig) -> Result<Self, LogError> {
        Self::open_with_console(config, io::stdout(), io::stderr())
    }

    /// Creates a logger with caller-provided console streams.
    ///
    /// # Errors
    ///
    /// [`LogError::OpenFile`] if a file path is configured and cannot be opened.
    pub fn open_with_console<O, E>(
        config: LoggerConfig,
        stdout: O,
        stderr: E,
    ) -> Result<Self, LogError>
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        let file = open_log_file(config.file_path.as_deref())?;
        Ok(Self {
            sinks: Mutex::new(Sinks {
                show_info: config.show_info,
                show_warn: config.show_warn,
                stdout: Box::new(stdout),
                stderr: Box::new(stderr),
                file,
                file_path: config.file_path,
            }),
        })
    }

    /// Applies a new configuration to a live logger.
    ///
    /// The configured file is opened (and truncated, even when it is the file
    /// already in use) under the sink lock, so no record can land through the
    /// previous handle after the truncation. On error the logger keeps its
    /// previous file and flags.
    ///
    /// # Errors
    ///
    /// [`LogError::OpenFile`] if the new file cannot be opened.
    pub fn reconfigure(&self, config: LoggerConfig) -> Result<(), LogError> {
        let mut sinks = self.lock_sinks();
        let file = open_log_file(config.file_path.as_deref())?;
        sinks.show_info = config.show_info;
        sinks.show_warn = config.show_warn;
        sinks.file = file;
        sinks.file_path = config.file_path;
        Ok(())
    }

    /// Path of the open file sink, if any.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        self.lock_sinks().file_path.clone()
    }

    #[track_caller]
    pub fn debug(&self, msg: impl AsRef<str>) {
        self.log_at(LogLevel::Debug, msg.as_ref(), CallSite::here());
    }

    #[track_caller]
    pub fn info(&self, msg: impl AsRef<str>) {
        self.log_at(LogLevel::Info, msg.as_ref(), CallSite::here());
    }

    #[track_caller]
    pub fn warn(&self, msg: impl AsRef<str>) {
        self.log_at(LogLevel::Warning, msg.as_ref(), CallSite::here());
    }

    #[track_caller]
    pub fn error(&self, msg: impl AsRef<str>) {
        self.log_at(LogLevel::Error, msg.as_ref(), CallSite::here());
    }

    /// Writes one record with an explicit call-site.
    pub fn log_at(&self, level: LogLevel, msg: &str, site: CallSite) {
        if level == LogLevel::Debug && !DEBUG_ENABLED {
            return;
        }
        self.dispatch(&LogMsg::new(level, msg, site));
    }

    fn dispatch(&self, msg: &LogMsg) {
        let console = msg.console_line();

        if msg.level == LogLevel::Debug {
            self.lock_sinks().write_stdout(&console);
            return;
        }

        let file_line = msg.file_line();
        let mut sinks = self.lock_sinks();
        sinks.write_file(&file_line);
        match msg.level {
            LogLevel::Info if sinks.show_info => sinks.write_stdout(&console),
            LogLevel::Warning if sinks.show_warn => sinks.write_stdout(&console),
            LogLevel::Error => sinks.write_stderr(&console),
            _ => {}
        }
    }

    /// Flushes every sink.
    pub fn flush(&self) {
        let mut sinks = self.lock_sinks();
        let _ = sinks.stdout.flush();
        let _ = sinks.stderr.flush();
        if let Some(file) = sinks.file.as_mut() {
            let _ = file.flush();
        }
    }

    // A writer that panicked mid-record leaves nothing half-initialized in
    // `Sinks`, so the poisoned state is safe to reuse.
    fn lock_sinks(&self) -> MutexGuard<'_, Sinks> {
        self.sinks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for Logger {
    #[inline]
    fn log(&self, level: LogLevel, msg: &str, site: CallSite) {
        self.log_at(level, msg, site);
    }
}

/// Opens `path` for writing, truncating it and creating missing parent
/// directories.
fn open_log_file(path: Option<&Path>) -> Result<Option<File>, LogError> {
    let Some(path) = path else {
        return Ok(None);
    };

    let open_err = |source| LogError::OpenFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(open_err)?;
    }

    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map(Some)
        .map_err(open_err)
}
