use crate::log::{
    call_site::CallSite,
    constants::{BLUE, RESET},
    log_level::LogLevel,
};

/// Represents a single log message event.
///
/// Rendering happens before the sink lock is taken, so each sink receives one
/// complete string per record.
#[derive(Debug, Clone)]
pub struct LogMsg {
    /// The severity level of the log.
    pub level: LogLevel,
    /// The actual content of the log message.
    pub text: String,
    /// Where the log call was issued.
    pub site: CallSite,
}

impl LogMsg {
    /// Creates a new `LogMsg` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sitelog::log::{call_site::CallSite, log_level::LogLevel, log_msg::LogMsg};
    ///
    /// let msg = LogMsg::new(LogLevel::Info, "Connection established", CallSite::new("main.rs", 3));
    /// assert_eq!(msg.file_line(), "[  INFO   ] main.rs:3 > Connection established\n");
    /// ```
    pub fn new(level: LogLevel, text: impl Into<String>, site: CallSite) -> Self {
        Self {
            level,
            text: text.into(),
            site,
        }
    }

    /// Colored console rendering, newline-terminated.
    ///
    /// Debug records are a single line without location; every other level
    /// puts the location on a header line and the message on the next.
    #[must_use]
    pub fn console_line(&self) -> String {
        let color = self.level.color();
        let tag = self.level.tag();
        match self.level {
            LogLevel::Debug => format!("{color}{tag}{RESET} > {}\n", self.text),
            _ => format!("{color}{tag}{BLUE}{}\n{RESET} > {}\n", self.site, self.text),
        }
    }

    /// Plain file rendering, newline-terminated.
    #[must_use]
    pub fn file_line(&self) -> String {
        format!("{}{} > {}\n", self.level.tag(), self.site, self.text)
    }
}
