//! Lets records emitted through the `log` crate macros (`log::info!` and
//! friends, including those of third-party dependencies) land in a [`Logger`].

use crate::log::{call_site::CallSite, log_level::LogLevel, logger::Logger};

impl ::log::Log for Logger {
    // Level filtering happens in the facade through `log::set_max_level`.
    fn enabled(&self, _metadata: &::log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &::log::Record<'_>) {
        let site = CallSite::new(
            record
                .file_static()
                .or(record.module_path_static())
                .unwrap_or("<unknown>"),
            record.line().unwrap_or(0),
        );
        let text = record.args().to_string();
        self.log_at(LogLevel::from(record.level()), &text, site);
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}
