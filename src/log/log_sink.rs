use std::sync::Arc;

use crate::log::{call_site::CallSite, log_level::LogLevel};

/// Anything a component can hand its log records to.
///
/// Components take an injected sink (`Arc<dyn LogSink>` or `&impl LogSink`)
/// instead of reaching for process-wide state.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, msg: &str, site: CallSite);
}

impl<T: LogSink + ?Sized> LogSink for &T {
    #[inline]
    fn log(&self, level: LogLevel, msg: &str, site: CallSite) {
        (**self).log(level, msg, site);
    }
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    #[inline]
    fn log(&self, level: LogLevel, msg: &str, site: CallSite) {
        (**self).log(level, msg, site);
    }
}
