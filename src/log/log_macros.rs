//! Leveled logging macros taking a `{}` template plus arguments.
//!
//! - `logger_*!(sink, template, args...)` log through anything implementing
//!   [`LogSink`](crate::log::log_sink::LogSink): a `Logger`, a `&Logger`, an
//!   `Arc<dyn LogSink>`...
//! - `log_*!(template, args...)` log through the global logger and are dropped
//!   silently before [`global::init`](crate::log::global::init).
//!
//! The call-site reported is the line of the macro invocation.
//!
//! # Debug output
//! Debug macros are compiled in for debug builds, or when the `log-debug`
//! feature is enabled. Otherwise they expand to `()` and their arguments are
//! never evaluated.

// ============================================================================
// 1. GENERIC INTERNAL MACROS
// ============================================================================

#[doc(hidden)]
#[macro_export]
macro_rules! logger_log {
    ($sink:expr, $lvl:expr, $($arg:tt)+) => {{
        let __msg = $crate::format_template!($($arg)+);
        $crate::log::log_sink::LogSink::log(
            &$sink,
            $lvl,
            &__msg,
            $crate::log::call_site::CallSite::here(),
        );
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! global_log {
    ($lvl:expr, $($arg:tt)+) => {{
        if let ::std::option::Option::Some(__logger) = $crate::log::global::logger() {
            let __msg = $crate::format_template!($($arg)+);
            __logger.log_at($lvl, &__msg, $crate::log::call_site::CallSite::here());
        }
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS
// ============================================================================

// ---------------------- DEBUG ----------------------
#[cfg(any(debug_assertions, feature = "log-debug"))]
#[macro_export]
macro_rules! logger_debug { ($sink:expr, $($arg:tt)+) => { $crate::logger_log!($sink, $crate::log::log_level::LogLevel::Debug, $($arg)+) } }
#[cfg(any(debug_assertions, feature = "log-debug"))]
#[macro_export]
macro_rules! log_debug { ($($arg:tt)+) => { $crate::global_log!($crate::log::log_level::LogLevel::Debug, $($arg)+) } }

#[cfg(not(any(debug_assertions, feature = "log-debug")))]
#[macro_export]
macro_rules! logger_debug {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(any(debug_assertions, feature = "log-debug")))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[macro_export]
macro_rules! logger_info { ($sink:expr, $($arg:tt)+) => { $crate::logger_log!($sink, $crate::log::log_level::LogLevel::Info, $($arg)+) } }
#[macro_export]
macro_rules! log_info { ($($arg:tt)+) => { $crate::global_log!($crate::log::log_level::LogLevel::Info, $($arg)+) } }

// ---------------------- WARN ----------------------
#[macro_export]
macro_rules! logger_warn { ($sink:expr, $($arg:tt)+) => { $crate::logger_log!($sink, $crate::log::log_level::LogLevel::Warning, $($arg)+) } }
#[macro_export]
macro_rules! log_warn { ($($arg:tt)+) => { $crate::global_log!($crate::log::log_level::LogLevel::Warning, $($arg)+) } }

// ---------------------- ERROR ----------------------
#[macro_export]
macro_rules! logger_error { ($sink:expr, $($arg:tt)+) => { $crate::logger_log!($sink, $crate::log::log_level::LogLevel::Error, $($arg)+) } }
#[macro_export]
macro_rules! log_error { ($($arg:tt)+) => { $crate::global_log!($crate::log::log_level::LogLevel::Error, $($arg)+) } }

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use crate::log::{
        call_site::CallSite, log_level::LogLevel, log_sink::LogSink, noop_log_sink::NoopLogSink,
    };
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorder(Mutex<Vec<(LogLevel, String, CallSite)>>);

    impl LogSink for Recorder {
        fn log(&self, level: LogLevel, msg: &str, site: CallSite) {
            self.0.lock().unwrap().push((level, msg.to_string(), site));
        }
    }

    #[test]
    fn formats_and_records_invocation_line() {
        let rec = Recorder::default();
        logger_warn!(rec, "{} of {} slots", 3, 8);
        let line = line!() - 1;

        let entries = rec.0.lock().unwrap();
        let (level, msg, site) = &entries[0];
        assert_eq!(*level, LogLevel::Warning);
        assert_eq!(msg, "3 of 8 slots");
        assert_eq!(site.line, line);
        assert_eq!(site.file, file!());
    }

    #[test]
    fn works_through_arc_dyn_sink() {
        let rec = Arc::new(Recorder::default());
        let sink: Arc<dyn LogSink> = rec.clone();
        logger_info!(sink, "plain");
        logger_error!(&sink, "code {}", 7);

        let entries = rec.0.lock().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].1, "plain");
        assert_eq!(entries[1].0, LogLevel::Error);
        assert_eq!(entries[1].1, "code 7");
    }

    #[test]
    fn debug_macro_respects_build_mode() {
        let rec = Recorder::default();
        logger_debug!(rec, "tick {}", 1);
        let expected = usize::from(cfg!(any(debug_assertions, feature = "log-debug")));
        assert_eq!(rec.0.lock().unwrap().len(), expected);
    }

    #[test]
    fn noop_sink_accepts_everything() {
        logger_error!(NoopLogSink, "ignored {}", 1);
    }
}
