use std::{fmt, panic::Location};

/// Source file and line of the code that issued a log call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the caller.
    ///
    /// Propagates through every `#[track_caller]` frame, and inside a macro
    /// expansion resolves to the macro invocation.
    #[must_use]
    #[track_caller]
    pub fn here() -> Self {
        let loc = Location::caller();
        Self {
            file: loc.file(),
            line: loc.line(),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
