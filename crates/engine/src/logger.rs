use std::{
    fmt::Debug,
    io::{self, Write},
};

use codemap::SpanLoc;

/// Receives what the optimizer has to say about a stylesheet
///
/// Set one with [`Options::logger`](crate::Options::logger). Nothing is
/// logged at all when [`Options::quiet`](crate::Options::quiet) is set.
pub trait Logger: Debug {
    /// Reports a decision, such as a selector that was removed. Only called
    /// when [`Options::verbose`](crate::Options::verbose) is set.
    fn debug(&self, message: &str);

    /// Reports a block that could not be processed and was left as written
    fn warning(&self, location: SpanLoc, message: &str);
}

/// Writes to standard error, locating warnings the way parse errors are
/// located
#[derive(Debug)]
pub struct StdLogger;

impl Logger for StdLogger {
    fn debug(&self, message: &str) {
        let _ = writeln!(io::stderr().lock(), "DEBUG: {}", message);
    }

    fn warning(&self, location: SpanLoc, message: &str) {
        let mut stderr = io::stderr().lock();

        let _ = writeln!(stderr, "Warning: {}", message);
        let _ = writeln!(
            stderr,
            "  {} {}:{}",
            location.file.name(),
            location.begin.line + 1,
            location.begin.column + 1
        );
    }
}

/// Discards everything
#[derive(Debug)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn debug(&self, _message: &str) {}

    fn warning(&self, _location: SpanLoc, _message: &str) {}
}
