// src/sinks/mod.rs

//! Output sinks.
//!
//! Every user-facing message (the diagnostics block, "Using config file",
//! command errors) goes through an [`OutputSink`] rather than straight to
//! stdout/stderr, so commands can be exercised in tests without a terminal.

#[cfg(test)]
pub mod collecting;
pub mod console;

#[cfg(test)]
pub use collecting::CollectingSink;
pub use console::ConsoleSink;

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

pub trait OutputSink {
    fn emit(&mut self, severity: Severity, message: &str);

    fn info(&mut self, message: &str) {
        self.emit(Severity::Info, message);
    }

    fn error(&mut self, message: &str) {
        self.emit(Severity::Error, message);
    }
}
