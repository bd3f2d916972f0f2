// src/sinks/collecting.rs

use crate::sinks::{OutputSink, Severity};

/// An in-memory sink that records every message it receives.
///
/// Used by tests to inspect what a command would have printed.
#[derive(Debug, Default)]
pub struct CollectingSink {
    messages: Vec<(Severity, String)>,
}

impl CollectingSink {
    /// Create a new, empty collecting sink.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Borrow all collected messages in emission order.
    pub fn messages(&self) -> &[(Severity, String)] {
        &self.messages
    }

    /// Informational messages only.
    pub fn infos(&self) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|(severity, _)| *severity == Severity::Info)
            .map(|(_, message)| message.as_str())
            .collect()
    }

    /// All informational output joined the way the console would print it.
    pub fn stdout(&self) -> String {
        self.infos()
            .iter()
            .map(|m| format!("{}\n", m))
            .collect()
    }
}

impl OutputSink for CollectingSink {
    fn emit(&mut self, severity: Severity, message: &str) {
        self.messages.push((severity, message.to_string()));
    }
}
