// src/sinks/console.rs

use crate::sinks::{OutputSink, Severity};

/// Writes informational messages to stdout and errors to stderr.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for ConsoleSink {
    fn emit(&mut self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => println!("{}", message),
            Severity::Error => eprintln!("Error: {}", message),
        }
    }
}
