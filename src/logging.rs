// src/logging.rs

//! Log subsystem setup.
//!
//! Diagnostics go to stderr through `tracing`. The filter comes from
//! `RUST_LOG` and defaults to `warn`, so normal runs stay quiet.

use std::io::{IsTerminal, Write};

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Marks the logging scope of the startup phase.
///
/// The subscriber writes straight to unbuffered stderr, so log lines are
/// never held back. Dropping the guard flushes stdout and stderr, which
/// settles anything printed during startup (such as `Using config file`)
/// before a command runs or the process exits.
#[must_use = "dropping the guard immediately ends the startup logging scope"]
#[derive(Debug)]
pub struct LogGuard {
    _private: (),
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
    }
}

/// Install the global subscriber (once) and return the scope guard.
///
/// Repeated calls are harmless: a second install attempt is ignored.
pub fn init() -> LogGuard {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();

    LogGuard { _private: () }
}
