// src/main.rs

//! playbook
//!
//! Entry point for the playbook CLI.
//!
//! Responsibilities of this file:
//! - Capture the process environment and home-directory lookup
//! - Hand off to the runner
//! - Turn a returned error into a printed message and exit status 1
//!
//! There is intentionally *no business logic* here.

mod checks;
mod cli;
mod config;
mod logging;
mod runner;
mod sinks;
mod startup;
mod util;

use std::process::ExitCode;

use config::Environment;
use sinks::{ConsoleSink, OutputSink};

fn main() -> ExitCode {
    let mut sink = ConsoleSink::new();

    match runner::execute(
        std::env::args_os(),
        Environment::capture(),
        dirs::home_dir,
        &mut sink,
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            sink.error(&format!("{:#}", err));
            ExitCode::from(1)
        }
    }
}
