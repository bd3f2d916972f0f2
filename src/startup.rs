// src/startup.rs

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::{self, Environment, Settings};
use crate::logging;
use crate::sinks::OutputSink;

/// Run the one-time startup phase: logging, then configuration.
///
/// The log guard lives until this function returns, so log output is
/// flushed on success and on the early error return alike. Errors are
/// handed back to the caller; nothing here exits the process.
pub fn initialize<H>(
    explicit_config: Option<&Path>,
    home_dir: H,
    env: Environment,
    sink: &mut dyn OutputSink,
) -> Result<Settings>
where
    H: FnOnce() -> Option<PathBuf>,
{
    let _logs = logging::init();

    let settings = config::resolve(explicit_config, home_dir, env, sink)?;
    tracing::debug!(
        config_file = ?settings.config_file_used(),
        "settings resolved"
    );

    Ok(settings)
}
