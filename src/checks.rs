// src/checks.rs

//! The `check` subcommand.
//!
//! Reports the configuration the run resolved to: which file was used and
//! the effective value of each setting. Settings listed with `--require`
//! must resolve to a non-empty value or the command fails.

use anyhow::{bail, Result};
use clap::Args;

use crate::config::Settings;
use crate::sinks::OutputSink;

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Only report this setting (can be passed multiple times)
    #[arg(long = "key", value_name = "NAME")]
    pub keys: Vec<String>,

    /// Fail unless this setting has a value (can be passed multiple times)
    #[arg(long = "require", value_name = "NAME")]
    pub required: Vec<String>,
}

/// Entry point for `playbook check`.
pub fn run(args: &CheckArgs, settings: &Settings, sink: &mut dyn OutputSink) -> Result<()> {
    match settings.config_file_used() {
        Some(path) => sink.info(&format!("Config file: {}", path.display())),
        None => sink.info("Config file: none (defaults and environment only)"),
    }

    let keys = if args.keys.is_empty() {
        settings.keys()
    } else {
        args.keys.clone()
    };

    for key in &keys {
        sink.info(&format!("{}: {}", key, settings.get_string(key)));
    }

    let missing: Vec<&str> = args
        .required
        .iter()
        .filter(|name| settings.get(name).map_or(true, |value| value.is_empty()))
        .map(String::as_str)
        .collect();

    match missing.as_slice() {
        [] => Ok(()),
        [name] => bail!("required setting '{}' is not set", name),
        names => bail!("required settings are not set: {}", names.join(", ")),
    }
}
