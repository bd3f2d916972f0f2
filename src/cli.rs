// src/cli.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::checks::CheckArgs;

/// playbook protection levels.
///
/// Settings are read from `~/.playbook.{yaml,yml,json,env}` (or `--config`)
/// and can be overridden by environment variables named after the key.
#[derive(Parser, Debug)]
#[command(name = "playbook", version, disable_help_subcommand = true)]
pub struct Cli {
    /// config file (default is $HOME/.playbook.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Toggle (currently has no effect)
    #[arg(short, long)]
    pub toggle: bool,

    /// Subcommand to execute; without one, environment info is printed.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the resolved configuration.
    Check(CheckArgs),
}
