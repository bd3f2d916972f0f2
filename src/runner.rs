// src/runner.rs

//! Command dispatch.
//!
//! Order of operations for every invocation:
//! parse arguments → logging + settings (startup) → root diagnostics or
//! subcommand. Settings are passed down explicitly; nothing is global.

use anyhow::{bail, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::checks;
use crate::cli::{Cli, Command};
use crate::config::{Environment, Settings};
use crate::sinks::OutputSink;
use crate::startup;

const SOURCES_LINE: &str = "Check our Sources at https://github.com/Continuous-X/continuousSec";
const CONTACT_LINE: &str = "Get in contact via github issue.....";

/// Entry point from `main.rs`.
///
/// `--help` and `--version` print their text and succeed. Any other
/// argument error, startup error, or command error is returned.
pub fn execute<I, T, H>(
    args: I,
    env: Environment,
    home_dir: H,
    sink: &mut dyn OutputSink,
) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    H: FnOnce() -> Option<PathBuf>,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            err.print()?;
            return Ok(());
        }
        Err(err) => {
            let rendered = err.render().to_string();
            bail!("{}", rendered.trim().trim_start_matches("error: "));
        }
    };

    let settings = startup::initialize(cli.config.as_deref(), home_dir, env, sink)?;
    run(cli, &settings, sink)
}

/// Route a parsed command line to the root action or a subcommand.
pub fn run(cli: Cli, settings: &Settings, sink: &mut dyn OutputSink) -> Result<()> {
    tracing::debug!(
        toggle = cli.toggle,
        verbose = settings.get_bool("verbose"),
        "dispatching"
    );

    match cli.command {
        None => {
            print_info(settings, sink);
            Ok(())
        }
        Some(Command::Check(args)) => checks::run(&args, settings, sink),
    }
}

/// Root action: platform, project links and configured author.
fn print_info(settings: &Settings, sink: &mut dyn OutputSink) {
    sink.info(&format!(
        "Operating System: {}\nArchitecture: {}\n{}\n{}\nAuthor: {}",
        std::env::consts::OS,
        std::env::consts::ARCH,
        SOURCES_LINE,
        CONTACT_LINE,
        settings.get_string("author"),
    ));
}
