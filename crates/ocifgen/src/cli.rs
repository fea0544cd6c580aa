//! Command line surface and exit status.
//!
//! Settings resolve flag first, then the config file, then built-in
//! defaults. `RUST_LOG`, when set, replaces the resolved log level.

use crate::commands::{self, CheckOutcome};
use crate::config::{parse_level, OcifgenConfig, OutputConfig};
use crate::error::ConfigResult;
use anyhow::Result;
use clap::{Parser, Subcommand};
use oc_interfaces::{pe_interfaces, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};

/// OpenConfig PE interface snapshot tool
#[derive(Parser, Debug)]
#[command(name = "ocifgen")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Config file (defaults to /etc/ocifgen/ocifgen.toml when present)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off); overrides the config file
    #[arg(short = 'l', long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the PE interface set
    Show {
        /// Document format (json, yaml)
        #[arg(short = 'f', long)]
        format: Option<OutputFormat>,

        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,

        /// Write to a file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Check a stored document against the PE interface set
    Check {
        /// Document to check
        file: PathBuf,

        /// Document format (json, yaml); inferred from the extension if omitted
        #[arg(short = 'f', long)]
        format: Option<OutputFormat>,
    },
}

/// Process outcome of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Rendered, or the checked document matches.
    Success,
    /// The checked document differs from the snapshot.
    Differs,
    /// Bad configuration, unreadable or invalid input, or an IO failure.
    Failure,
}

impl Status {
    pub const fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Differs => 1,
            Status::Failure => 2,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> ExitCode {
        ExitCode::from(status.code())
    }
}

impl Args {
    /// Loads the config named by `--config` (which must exist), else the
    /// default location when present.
    pub fn load_config(&self) -> ConfigResult<OcifgenConfig> {
        match &self.config {
            Some(path) => OcifgenConfig::load_from(path),
            None => OcifgenConfig::load(),
        }
    }

    /// Resolves the log level; `--log-level` is validated like the config value.
    pub fn log_level(&self, config: &OcifgenConfig) -> ConfigResult<LevelFilter> {
        match &self.log_level {
            Some(level) => parse_level("--log-level", level),
            None => config.log_level(),
        }
    }
}

/// Resolves the `show` document format and pretty-printing.
pub fn output_settings(
    format: Option<OutputFormat>,
    compact: bool,
    config: &OutputConfig,
) -> (OutputFormat, bool) {
    (format.unwrap_or(config.format), config.pretty && !compact)
}

/// Runs the selected command against the PE snapshot.
pub fn run(args: &Args, config: &OcifgenConfig) -> Result<Status> {
    let interfaces = pe_interfaces();

    match &args.command {
        Command::Show {
            format,
            compact,
            output,
        } => {
            let (format, pretty) = output_settings(*format, *compact, &config.output);
            commands::show(&interfaces, format, pretty, output.as_deref())?;
            Ok(Status::Success)
        }
        Command::Check { file, format } => {
            match commands::check(&interfaces, file, *format)? {
                CheckOutcome::Match => Ok(Status::Success),
                CheckOutcome::Differs(differences) => {
                    info!(
                        "{} differs from the PE snapshot in {} place(s)",
                        file.display(),
                        differences.len()
                    );
                    Ok(Status::Differs)
                }
            }
        }
    }
}

/// [`run`], with any error logged and reported as [`Status::Failure`].
pub fn execute(args: &Args, config: &OcifgenConfig) -> Status {
    match run(args, config) {
        Ok(status) => status,
        Err(e) => {
            error!("{:#}", e);
            Status::Failure
        }
    }
}
