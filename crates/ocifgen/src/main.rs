//! ocifgen entry point

use clap::Parser;
use oc_ifgen::{cli, Args, Status};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn init_tracing(level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    // stdout carries rendered documents
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();

    let settings = args
        .load_config()
        .and_then(|config| args.log_level(&config).map(|level| (config, level)));
    let (config, level) = match settings {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("ocifgen: {}", e);
            return Status::Failure.into();
        }
    };

    init_tracing(level);
    cli::execute(&args, &config).into()
}
