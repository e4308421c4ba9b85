#![deny(clippy::print_stdout)]

mod cli;
mod cmd;
mod config;
mod error;
mod format;
mod io;
mod logging;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use clap::Parser as _;
use hopcycle_core::TracingObserver;

use crate::config::{LogConfig, RunConfig};
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(LogConfig::from_cli(&cli)) {
        eprintln!("warning: logging disabled: {e}");
    }

    let config = RunConfig::from_cli(&cli);
    tracing::debug!(source = %config.source, format = ?config.format, "starting run");

    let result: Result<(), CliError> = match &cli.command {
        Command::Longest { .. } => cmd::longest::run(&config, TracingObserver),
        Command::Summary { .. } => cmd::summary::run(&config, TracingObserver),
    };

    if let Err(e) = result {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}
