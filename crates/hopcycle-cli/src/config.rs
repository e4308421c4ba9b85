//! Run and logging configuration derived from parsed CLI flags.
use crate::{Cli, Command, OutputFormat, PathOrStdin};

/// What a single `hopcycle` invocation reads and how it reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Where hops are read from.
    pub source: PathOrStdin,
    /// Output format on stdout.
    pub format: OutputFormat,
    /// Whether `summary` lists graphs whose best cycle length is zero.
    pub include_acyclic: bool,
}

impl RunConfig {
    /// Builds the run configuration for the active subcommand.
    pub fn from_cli(cli: &Cli) -> Self {
        let (source, include_acyclic) = match &cli.command {
            Command::Longest { file } => (file.clone(), false),
            Command::Summary { file, all } => (file.clone(), *all),
        };
        Self {
            source,
            format: cli.format,
            include_acyclic,
        }
    }
}

/// Stderr log volume selected by `--quiet` / `--verbose`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors.
    Normal,
    /// Per-graph and per-cycle events.
    Verbose,
}

/// Logging setup for the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// How much is logged when `HOPCYCLE_LOG` is unset.
    pub verbosity: Verbosity,
    /// Whether ANSI colors may be used on stderr.
    pub colors: bool,
}

impl LogConfig {
    /// Derives verbosity and color support from the global flags.
    pub fn from_cli(cli: &Cli) -> Self {
        let verbosity = if cli.quiet {
            Verbosity::Quiet
        } else if cli.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        Self {
            verbosity,
            colors: crate::logging::colors_enabled(cli.no_color),
        }
    }
}
