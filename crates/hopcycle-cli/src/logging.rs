/// Stderr logging setup for the `hopcycle` binary.
///
/// `hopcycle-core` emits events through the `tracing` facade; this module
/// installs the `tracing-subscriber` formatter that prints them. Stdout is
/// reserved for results, so every log line goes to stderr.
///
/// The filter comes from the `HOPCYCLE_LOG` environment variable when it is
/// set and valid (same syntax as `RUST_LOG`). Otherwise it is derived from
/// `--quiet` / `--verbose`.
use std::io::IsTerminal as _;

use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, Verbosity};

/// Environment variable holding an explicit filter directive.
pub const LOG_ENV_VAR: &str = "HOPCYCLE_LOG";

/// Returns the filter directive used when `HOPCYCLE_LOG` is absent.
pub fn default_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "warn",
        Verbosity::Verbose => "debug",
    }
}

/// Returns `true` if ANSI color codes should be emitted to stderr.
///
/// Colors are off when `--no-color` was passed, when the `NO_COLOR`
/// environment variable is present (<https://no-color.org>), or when stderr
/// is not a TTY.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

/// Installs the global stderr subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init(config: LogConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::util::SubscriberInitExt as _;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config.verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.colors)
        .with_target(false)
        .finish()
        .try_init()
}
