//! Implementation of `hopcycle summary <file>`.
//!
//! Streams the hop file through the cycle tracker and prints the best cycle
//! length of every claim/status graph.
//!
//! Flags:
//! - `--all`: also list graphs that never closed a cycle (length 0).
//!
//! Output (human mode): one `claim_id,status_code,length` line per graph,
//! longest first, ties ordered by key.
//! Output (JSON mode): `{"graphs": [...], "count": N}`.
//!
//! Exit codes: 0 = success, 2 = input failure.
use hopcycle_core::CycleObserver;

use super::{stdout_error, track};
use crate::config::RunConfig;
use crate::error::CliError;
use crate::format::write_summary;

/// Runs the `summary` command.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) if the input cannot be read or holds a
/// malformed record, or if stdout cannot be written.
pub fn run<O: CycleObserver>(config: &RunConfig, observer: O) -> Result<(), CliError> {
    let (_label, report) = track(config, observer)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_summary(
        &mut out,
        &report.graphs,
        config.include_acyclic,
        config.format,
    )
    .map_err(|e| stdout_error(&e))
}
