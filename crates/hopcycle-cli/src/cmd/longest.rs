//! Implementation of `hopcycle longest <file>`.
//!
//! Streams the hop file through the cycle tracker and prints the single
//! longest cycle found across all claim/status graphs.
//!
//! Output (human mode): `claim_id,status_code,cycle_length`, or
//! `No longest cycle could be determined for <file>` when no graph closed a
//! cycle.
//! Output (JSON mode): `{"found":true,"claim_id":..,"status_code":..,
//! "cycle_length":..}` or `{"found":false,"source":..}`.
//!
//! Exit codes: 0 = success (cycle or not), 2 = input failure.
use hopcycle_core::CycleObserver;

use super::{stdout_error, track};
use crate::config::RunConfig;
use crate::error::CliError;
use crate::format::write_longest;

/// Runs the `longest` command.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) if the input cannot be read or holds a
/// malformed record, or if stdout cannot be written.
pub fn run<O: CycleObserver>(config: &RunConfig, observer: O) -> Result<(), CliError> {
    let (label, report) = track(config, observer)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_longest(&mut out, report.longest.as_ref(), &label, config.format)
        .map_err(|e| stdout_error(&e))
}
