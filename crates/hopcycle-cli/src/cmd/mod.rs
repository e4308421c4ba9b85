/// Command module for the `hopcycle` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the [`RunConfig`] and a [`CycleObserver`] and returns
/// `Ok(())` on success or a [`CliError`] on failure.
pub mod longest;
pub mod summary;

use hopcycle_core::{CycleObserver, Hop, RunReport, find_longest_cycle, parse_hop};

use crate::config::RunConfig;
use crate::error::CliError;
use crate::io::LineSource;

/// Streams every hop of `config.source` through a tracker.
///
/// Returns the source label (for messages) together with the finished
/// report.
///
/// # Errors
///
/// Returns [`CliError`] if the source cannot be opened or read, or at the
/// first line that is not a valid hop.
pub(crate) fn track<O: CycleObserver>(
    config: &RunConfig,
    observer: O,
) -> Result<(String, RunReport), CliError> {
    let source = LineSource::open(&config.source)?;
    let label = source.label().to_owned();

    let hops = source.map(|line| -> Result<Hop, CliError> {
        let line = line?;
        parse_hop(&line.text).map_err(|e| CliError::MalformedRecord {
            source: label.clone(),
            line: line.number,
            detail: e.to_string(),
        })
    });
    let report = find_longest_cycle(hops, observer)?;
    Ok((label, report))
}

/// Maps a failed write to stdout to a [`CliError`].
pub(crate) fn stdout_error(e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}
