/// Result formatting for stdout: human-readable lines and JSON documents.
///
/// Human mode prints comma-separated result lines with no decoration so the
/// output can be piped straight into other tools. JSON mode prints exactly one
/// JSON document per run.
///
/// Diagnostics never go through this module; they are `tracing` events on
/// stderr.
use std::io::{self, Write};

use hopcycle_core::{GraphSummary, LongestCycle};
use serde_json::json;

use crate::OutputFormat;

/// Message printed when no graph closed a cycle.
pub fn no_cycle_message(source: &str) -> String {
    format!("No longest cycle could be determined for {source}")
}

// ---------------------------------------------------------------------------
// longest
// ---------------------------------------------------------------------------

/// Writes the result of a `longest` run.
///
/// # Errors
///
/// Propagates write failures on `w`.
pub fn write_longest<W: Write>(
    w: &mut W,
    longest: Option<&LongestCycle>,
    source: &str,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Human => match longest {
            Some(l) => writeln!(w, "{},{}", l.key, l.length),
            None => writeln!(w, "{}", no_cycle_message(source)),
        },
        OutputFormat::Json => {
            let doc = match longest {
                Some(l) => json!({
                    "found": true,
                    "claim_id": l.key.claim_id,
                    "status_code": l.key.status_code,
                    "cycle_length": l.length,
                }),
                None => json!({ "found": false, "source": source }),
            };
            write_json(w, &doc)
        }
    }
}

// ---------------------------------------------------------------------------
// summary
// ---------------------------------------------------------------------------

/// Orders graphs longest first, ties broken by key, and drops graphs that
/// never closed a cycle unless `include_acyclic` is set.
pub fn summary_rows(graphs: &[GraphSummary], include_acyclic: bool) -> Vec<&GraphSummary> {
    let mut rows: Vec<&GraphSummary> = graphs
        .iter()
        .filter(|g| include_acyclic || g.best_cycle_length > 0)
        .collect();
    rows.sort_by(|a, b| {
        b.best_cycle_length
            .cmp(&a.best_cycle_length)
            .then_with(|| a.key.cmp(&b.key))
    });
    rows
}

/// Writes the per-graph summary.
///
/// # Errors
///
/// Propagates write failures on `w`.
pub fn write_summary<W: Write>(
    w: &mut W,
    graphs: &[GraphSummary],
    include_acyclic: bool,
    format: OutputFormat,
) -> io::Result<()> {
    let rows = summary_rows(graphs, include_acyclic);
    match format {
        OutputFormat::Human => {
            for g in &rows {
                writeln!(w, "{},{}", g.key, g.best_cycle_length)?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let doc = json!({ "graphs": rows, "count": rows.len() });
            write_json(w, &doc)
        }
    }
}

fn write_json<W: Write>(w: &mut W, doc: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *w, doc).map_err(io::Error::other)?;
    writeln!(w)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
