//! Post-run invariant checkers for correctness validation.

use std::collections::{BTreeMap, BTreeSet};

use hopcycle_core::{GraphKey, Hop, RunReport};

use crate::GeneratorConfig;

#[derive(Default)]
struct Expected<'a> {
    nodes: BTreeSet<&'a str>,
    edges: BTreeSet<(&'a str, &'a str)>,
}

/// Verifies that a report agrees with the stream it was built from.
///
/// Checks hop and graph counts, per-graph node and edge counts, key
/// ordering, the cycle-length bound, and that the global longest matches
/// the per-graph maximum.
pub fn check_report_invariants(hops: &[Hop], report: &RunReport) -> Result<(), String> {
    let mut expected: BTreeMap<&GraphKey, Expected<'_>> = BTreeMap::new();
    for hop in hops {
        let entry = expected.entry(&hop.key).or_default();
        let (src, dst) = (hop.edge.source.as_str(), hop.edge.destination.as_str());
        entry.nodes.insert(src);
        entry.nodes.insert(dst);
        entry.edges.insert((src, dst));
    }

    if report.stats.hops != hops.len() as u64 {
        return Err(format!(
            "hop count mismatch: stats={}, stream={}",
            report.stats.hops,
            hops.len()
        ));
    }
    if report.graphs.len() != expected.len() || report.stats.graphs != expected.len() {
        return Err(format!(
            "graph count mismatch: report={}, stats={}, stream={}",
            report.graphs.len(),
            report.stats.graphs,
            expected.len()
        ));
    }

    for (summary, (key, want)) in report.graphs.iter().zip(&expected) {
        if &summary.key != *key {
            return Err(format!(
                "graphs out of key order: found {}, expected {key}",
                summary.key
            ));
        }
        if summary.nodes != want.nodes.len() {
            return Err(format!(
                "{key}: node count {} but stream has {}",
                summary.nodes,
                want.nodes.len()
            ));
        }
        if summary.edges != want.edges.len() {
            return Err(format!(
                "{key}: edge count {} but stream has {}",
                summary.edges,
                want.edges.len()
            ));
        }
        if summary.best_cycle_length > summary.nodes {
            return Err(format!(
                "{key}: cycle of {} edges in {} nodes",
                summary.best_cycle_length, summary.nodes
            ));
        }
    }

    let with_cycles = report
        .graphs
        .iter()
        .filter(|g| g.best_cycle_length > 0)
        .count();
    if report.stats.graphs_with_cycles != with_cycles {
        return Err(format!(
            "graphs_with_cycles {} but {with_cycles} graphs have a cycle",
            report.stats.graphs_with_cycles
        ));
    }

    let max = report
        .graphs
        .iter()
        .map(|g| g.best_cycle_length)
        .max()
        .unwrap_or(0);
    match &report.longest {
        Some(longest) if longest.length != max => Err(format!(
            "longest is {} but the largest graph best is {max}",
            longest.length
        )),
        Some(longest) if longest.length == 0 => Err("longest reported with length 0".to_owned()),
        None if max > 0 => Err(format!("no longest reported but a graph has best {max}")),
        Some(_) | None => Ok(()),
    }
}

/// Verifies that every injected ring was found at its full length.
///
/// Background hops are acyclic and rings share no systems with them, so each
/// graph's best must equal `config.ring_length` exactly.
pub fn check_injected_rings(config: &GeneratorConfig, report: &RunReport) -> Result<(), String> {
    if !config.inject_rings {
        return match &report.longest {
            Some(l) => Err(format!("acyclic stream reported a cycle in {}", l.key)),
            None => Ok(()),
        };
    }
    for g in &report.graphs {
        if g.best_cycle_length != config.ring_length {
            return Err(format!(
                "{}: best {} but the injected ring has {} edges",
                g.key, g.best_cycle_length, config.ring_length
            ));
        }
    }
    Ok(())
}
