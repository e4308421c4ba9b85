/// The driving loop: feeds hops into the [`GraphStore`], asks the search
/// whether each pending edge closes a cycle, and keeps per-graph and global
/// bests.
///
/// For every hop, in stream order:
/// 1. An unseen key gets a new graph with the hop's edge inserted directly.
///    A single edge is never searched.
/// 2. Otherwise [`find_closing_path`] runs from the edge's destination back
///    to its source against the graph *before* the edge is added, bounded by
///    the graph's recorded best.
/// 3. A found path of `p` edges is a cycle of `p + 1`; it is recorded on the
///    graph and offered to the [`GlobalBest`]. Ties keep the earlier key.
/// 4. The edge is inserted.
///
/// [`find_longest_cycle`] wraps the loop for a fallible stream and stops at
/// the first error.
use serde::Serialize;

use crate::graph::{GraphStore, find_closing_path};
use crate::hop::{GraphKey, Hop};
use crate::observer::{CycleObserver, NoopObserver};

#[cfg(test)]
mod tests;

/// The longest cycle found across all graphs in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongestCycle {
    /// The graph holding the cycle.
    #[serde(flatten)]
    pub key: GraphKey,
    /// Number of edges in the cycle.
    #[serde(rename = "cycle_length")]
    pub length: usize,
}

/// Running global maximum over every graph's best cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalBest {
    /// Key of the graph holding the longest cycle, once one is found.
    pub key: Option<GraphKey>,
    /// Length of that cycle; zero until a cycle is found.
    pub length: usize,
}

impl GlobalBest {
    /// Replaces the current best if `length` is strictly longer.
    ///
    /// Returns `true` if the best changed.
    pub fn offer(&mut self, key: &GraphKey, length: usize) -> bool {
        if length > self.length {
            self.key = Some(key.clone());
            self.length = length;
            true
        } else {
            false
        }
    }

    /// Returns the final result, or `None` if no graph ever closed a cycle.
    pub fn result(&self) -> Option<LongestCycle> {
        match &self.key {
            Some(key) if self.length > 0 => Some(LongestCycle {
                key: key.clone(),
                length: self.length,
            }),
            Some(_) | None => None,
        }
    }
}

/// Counters describing a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Hops ingested.
    pub hops: u64,
    /// Distinct keys seen.
    pub graphs: usize,
    /// Keys whose graph recorded at least one cycle.
    pub graphs_with_cycles: usize,
}

/// Final state of one graph, for per-key reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    /// The graph's key.
    #[serde(flatten)]
    pub key: GraphKey,
    /// Longest cycle recorded for the graph (0 if none).
    pub best_cycle_length: usize,
    /// Distinct systems in the graph.
    pub nodes: usize,
    /// Distinct edges in the graph.
    pub edges: usize,
}

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// The run-wide longest cycle, if any graph closed one.
    pub longest: Option<LongestCycle>,
    /// Run counters.
    pub stats: RunStats,
    /// One summary per key, ordered by key.
    pub graphs: Vec<GraphSummary>,
}

/// Incremental cycle tracker over a stream of hops.
///
/// Owns the [`GraphStore`] and the [`GlobalBest`]; reports progress to the
/// observer `O`.
#[derive(Debug)]
pub struct CycleTracker<O = NoopObserver> {
    store: GraphStore,
    global: GlobalBest,
    hops: u64,
    observer: O,
}

impl CycleTracker<NoopObserver> {
    /// Creates a tracker that reports nothing.
    pub fn new() -> Self {
        Self::with_observer(NoopObserver)
    }
}

impl Default for CycleTracker<NoopObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: CycleObserver> CycleTracker<O> {
    /// Creates a tracker that reports to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Self {
            store: GraphStore::new(),
            global: GlobalBest::default(),
            hops: 0,
            observer,
        }
    }

    /// Ingests one hop.
    ///
    /// Returns the length of the cycle the hop's edge closed when that cycle
    /// beat its graph's previous best, otherwise `None`.
    pub fn ingest(&mut self, hop: &Hop) -> Option<usize> {
        self.hops += 1;
        let Hop { key, edge } = hop;

        if !self.store.contains(key) {
            self.store
                .get_or_create(key)
                .insert_edge(&edge.source, &edge.destination);
            self.observer.graph_created(key, edge);
            return None;
        }

        let graph = self.store.get_or_create(key);
        let best = graph.best_cycle_length();

        let mut improved = None;
        if let Some(path) = find_closing_path(graph, &edge.destination, &edge.source, best) {
            let length = path + 1;
            if graph.record_cycle(length) {
                improved = Some(length);
            }
        }
        graph.insert_edge(&edge.source, &edge.destination);

        if let Some(length) = improved {
            self.observer.cycle_closed(key, edge, length);
            if self.global.offer(key, length) {
                self.observer.global_best_changed(key, length);
            }
        }

        improved
    }

    /// Returns the current run-wide best.
    pub fn global_best(&self) -> &GlobalBest {
        &self.global
    }

    /// Returns the graph store.
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Returns the run counters so far.
    pub fn stats(&self) -> RunStats {
        let graphs_with_cycles = self
            .store
            .iter()
            .filter(|(_, g)| g.best_cycle_length() > 0)
            .count();
        RunStats {
            hops: self.hops,
            graphs: self.store.len(),
            graphs_with_cycles,
        }
    }

    /// Ends the run, notifying the observer, and returns the report.
    pub fn finish(mut self) -> RunReport {
        let stats = self.stats();
        self.observer.stream_finished(&stats);

        let graphs = self
            .store
            .sorted()
            .into_iter()
            .map(|(key, g)| GraphSummary {
                key: key.clone(),
                best_cycle_length: g.best_cycle_length(),
                nodes: g.node_count(),
                edges: g.edge_count(),
            })
            .collect();

        RunReport {
            longest: self.global.result(),
            stats,
            graphs,
        }
    }
}

/// Runs a [`CycleTracker`] over `hops` until the stream ends.
///
/// The stream is pulled one hop at a time and never buffered.
///
/// # Errors
///
/// Returns the first `Err` the stream yields, unchanged. Hops before it have
/// been ingested but no report is produced.
pub fn find_longest_cycle<I, E, O>(hops: I, observer: O) -> Result<RunReport, E>
where
    I: IntoIterator<Item = Result<Hop, E>>,
    O: CycleObserver,
{
    let mut tracker = CycleTracker::with_observer(observer);
    for hop in hops {
        tracker.ingest(&hop?);
    }
    Ok(tracker.finish())
}
