/// Observation hooks for a tracking run.
///
/// [`CycleTracker`](crate::tracker::CycleTracker) reports what it does through
/// a [`CycleObserver`] supplied by the caller instead of writing to any
/// process-wide state. [`TracingObserver`] forwards every event to the
/// `tracing` facade; [`NoopObserver`] discards them.
use crate::hop::{Edge, GraphKey};
use crate::tracker::RunStats;

/// Receives events from a [`CycleTracker`](crate::tracker::CycleTracker).
///
/// Every method has an empty default body so implementors only override the
/// events they care about.
pub trait CycleObserver {
    /// A hop introduced a key not seen before; its graph was just created.
    fn graph_created(&mut self, _key: &GraphKey, _edge: &Edge) {}

    /// `edge` closed a cycle of `length` edges that beat the graph's
    /// previous best.
    fn cycle_closed(&mut self, _key: &GraphKey, _edge: &Edge, _length: usize) {}

    /// The run-wide longest cycle changed to `length`, held by `key`.
    fn global_best_changed(&mut self, _key: &GraphKey, _length: usize) {}

    /// The hop stream ended.
    fn stream_finished(&mut self, _stats: &RunStats) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CycleObserver for NoopObserver {}

/// Emits every event as a structured `tracing` event.
///
/// Graph creation and per-graph cycles are logged at `debug`; global best
/// changes and the end-of-stream summary at `info`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CycleObserver for TracingObserver {
    fn graph_created(&mut self, key: &GraphKey, edge: &Edge) {
        tracing::debug!(
            claim_id = %key.claim_id,
            status_code = %key.status_code,
            source = %edge.source,
            destination = %edge.destination,
            "new graph"
        );
    }

    fn cycle_closed(&mut self, key: &GraphKey, edge: &Edge, length: usize) {
        tracing::debug!(
            claim_id = %key.claim_id,
            status_code = %key.status_code,
            source = %edge.source,
            destination = %edge.destination,
            length,
            "cycle closed"
        );
    }

    fn global_best_changed(&mut self, key: &GraphKey, length: usize) {
        tracing::info!(
            claim_id = %key.claim_id,
            status_code = %key.status_code,
            length,
            "new longest cycle"
        );
    }

    fn stream_finished(&mut self, stats: &RunStats) {
        tracing::info!(
            hops = stats.hops,
            graphs = stats.graphs,
            graphs_with_cycles = stats.graphs_with_cycles,
            "hop stream finished"
        );
    }
}

impl<O: CycleObserver + ?Sized> CycleObserver for &mut O {
    fn graph_created(&mut self, key: &GraphKey, edge: &Edge) {
        (**self).graph_created(key, edge);
    }

    fn cycle_closed(&mut self, key: &GraphKey, edge: &Edge, length: usize) {
        (**self).cycle_closed(key, edge, length);
    }

    fn global_best_changed(&mut self, key: &GraphKey, length: usize) {
        (**self).global_best_changed(key, length);
    }

    fn stream_finished(&mut self, stats: &RunStats) {
        (**self).stream_finished(stats);
    }
}
