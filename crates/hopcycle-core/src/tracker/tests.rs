#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use super::*;
use crate::hop::{Edge, RecordError, parse_hop};

fn hops(lines: &str) -> Vec<Hop> {
    lines
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| parse_hop(l).expect("fixture line parses"))
        .collect()
}

fn run(lines: &str) -> RunReport {
    let stream = hops(lines).into_iter().map(Ok::<_, RecordError>);
    find_longest_cycle(stream, NoopObserver).expect("infallible stream")
}

const THREE_CLAIMS: &str = "\
SM|SH|CLAIM01|STATUS01
SC|SA|CLAIM02|STATUS02
SK|SL|CLAIM01|STATUS01
SJ|SK|CLAIM01|STATUS01
SG|SD|CLAIM03|STATUS03
SD|SE|CLAIM03|STATUS03
SB|SC|CLAIM02|STATUS02
SL|SM|CLAIM01|STATUS01
SA|SB|CLAIM02|STATUS02
SH|SJ|CLAIM01|STATUS01
SE|SF|CLAIM03|STATUS03
SF|SG|CLAIM03|STATUS03
";

const SHARED_SYSTEM_NAMES: &str = "\
Epic|Availity|123|197
Availity|Optum|123|197
Optum|Epic|123|197
Epic|Availity|891|45
Availity|Epic|891|45
";

// ---------------------------------------------------------------------------
// End-to-end scenarios
// ---------------------------------------------------------------------------

#[test]
fn three_claims_longest_is_five_edge_ring() {
    let report = run(THREE_CLAIMS);
    let longest = report.longest.expect("a cycle exists");
    assert_eq!(longest.key, GraphKey::new("CLAIM01", "STATUS01"));
    assert_eq!(longest.length, 5);
}

#[test]
fn three_claims_per_graph_bests() {
    let report = run(THREE_CLAIMS);
    let bests: Vec<(String, usize)> = report
        .graphs
        .iter()
        .map(|g| (g.key.claim_id.clone(), g.best_cycle_length))
        .collect();
    assert_eq!(
        bests,
        vec![
            ("CLAIM01".to_owned(), 5),
            ("CLAIM02".to_owned(), 3),
            ("CLAIM03".to_owned(), 4),
        ]
    );
    assert_eq!(report.stats.hops, 12);
    assert_eq!(report.stats.graphs, 3);
    assert_eq!(report.stats.graphs_with_cycles, 3);
}

#[test]
fn shared_system_names_do_not_leak_between_keys() {
    let report = run(SHARED_SYSTEM_NAMES);
    let longest = report.longest.expect("a cycle exists");
    assert_eq!(longest.key, GraphKey::new("123", "197"));
    assert_eq!(longest.length, 3);

    let other = report
        .graphs
        .iter()
        .find(|g| g.key == GraphKey::new("891", "45"))
        .expect("second key tracked");
    assert_eq!(other.best_cycle_length, 2);
}

#[test]
fn empty_stream_has_no_result() {
    let report = run("");
    assert_eq!(report.longest, None);
    assert_eq!(report.stats, RunStats::default());
    assert!(report.graphs.is_empty());
}

#[test]
fn acyclic_stream_has_no_result() {
    let report = run("A|B|1|x\nB|C|1|x\nC|D|1|x\n");
    assert_eq!(report.longest, None);
    assert_eq!(report.graphs.len(), 1);
    assert_eq!(report.graphs[0].best_cycle_length, 0);
}

// ---------------------------------------------------------------------------
// ingest
// ---------------------------------------------------------------------------

#[test]
fn first_edge_of_a_key_is_never_searched() {
    // A self-loop as a key's very first hop creates the graph without a search.
    let mut tracker = CycleTracker::new();
    assert_eq!(tracker.ingest(&Hop::new("A", "A", "1", "x")), None);
    assert_eq!(tracker.global_best().length, 0);
}

#[test]
fn self_loop_on_existing_graph_is_a_cycle_of_one() {
    let mut tracker = CycleTracker::new();
    tracker.ingest(&Hop::new("A", "B", "1", "x"));
    assert_eq!(tracker.ingest(&Hop::new("C", "C", "1", "x")), Some(1));
    assert_eq!(tracker.global_best().length, 1);
}

#[test]
fn ingest_reports_closing_length() {
    let mut tracker = CycleTracker::new();
    assert_eq!(tracker.ingest(&Hop::new("A", "B", "1", "x")), None);
    assert_eq!(tracker.ingest(&Hop::new("B", "C", "1", "x")), None);
    assert_eq!(tracker.ingest(&Hop::new("C", "A", "1", "x")), Some(3));
}

#[test]
fn edge_is_inserted_after_the_search() {
    let mut tracker = CycleTracker::new();
    tracker.ingest(&Hop::new("A", "B", "1", "x"));
    tracker.ingest(&Hop::new("B", "A", "1", "x"));

    let key = GraphKey::new("1", "x");
    let graph = tracker.store().get(&key).expect("graph exists");
    assert!(graph.contains_edge("B", "A"));
    assert_eq!(graph.best_cycle_length(), 2);
}

#[test]
fn recorded_best_stops_later_searches_for_that_graph() {
    let mut tracker = CycleTracker::new();
    for (from, to) in [("A", "B"), ("B", "A")] {
        tracker.ingest(&Hop::new(from, to, "1", "x"));
    }
    // B -> C -> D -> A would close a four-edge cycle, but the graph already
    // holds a best of two and the search prunes at its root.
    for (from, to) in [("B", "C"), ("C", "D")] {
        tracker.ingest(&Hop::new(from, to, "1", "x"));
    }
    assert_eq!(tracker.ingest(&Hop::new("D", "A", "1", "x")), None);
    assert_eq!(tracker.global_best().length, 2);
}

#[test]
fn duplicate_hops_do_not_change_results() {
    let once = run("A|B|1|x\nB|C|1|x\nC|A|1|x\n");
    let twice = run("A|B|1|x\nA|B|1|x\nB|C|1|x\nB|C|1|x\nC|A|1|x\n");
    assert_eq!(once.longest, twice.longest);
    assert_eq!(once.graphs, twice.graphs);
}

#[test]
fn global_tie_keeps_earlier_key() {
    let report = run("A|B|first|1\nB|A|first|1\nA|B|second|1\nB|A|second|1\n");
    let longest = report.longest.expect("cycle");
    assert_eq!(longest.key.claim_id, "first");
    assert_eq!(longest.length, 2);
}

#[test]
fn global_best_moves_to_longer_cycle() {
    let report = run("A|B|short|1\nB|A|short|1\nA|B|long|1\nB|C|long|1\nC|A|long|1\n");
    let longest = report.longest.expect("cycle");
    assert_eq!(longest.key.claim_id, "long");
    assert_eq!(longest.length, 3);
}

// ---------------------------------------------------------------------------
// GlobalBest
// ---------------------------------------------------------------------------

#[test]
fn global_best_offer_is_strict() {
    let mut best = GlobalBest::default();
    let a = GraphKey::new("a", "1");
    let b = GraphKey::new("b", "1");
    assert!(best.offer(&a, 2));
    assert!(!best.offer(&b, 2));
    assert!(!best.offer(&b, 1));
    assert_eq!(best.key, Some(a));
    assert!(best.offer(&b, 3));
    assert_eq!(
        best.result(),
        Some(LongestCycle {
            key: b,
            length: 3
        })
    );
}

#[test]
fn global_best_without_cycle_has_no_result() {
    assert_eq!(GlobalBest::default().result(), None);
}

// ---------------------------------------------------------------------------
// Error propagation
// ---------------------------------------------------------------------------

#[test]
fn stream_error_aborts_the_run() {
    let stream = vec![
        parse_hop("A|B|1|x"),
        parse_hop("B|A|1|x"),
        parse_hop("broken|line|1"),
        parse_hop("C|D|1|x"),
    ];
    let err = find_longest_cycle(stream, NoopObserver).expect_err("third line is malformed");
    assert!(matches!(err, RecordError::FieldCount { found: 3, .. }));
}

// ---------------------------------------------------------------------------
// Observer
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Recorder {
    created: Vec<GraphKey>,
    closed: Vec<(GraphKey, Edge, usize)>,
    global: Vec<(GraphKey, usize)>,
    finished: Option<RunStats>,
}

impl CycleObserver for Recorder {
    fn graph_created(&mut self, key: &GraphKey, _edge: &Edge) {
        self.created.push(key.clone());
    }

    fn cycle_closed(&mut self, key: &GraphKey, edge: &Edge, length: usize) {
        self.closed.push((key.clone(), edge.clone(), length));
    }

    fn global_best_changed(&mut self, key: &GraphKey, length: usize) {
        self.global.push((key.clone(), length));
    }

    fn stream_finished(&mut self, stats: &RunStats) {
        self.finished = Some(*stats);
    }
}

#[test]
fn observer_sees_every_event() {
    let mut recorder = Recorder::default();
    let stream = hops(SHARED_SYSTEM_NAMES)
        .into_iter()
        .map(Ok::<_, RecordError>);
    find_longest_cycle(stream, &mut recorder).expect("infallible");

    assert_eq!(
        recorder.created,
        vec![GraphKey::new("123", "197"), GraphKey::new("891", "45")]
    );
    assert_eq!(
        recorder.closed,
        vec![
            (GraphKey::new("123", "197"), Edge::new("Optum", "Epic"), 3),
            (GraphKey::new("891", "45"), Edge::new("Availity", "Epic"), 2),
        ]
    );
    assert_eq!(recorder.global, vec![(GraphKey::new("123", "197"), 3)]);
    assert_eq!(
        recorder.finished,
        Some(RunStats {
            hops: 5,
            graphs: 2,
            graphs_with_cycles: 2,
        })
    );
}

#[test]
fn longest_cycle_serializes_flat() {
    let cycle = LongestCycle {
        key: GraphKey::new("123", "197"),
        length: 3,
    };
    let json = serde_json::to_value(&cycle).expect("serializes");
    assert_eq!(
        json,
        serde_json::json!({"claim_id": "123", "status_code": "197", "cycle_length": 3})
    );
}
