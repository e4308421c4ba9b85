#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod graph;
pub mod hop;
pub mod observer;
pub mod tracker;

pub use graph::{GraphStore, SystemGraph, find_closing_path};
pub use hop::{Edge, FIELD_SEPARATOR, GraphKey, HOP_FIELD_COUNT, Hop, RecordError, parse_hop};
pub use observer::{CycleObserver, NoopObserver, TracingObserver};
pub use tracker::{
    CycleTracker, GlobalBest, GraphSummary, LongestCycle, RunReport, RunStats, find_longest_cycle,
};
