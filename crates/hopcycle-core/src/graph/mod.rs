//! Per-key directed graphs built incrementally from hops, plus the cycle search.
//!
//! # Storage
//!
//! Each [`SystemGraph`] wraps a `petgraph` [`DiGraph`] whose node weights are
//! system names, alongside a `HashMap<String, NodeIndex>` for O(1) lookup by
//! name. Nodes are interned the first time an edge mentions them, so node
//! indices are dense (`0..node_count`) and never invalidated: graphs only
//! grow. Inserting an edge that already exists is a no-op, giving the
//! adjacency set semantics.
//!
//! [`GraphStore`] owns one `SystemGraph` per [`GraphKey`]. Graphs for
//! different keys are fully independent even when system names coincide.
//!
//! # Cycle Search
//!
//! See the [`search`] submodule for [`find_closing_path`], the pruned
//! explicit-stack DFS that decides whether a pending edge closes a cycle
//! longer than the graph's recorded best.
pub mod search;

pub use search::find_closing_path;

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::hop::GraphKey;

/// The directed graph of systems for one [`GraphKey`].
///
/// Tracks the longest cycle length recorded so far; that value only ever
/// increases (see [`SystemGraph::record_cycle`]).
#[derive(Debug, Default)]
pub struct SystemGraph {
    graph: DiGraph<String, ()>,
    id_to_index: HashMap<String, NodeIndex>,
    best_cycle_length: usize,
}

impl SystemGraph {
    /// Creates an empty graph with a best cycle length of zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct systems seen in this graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of distinct directed edges in this graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if no edge has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }

    /// Looks up the [`NodeIndex`] for a system name.
    ///
    /// Returns `None` if no edge has mentioned that system.
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.id_to_index.get(id).copied()
    }

    /// Returns the system name stored at `idx`.
    pub fn node_name(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Returns the underlying petgraph graph for traversal algorithms.
    pub fn graph(&self) -> &DiGraph<String, ()> {
        &self.graph
    }

    /// Returns the longest cycle length recorded for this graph (0 if none).
    pub fn best_cycle_length(&self) -> usize {
        self.best_cycle_length
    }

    /// Records a cycle of `length` edges.
    ///
    /// Returns `true` if it beats the previous best and was stored. Shorter
    /// or equal lengths leave the best untouched.
    pub fn record_cycle(&mut self, length: usize) -> bool {
        if length > self.best_cycle_length {
            self.best_cycle_length = length;
            true
        } else {
            false
        }
    }

    /// Adds the edge `source -> destination`, interning both systems.
    ///
    /// Idempotent: re-inserting an existing edge changes nothing.
    pub fn insert_edge(&mut self, source: &str, destination: &str) {
        let from = self.intern(source);
        let to = self.intern(destination);
        if self.graph.find_edge(from, to).is_none() {
            self.graph.add_edge(from, to, ());
        }
    }

    /// Returns `true` if the edge `source -> destination` is present.
    pub fn contains_edge(&self, source: &str, destination: &str) -> bool {
        self.node_index(source)
            .zip(self.node_index(destination))
            .is_some_and(|(from, to)| self.graph.contains_edge(from, to))
    }

    /// Returns the direct successors of `node`, in petgraph iteration order
    /// (most recently added edge first).
    ///
    /// Unknown systems have no successors.
    pub fn successors<'a>(&'a self, node: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.node_index(node)
            .into_iter()
            .flat_map(move |idx| self.graph.neighbors(idx))
            .filter_map(move |next| self.node_name(next))
    }

    fn intern(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.id_to_index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(id.to_owned());
        self.id_to_index.insert(id.to_owned(), idx);
        idx
    }
}

/// Owns one [`SystemGraph`] per [`GraphKey`], created lazily.
#[derive(Debug, Default)]
pub struct GraphStore {
    graphs: HashMap<GraphKey, SystemGraph>,
}

impl GraphStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the graph for `key`, creating an empty one on first use.
    pub fn get_or_create(&mut self, key: &GraphKey) -> &mut SystemGraph {
        self.graphs.entry(key.clone()).or_default()
    }

    /// Returns the graph for `key`, if the key has been seen.
    pub fn get(&self, key: &GraphKey) -> Option<&SystemGraph> {
        self.graphs.get(key)
    }

    /// Returns `true` if `key` has been seen.
    pub fn contains(&self, key: &GraphKey) -> bool {
        self.graphs.contains_key(key)
    }

    /// Returns the number of distinct keys seen.
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    /// Returns `true` if no key has been seen.
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// Iterates over every `(key, graph)` pair in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&GraphKey, &SystemGraph)> {
        self.graphs.iter()
    }

    /// Returns every `(key, graph)` pair ordered by key.
    pub fn sorted(&self) -> Vec<(&GraphKey, &SystemGraph)> {
        let mut entries: Vec<(&GraphKey, &SystemGraph)> = self.graphs.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
