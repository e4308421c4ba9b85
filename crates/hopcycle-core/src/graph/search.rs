//! Pruned depth-first search for a path that closes a cycle.
//!
//! Before an edge `source -> destination` is inserted into a [`SystemGraph`],
//! the tracker asks whether the graph already contains a simple path from
//! `destination` back to `source`. If it does, the pending edge closes a cycle
//! whose length is that path's edge count plus one.
//!
//! # Algorithm
//!
//! An explicit work-list of [`Frame`]s replaces recursion, so deep graphs do
//! not exhaust the call stack. Each frame carries its own visited set: when a
//! frame expands, every child frame receives a copy of the parent's set
//! extended with the parent node, and siblings never observe each other's
//! visits. Visited sets are petgraph's `FixedBitSet` visit maps indexed by
//! the graph's dense node indices.
//!
//! On every pop:
//! 1. the frame is dropped if `depth + 1 <= current_best`;
//! 2. if the frame sits on the target, its depth is returned;
//! 3. if the frame's node is already on its branch, the frame is dropped;
//!    otherwise a child frame is pushed for each unvisited successor.
//!
//! # First path wins
//!
//! The search stops at the *first* qualifying path, not the longest one. A
//! single insertion that could close several cycles of different lengths
//! reports whichever the traversal reaches first. Finding the true longest
//! simple path is NP-hard; this search only needs to establish that some
//! path beats the current best. Traversal order follows petgraph's successor
//! order (most recently inserted edge first, popped last-in first-out), so
//! results are deterministic for a given input order.
//!
//! The pruning bound is checked against the frame's own depth, including the
//! root frame at depth zero. Once a graph has recorded a cycle, the root is
//! pruned immediately and later insertions never report another cycle for
//! that graph.
use petgraph::graph::NodeIndex;
use petgraph::visit::{VisitMap, Visitable};

use crate::graph::SystemGraph;

/// Per-branch visited set.
type VisitedSet = <petgraph::graph::DiGraph<String, ()> as Visitable>::Map;

/// One pending node on the search work-list.
struct Frame {
    node: NodeIndex,
    depth: usize,
    visited: VisitedSet,
}

/// Searches `graph` for a simple path from `start` to `target` long enough to
/// close a cycle that beats `current_best`.
///
/// `start` is the destination of the edge about to be inserted and `target`
/// is its source; the edge itself must not be in `graph` yet.
///
/// Returns the path's edge count (the caller adds one for the pending edge),
/// or `None` when no such path exists. A returned `p` always satisfies
/// `p + 1 > current_best`.
///
/// When `start == target` the pending edge is a self-loop and the result is
/// `Some(0)` if `current_best` is zero. Systems the graph has never seen have
/// no outgoing edges.
pub fn find_closing_path(
    graph: &SystemGraph,
    start: &str,
    target: &str,
    current_best: usize,
) -> Option<usize> {
    let Some(start_idx) = graph.node_index(start) else {
        // A system with no edges can only reach itself.
        return (start == target && current_best == 0).then_some(0);
    };
    let target_idx = graph.node_index(target)?;

    let g = graph.graph();
    let mut stack: Vec<Frame> = vec![Frame {
        node: start_idx,
        depth: 0,
        visited: g.visit_map(),
    }];

    while let Some(Frame {
        node,
        depth,
        mut visited,
    }) = stack.pop()
    {
        // depth + 1 <= current_best
        if depth < current_best {
            continue;
        }

        if node == target_idx {
            return Some(depth);
        }

        if !visited.visit(node) {
            continue;
        }

        for next in g.neighbors(node) {
            if !visited.is_visited(&next) {
                stack.push(Frame {
                    node: next,
                    depth: depth + 1,
                    visited: visited.clone(),
                });
            }
        }
    }

    None
}
