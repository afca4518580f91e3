//! Node balance classification and Eulerian existence analysis.
//!
//! Classic Eulerian theory: a connected multigraph has an Eulerian
//! cycle iff every node is balanced, and an Eulerian path (not cycle)
//! iff exactly two nodes are semi-balanced (one head, one tail) and
//! all others are balanced. Classification scans every node once; the
//! existence predicates are then pure reads of the counters.
//!
//! Connectivity is NOT verified. A disconnected graph whose counters
//! happen to satisfy the predicates will be reported as Eulerian and
//! yield an incomplete tour; the input is assumed to form a single
//! connected component.

use crate::graph::{DeBruijnGraph, NodeId};

/// Balance counters and path endpoints for a classified graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationSummary {
    /// Number of nodes with in-degree equal to out-degree
    pub balanced_count: usize,
    /// Number of nodes whose degrees differ by exactly one
    pub semi_balanced_count: usize,
    /// Number of nodes with a degree difference of two or more
    pub neither_count: usize,
    /// The semi-balanced node with one more departure than arrival,
    /// the only valid start of an Eulerian path
    pub head: Option<NodeId>,
    /// The semi-balanced node with one more arrival than departure,
    /// the only valid end of an Eulerian path
    pub tail: Option<NodeId>,
}

impl ClassificationSummary {
    /// True iff the graph has an Eulerian cycle
    pub fn has_eulerian_cycle(&self) -> bool {
        self.neither_count == 0 && self.semi_balanced_count == 0
    }

    /// True iff the graph has an Eulerian path that is not a cycle
    pub fn has_eulerian_path(&self) -> bool {
        self.neither_count == 0 && self.semi_balanced_count == 2
    }

    /// True iff the graph has an Eulerian path or cycle
    pub fn is_eulerian(&self) -> bool {
        self.has_eulerian_cycle() || self.has_eulerian_path()
    }

    /// Total number of classified nodes
    pub fn total(&self) -> usize {
        self.balanced_count + self.semi_balanced_count + self.neither_count
    }
}

/// Classify every node of a built graph.
///
/// Each node contributes to exactly one of the three counters. The
/// semi-balanced node with `in == out + 1` is recorded as `tail`, the
/// one with `in == out - 1` as `head`. Classification never mutates
/// the graph and is idempotent.
pub fn classify(graph: &DeBruijnGraph) -> ClassificationSummary {
    let mut summary = ClassificationSummary {
        balanced_count: 0,
        semi_balanced_count: 0,
        neither_count: 0,
        head: None,
        tail: None,
    };

    for id in graph.node_ids() {
        let node = graph.node(id);
        if node.is_balanced() {
            summary.balanced_count += 1;
        } else if node.is_semi_balanced() {
            if node.in_degree() == node.out_degree() + 1 {
                summary.tail = Some(id);
            }
            if node.in_degree() + 1 == node.out_degree() {
                summary.head = Some(id);
            }
            summary.semi_balanced_count += 1;
        } else {
            summary.neither_count += 1;
        }
    }

    summary
}
