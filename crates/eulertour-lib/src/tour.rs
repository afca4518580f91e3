//! Eulerian tour construction.
//!
//! Hierholzer-style edge-consuming traversal. The traversal works on
//! its own copy of the adjacency lists and pops destinations as it
//! visits them, so "every edge used exactly once" falls out of the
//! data structure rather than a visited-edge set, and the original
//! graph stays intact for later inspection.
//!
//! For the path case the graph is first closed with one synthetic
//! `tail -> head` edge, turning the path problem into a cycle
//! problem; rotating the finished tour to start at `head` pushes the
//! synthetic edge to the wrap-around point, where it disappears from
//! the output.

use tracing::debug;

use crate::classification::ClassificationSummary;
use crate::error::{AssemblyError, Result};
use crate::graph::{DeBruijnGraph, NodeId};

/// Builds an Eulerian tour over a classified graph
pub struct TourBuilder<'g> {
    graph: &'g DeBruijnGraph,
    summary: &'g ClassificationSummary,
}

impl<'g> TourBuilder<'g> {
    /// Create a tour builder over a graph and its classification
    pub fn new(graph: &'g DeBruijnGraph, summary: &'g ClassificationSummary) -> Self {
        Self { graph, summary }
    }

    /// Construct the Eulerian tour as an ordered sequence of node ids.
    ///
    /// For a cycle the tour has exactly one entry per edge; for a path
    /// it has one entry per edge plus one (the closing endpoint). The
    /// graph itself is never modified.
    ///
    /// Connectivity is assumed, not checked: a disconnected graph that
    /// still satisfies the balance conditions yields a tour covering
    /// only the start node's component.
    ///
    /// # Errors
    /// Returns [`AssemblyError::NotEulerian`] when neither a path nor
    /// a cycle exists, [`AssemblyError::MissingPathEndpoints`] when
    /// the path case lacks an identified head or tail, and
    /// [`AssemblyError::EmptyGraph`] when the graph has no edges.
    pub fn build(&self) -> Result<Vec<NodeId>> {
        if !self.summary.is_eulerian() {
            return Err(AssemblyError::NotEulerian {
                balanced: self.summary.balanced_count,
                semi_balanced: self.summary.semi_balanced_count,
                neither: self.summary.neither_count,
            });
        }
        if self.graph.num_edges() == 0 {
            return Err(AssemblyError::EmptyGraph);
        }

        // Working copy: the traversal consumes edges destructively
        let mut adjacency: Vec<Vec<NodeId>> = self.graph.adjacency().to_vec();

        let endpoints = if self.summary.has_eulerian_path() {
            // Close the graph so the path becomes a cycle
            let (head, tail) = match (self.summary.head, self.summary.tail) {
                (Some(head), Some(tail)) => (head, tail),
                _ => return Err(AssemblyError::MissingPathEndpoints),
            };
            adjacency[tail.index()].push(head);
            debug!(
                "Closed path graph with synthetic edge {} -> {}",
                self.graph.node(tail),
                self.graph.node(head)
            );
            Some((head, tail))
        } else {
            None
        };

        // Any node with a remaining outgoing edge is a valid start;
        // in the path case the rotation below fixes the origin.
        let start = adjacency
            .iter()
            .position(|edges| !edges.is_empty())
            .map(NodeId)
            .ok_or(AssemblyError::EmptyGraph)?;

        let mut tour = self.traverse(&mut adjacency, start);

        // Post-order emission leaves the walk reversed with a
        // duplicated terminal node at the boundary
        tour.reverse();
        tour.pop();

        if let Some((head, _)) = endpoints {
            // Rotate so the tour begins at head; the synthetic edge
            // becomes the wrap-around point and drops out. A head
            // stranded in another component never enters the tour,
            // which is the one disconnection symptom we can see here.
            let offset = tour
                .iter()
                .position(|&id| id == head)
                .ok_or(AssemblyError::MissingPathEndpoints)?;
            tour.rotate_left(offset);
        }

        debug!("Eulerian tour visits {} nodes", tour.len());
        Ok(tour)
    }

    /// Edge-consuming depth-first traversal with an explicit stack.
    ///
    /// A node is emitted only once all of its outgoing edges have been
    /// consumed, reproducing the recursive post-order without risking
    /// call-stack exhaustion on long chains (the depth of the
    /// recursion equals the edge count in the worst case).
    fn traverse(&self, adjacency: &mut [Vec<NodeId>], start: NodeId) -> Vec<NodeId> {
        let mut tour = Vec::with_capacity(self.graph.num_edges() + 1);
        let mut stack = vec![start];

        while let Some(&current) = stack.last() {
            match adjacency[current.index()].pop() {
                Some(next) => stack.push(next),
                None => {
                    tour.push(current);
                    stack.pop();
                }
            }
        }

        tour
    }
}
