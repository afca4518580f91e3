//! Tour-to-sequence reassembly.

use crate::graph::{DeBruijnGraph, NodeId};

/// Concatenate an Eulerian tour back into a single sequence.
///
/// Consecutive tour elements are adjacent (k-1)-mers along a k-mer
/// edge, so after the first element only the trailing character of
/// each node carries new information. An empty tour yields an empty
/// string.
pub fn assemble(graph: &DeBruijnGraph, tour: &[NodeId]) -> String {
    let mut genome = String::with_capacity(graph.k().saturating_sub(1) + tour.len());
    for (i, &id) in tour.iter().enumerate() {
        let km1mer = graph.node(id).km1mer();
        if i == 0 {
            genome.push_str(km1mer);
        } else {
            genome.push_str(&km1mer[km1mer.len() - 1..]);
        }
    }
    genome
}
