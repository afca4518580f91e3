//! Graph construction from input sequences.
//!
//! The builder chops each sequence into overlapping k-mer windows,
//! interns the prefix and suffix (k-1)-mers, and records one directed
//! edge per k-mer occurrence. Repeated k-mers are never deduplicated;
//! an Eulerian tour must traverse every edge occurrence.

pub mod chop;
pub mod config;
pub mod parse;

pub use config::AssemblyConfiguration;

use tracing::info;

use crate::error::{AssemblyError, Result};
use crate::graph::DeBruijnGraph;

/// Builder that turns a sequence collection into a de Bruijn multigraph
pub struct GraphBuilder {
    config: AssemblyConfiguration,
}

impl GraphBuilder {
    /// Create a builder with a validated configuration
    ///
    /// # Errors
    /// Returns [`AssemblyError::InvalidK`] if the configuration is
    /// invalid.
    pub fn new(config: AssemblyConfiguration) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Build the multigraph from an ordered collection of sequences.
    ///
    /// Every sequence must be ASCII and at least k characters long;
    /// violations fail before any graph is returned.
    ///
    /// # Errors
    /// Returns [`AssemblyError::SequenceTooShort`] or
    /// [`AssemblyError::NonAsciiSequence`] on invalid input.
    pub fn build_from_sequences<I, S>(&self, sequences: I) -> Result<DeBruijnGraph>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let k = self.config.k;
        let mut graph = DeBruijnGraph::new(k);
        let mut num_sequences = 0usize;

        for (index, sequence) in sequences.into_iter().enumerate() {
            let sequence = sequence.as_ref();
            if !sequence.is_ascii() {
                return Err(AssemblyError::NonAsciiSequence { index });
            }
            if sequence.len() < k {
                return Err(AssemblyError::SequenceTooShort {
                    index,
                    length: sequence.len(),
                    k,
                });
            }

            for window in chop::chop(sequence, k) {
                let prefix = graph.get_or_create(window.prefix);
                let suffix = graph.get_or_create(window.suffix);
                graph.add_edge(prefix, suffix);
            }
            num_sequences += 1;
        }

        info!(
            "Built de Bruijn graph from {} sequences: {} nodes, {} edges (k={})",
            num_sequences,
            graph.num_nodes(),
            graph.num_edges(),
            k
        );

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    fn build(sequences: &[&str], k: usize) -> DeBruijnGraph {
        let config = AssemblyConfiguration::new(k).unwrap();
        GraphBuilder::new(config)
            .unwrap()
            .build_from_sequences(sequences)
            .unwrap()
    }

    #[test]
    fn test_single_sequence() {
        let graph = build(&["CTCTAGCC"], 6);
        // 8 - 6 + 1 = 3 k-mers, hence 3 edges
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.num_nodes(), 4);
        assert!(graph.node_id("CTCTA").is_some());
        assert!(graph.node_id("TAGCC").is_some());
    }

    #[test]
    fn test_degree_sums_equal_edge_count() {
        let graph = build(&["CTCTAGCC", "TAGCCCCCT"], 6);
        let in_sum: usize = graph.nodes().map(Node::in_degree).sum();
        let out_sum: usize = graph.nodes().map(Node::out_degree).sum();
        assert_eq!(in_sum, graph.num_edges());
        assert_eq!(out_sum, graph.num_edges());
    }

    #[test]
    fn test_repeated_sequence_doubles_multiplicity() {
        let once = build(&["ACGTAC"], 3);
        let twice = build(&["ACGTAC", "ACGTAC"], 3);
        assert_eq!(twice.num_edges(), 2 * once.num_edges());
        assert_eq!(twice.num_nodes(), once.num_nodes());

        // Parallel edges stay distinct entries in the adjacency list
        let ac = twice.node_id("AC").unwrap();
        let cg = twice.node_id("CG").unwrap();
        assert_eq!(twice.successors(ac), &[cg, cg]);
    }

    #[test]
    fn test_shared_km1mers_resolve_to_same_node() {
        // "TAGCC" occurs in both sequences and must be a single node
        let graph = build(&["CTCTAGCC", "TAGCCCCCT"], 6);
        let id = graph.node_id("TAGCC").unwrap();
        assert_eq!(graph.node(id).in_degree(), 1);
        assert_eq!(graph.node(id).out_degree(), 1);
    }

    #[test]
    fn test_sequence_too_short() {
        let config = AssemblyConfiguration::new(6).unwrap();
        let err = GraphBuilder::new(config)
            .unwrap()
            .build_from_sequences(["CTCTAGCC", "ACG"])
            .unwrap_err();
        assert_eq!(
            err,
            AssemblyError::SequenceTooShort {
                index: 1,
                length: 3,
                k: 6
            }
        );
    }

    #[test]
    fn test_non_ascii_sequence() {
        let config = AssemblyConfiguration::new(2).unwrap();
        let err = GraphBuilder::new(config)
            .unwrap()
            .build_from_sequences(["ACGÉT"])
            .unwrap_err();
        assert!(matches!(err, AssemblyError::NonAsciiSequence { index: 0 }));
    }

    #[test]
    fn test_sequence_of_length_k() {
        // Exactly one k-mer, one edge
        let graph = build(&["GTAA"], 4);
        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.num_nodes(), 2);
    }
}
