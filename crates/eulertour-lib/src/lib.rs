//! Eulerian genome assembly over de Bruijn multigraphs.
//!
//! Nodes are (k-1)-mers, edges are k-mers; an Eulerian tour through
//! the graph spells out the assembled genome. The pipeline is
//! strictly staged: build the graph, classify node balance, test for
//! an Eulerian structure, extract the tour, concatenate it back into
//! a sequence.

#![warn(missing_docs)]

pub mod assemble;
pub mod builder;
pub mod classification;
pub mod constants;
pub mod error;
pub mod graph;
pub mod node;
pub mod tour;

// Re-export common types at crate root
pub use assemble::assemble;
pub use builder::{AssemblyConfiguration, GraphBuilder};
pub use classification::{classify, ClassificationSummary};
pub use error::{AssemblyError, Result};
pub use graph::{DeBruijnGraph, NodeId};
pub use node::Node;
pub use tour::TourBuilder;

/// Version information
pub fn version() -> (u8, u8, u8) {
    constants::VERSION
}

/// Run the full assembly pipeline over a collection of sequences.
///
/// Builds the de Bruijn multigraph, classifies node balance, extracts
/// the Eulerian tour, and concatenates it into a single genome.
///
/// # Errors
/// Returns an error if `k < 2`, if any sequence is shorter than `k`
/// or not ASCII, or if the graph admits no Eulerian path or cycle.
pub fn assemble_genome<I, S>(sequences: I, k: usize) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let config = AssemblyConfiguration::new(k)?;
    let graph = GraphBuilder::new(config)?.build_from_sequences(sequences)?;
    let summary = classify(&graph);
    let tour = TourBuilder::new(&graph, &summary).build()?;
    Ok(assemble(&graph, &tour))
}
