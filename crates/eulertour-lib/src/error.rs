//! Error types for graph construction and tour extraction.
//!
//! Failures fall into two families:
//!
//! - **Invalid parameter**: bad inputs detected at construction time
//!   (k too small, a sequence shorter than k, non-ASCII data). No
//!   partial graph is ever returned.
//! - **Precondition violated**: a tour was requested over a graph
//!   that admits no Eulerian structure, or whose path endpoints
//!   could not be identified.
//!
//! All failures are deterministic and reproducible on identical
//! input; nothing is retried or swallowed.

use thiserror::Error;

use crate::constants::MIN_K;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, AssemblyError>;

/// Error type for assembly operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    /// The k-mer size is below the supported minimum
    #[error("k must be at least {}, got k={k}", MIN_K)]
    InvalidK {
        /// The rejected k-mer size
        k: usize,
    },

    /// An input sequence is shorter than the k-mer size
    #[error("sequence {index} has length {length}, shorter than k={k}")]
    SequenceTooShort {
        /// Zero-based index of the offending sequence
        index: usize,
        /// Length of the offending sequence
        length: usize,
        /// The configured k-mer size
        k: usize,
    },

    /// An input sequence contains non-ASCII characters
    #[error("sequence {index} contains non-ASCII characters")]
    NonAsciiSequence {
        /// Zero-based index of the offending sequence
        index: usize,
    },

    /// The graph admits neither an Eulerian path nor a cycle
    #[error(
        "graph is not Eulerian: {balanced} balanced, {semi_balanced} semi-balanced, \
         {neither} unbalanced nodes"
    )]
    NotEulerian {
        /// Number of balanced nodes
        balanced: usize,
        /// Number of semi-balanced nodes
        semi_balanced: usize,
        /// Number of nodes that are neither
        neither: usize,
    },

    /// A path tour was requested but head/tail nodes are missing
    #[error("eulerian path endpoints could not be identified")]
    MissingPathEndpoints,

    /// A tour was requested over a graph with no edges
    #[error("graph has no edges")]
    EmptyGraph,
}

impl AssemblyError {
    /// True if this error reports an invalid construction parameter
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            AssemblyError::InvalidK { .. }
                | AssemblyError::SequenceTooShort { .. }
                | AssemblyError::NonAsciiSequence { .. }
        )
    }

    /// True if this error reports a violated tour precondition
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            AssemblyError::NotEulerian { .. }
                | AssemblyError::MissingPathEndpoints
                | AssemblyError::EmptyGraph
        )
    }
}
