//! Nodes of the de Bruijn multigraph.
//!
//! Each node represents one (k-1)-mer. Degree counters are written
//! only during graph construction; afterwards a node is immutable
//! and its balance predicates drive the Eulerian analysis.

use std::fmt;

/// A node in the de Bruijn multigraph, representing a (k-1)-mer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) km1mer: String,
    pub(crate) in_degree: usize,
    pub(crate) out_degree: usize,
}

impl Node {
    /// Create a node for the given (k-1)-mer with zeroed degrees
    pub(crate) fn new(km1mer: String) -> Self {
        Self {
            km1mer,
            in_degree: 0,
            out_degree: 0,
        }
    }

    /// The (k-1)-mer this node represents
    pub fn km1mer(&self) -> &str {
        &self.km1mer
    }

    /// Number of incoming edges
    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    /// Number of outgoing edges
    pub fn out_degree(&self) -> usize {
        self.out_degree
    }

    /// True if in-degree equals out-degree
    pub fn is_balanced(&self) -> bool {
        self.in_degree == self.out_degree
    }

    /// True if in-degree and out-degree differ by exactly one
    pub fn is_semi_balanced(&self) -> bool {
        self.in_degree.abs_diff(self.out_degree) == 1
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.km1mer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_balanced() {
        let node = Node::new("ACG".to_string());
        assert_eq!(node.in_degree(), 0);
        assert_eq!(node.out_degree(), 0);
        assert!(node.is_balanced());
        assert!(!node.is_semi_balanced());
    }

    #[test]
    fn test_semi_balanced() {
        let mut node = Node::new("ACG".to_string());
        node.out_degree = 2;
        node.in_degree = 1;
        assert!(!node.is_balanced());
        assert!(node.is_semi_balanced());

        // Difference of two is neither balanced nor semi-balanced
        node.out_degree = 3;
        assert!(!node.is_balanced());
        assert!(!node.is_semi_balanced());
    }

    #[test]
    fn test_display() {
        let node = Node::new("TAGCC".to_string());
        assert_eq!(node.to_string(), "TAGCC");
    }
}
