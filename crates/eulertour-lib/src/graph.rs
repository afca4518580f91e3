//! The de Bruijn multigraph.
//!
//! Nodes are (k-1)-mers, interned by string value so that equal
//! substrings always resolve to the same node. Each k-mer occurrence
//! contributes one directed edge from its prefix (k-1)-mer to its
//! suffix (k-1)-mer; repeated k-mers create parallel edges. The
//! adjacency structure is an insertion-ordered multimap stored as an
//! arena indexed by [`NodeId`].
//!
//! The graph is built once by [`GraphBuilder`](crate::GraphBuilder)
//! and is read-only afterwards. Tour construction works on its own
//! copy of the adjacency lists, so a graph stays valid for repeated
//! classification and inspection.

use ahash::AHashMap;

use crate::node::Node;

/// Identifier of a node in the graph's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The arena index of this node
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A de Bruijn multigraph over (k-1)-mer nodes
#[derive(Debug, Clone)]
pub struct DeBruijnGraph {
    k: usize,
    nodes: Vec<Node>,
    ids: AHashMap<String, NodeId>,
    adjacency: Vec<Vec<NodeId>>,
}

impl DeBruijnGraph {
    /// Create an empty graph for the given k-mer size
    pub(crate) fn new(k: usize) -> Self {
        Self {
            k,
            nodes: Vec::new(),
            ids: AHashMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Intern a (k-1)-mer, creating its node on first sight
    pub(crate) fn get_or_create(&mut self, km1mer: &str) -> NodeId {
        if let Some(&id) = self.ids.get(km1mer) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(km1mer.to_string()));
        self.adjacency.push(Vec::new());
        self.ids.insert(km1mer.to_string(), id);
        id
    }

    /// Record one edge occurrence `from -> to`, updating both degrees
    pub(crate) fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.nodes[from.index()].out_degree += 1;
        self.nodes[to.index()].in_degree += 1;
        self.adjacency[from.index()].push(to);
    }

    /// The k-mer size the graph was built with
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of distinct (k-1)-mer nodes
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges, counting parallel edges separately
    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// The node behind an identifier
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Look up a node by its (k-1)-mer
    pub fn node_id(&self, km1mer: &str) -> Option<NodeId> {
        self.ids.get(km1mer).copied()
    }

    /// Destinations of all outgoing edges of a node, in insertion order
    pub fn successors(&self, id: NodeId) -> &[NodeId] {
        &self.adjacency[id.index()]
    }

    /// Iterate over all node identifiers
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// The full adjacency structure, indexed by node id
    pub(crate) fn adjacency(&self) -> &[Vec<NodeId>] {
        &self.adjacency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interning_by_value() {
        let mut graph = DeBruijnGraph::new(4);
        let a = graph.get_or_create("ACG");
        let b = graph.get_or_create("CGT");
        let a2 = graph.get_or_create("ACG");
        assert_eq!(a, a2);
        assert_ne!(a, b);
        assert_eq!(graph.num_nodes(), 2);
        assert_eq!(graph.node(a).km1mer(), "ACG");
    }

    #[test]
    fn test_add_edge_updates_degrees() {
        let mut graph = DeBruijnGraph::new(4);
        let a = graph.get_or_create("ACG");
        let b = graph.get_or_create("CGT");
        graph.add_edge(a, b);
        graph.add_edge(a, b);

        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.node(a).out_degree(), 2);
        assert_eq!(graph.node(b).in_degree(), 2);
        // Parallel edges are kept as separate entries
        assert_eq!(graph.successors(a), &[b, b]);
    }

    #[test]
    fn test_degree_sums_match_edge_count() {
        let mut graph = DeBruijnGraph::new(3);
        let a = graph.get_or_create("AC");
        let b = graph.get_or_create("CG");
        let c = graph.get_or_create("GT");
        graph.add_edge(a, b);
        graph.add_edge(b, c);
        graph.add_edge(c, a);

        let in_sum: usize = graph.nodes().map(Node::in_degree).sum();
        let out_sum: usize = graph.nodes().map(Node::out_degree).sum();
        assert_eq!(in_sum, graph.num_edges());
        assert_eq!(out_sum, graph.num_edges());
    }

    #[test]
    fn test_lookup_missing() {
        let graph = DeBruijnGraph::new(4);
        assert!(graph.node_id("AAA").is_none());
    }
}
