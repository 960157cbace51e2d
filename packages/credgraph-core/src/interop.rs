//! Petgraph view of a finished graph
//!
//! Downstream analysis (ranking, traversal) runs on `petgraph`. The view
//! is a read-only copy built in address order, so the same graph always
//! produces the same node and edge indices.

use ahash::AHashMap;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};

use crate::domain::{Edge, EdgeAddress, Node, NodeAddress};
use crate::store::Graph;

/// Directed petgraph copy of a [`Graph`]
///
/// Node weights are node addresses and edge weights are edge addresses;
/// look entities up in the source graph for payloads.
#[derive(Debug, Clone)]
pub struct PetgraphView {
    /// Graph (node addresses + edge addresses)
    graph: DiGraph<NodeAddress, EdgeAddress>,

    /// Node address → node index mapping
    node_indices: AHashMap<NodeAddress, NodeIndex>,

    /// Edge address → edge index mapping
    edge_indices: AHashMap<EdgeAddress, EdgeIndex>,
}

impl PetgraphView {
    pub fn from_graph(source: &Graph) -> Self {
        let mut nodes: Vec<&NodeAddress> = source.nodes().map(Node::address).collect();
        nodes.sort();
        let mut edges: Vec<&Edge> = source.edges().collect();
        edges.sort_by(|a, b| a.address().cmp(b.address()));

        let mut graph = DiGraph::with_capacity(nodes.len(), edges.len());
        let mut node_indices = AHashMap::with_capacity(nodes.len());
        for address in nodes {
            let index = graph.add_node(address.clone());
            node_indices.insert(address.clone(), index);
        }

        let mut edge_indices = AHashMap::with_capacity(edges.len());
        for edge in edges {
            // Endpoints are always present: the source graph has no dangling edges
            if let (Some(&src), Some(&dst)) = (node_indices.get(edge.src()), node_indices.get(edge.dst())) {
                let index = graph.add_edge(src, dst, edge.address().clone());
                edge_indices.insert(edge.address().clone(), index);
            }
        }

        Self {
            graph,
            node_indices,
            edge_indices,
        }
    }

    pub fn graph(&self) -> &DiGraph<NodeAddress, EdgeAddress> {
        &self.graph
    }

    pub fn node_index(&self, address: &NodeAddress) -> Option<NodeIndex> {
        self.node_indices.get(address).copied()
    }

    pub fn edge_index(&self, address: &EdgeAddress) -> Option<EdgeIndex> {
        self.edge_indices.get(address).copied()
    }

    pub fn into_inner(self) -> DiGraph<NodeAddress, EdgeAddress> {
        self.graph
    }
}

impl From<&Graph> for PetgraphView {
    fn from(graph: &Graph) -> Self {
        Self::from_graph(graph)
    }
}
