//! Test fixture generators
//!
//! Entities built here use dummy payloads so tests that do not care about
//! payloads keep working when fields are added.

use credgraph_core::{Edge, EdgeAddress, Graph, GraphConfig, Node, NodeAddress};

/// Node address from parts
pub fn node_address(parts: &[&str]) -> NodeAddress {
    NodeAddress::from_parts(parts.iter().copied()).expect("fixture address parts are non-empty")
}

/// Edge address from parts
pub fn edge_address(parts: &[&str]) -> EdgeAddress {
    EdgeAddress::from_parts(parts.iter().copied()).expect("fixture address parts are non-empty")
}

/// Node with a `Null` payload from parts
pub fn parts_node(parts: &[&str]) -> Node {
    Node::new(node_address(parts))
}

/// Node with a `Null` payload from a single part
pub fn node(name: &str) -> Node {
    parts_node(&[name])
}

/// Edge `src -> dst` with an address from parts
pub fn edge(parts: &[&str], src: &Node, dst: &Node) -> Edge {
    Edge::new(edge_address(parts), src.address().clone(), dst.address().clone())
}

/// Empty graph that re-checks its indexes after every mutation
pub fn checked_graph() -> Graph {
    Graph::with_config(GraphConfig::strict())
}

/// The pieces of the advanced graph
///
/// - two edges `hom1`, `hom2` from `src` to `dst`
/// - an isolated node
/// - a loop
/// - a node and an edge with the same parts (`loop`)
pub struct AdvancedGraph {
    pub src: Node,
    pub dst: Node,
    pub loop_node: Node,
    pub isolated: Node,
    pub phantom_node: Node,
    pub hom1: Edge,
    pub hom2: Edge,
    pub loop_loop: Edge,
    pub phantom_edge1: Edge,
    pub phantom_edge2: Edge,
}

impl AdvancedGraph {
    pub fn new() -> Self {
        let src = node("src");
        let dst = node("dst");
        let loop_node = node("loop");
        let isolated = node("isolated");
        let phantom_node = node("phantom");
        Self {
            hom1: edge(&["hom", "1"], &src, &dst),
            hom2: edge(&["hom", "2"], &src, &dst),
            loop_loop: edge(&["loop"], &loop_node, &loop_node),
            phantom_edge1: edge(&["phantom"], &src, &phantom_node),
            phantom_edge2: edge(&["not", "so", "isolated"], &src, &isolated),
            src,
            dst,
            loop_node,
            isolated,
            phantom_node,
        }
    }

    /// Straightforward construction
    pub fn graph1(&self) -> Graph {
        let mut graph = checked_graph();
        graph
            .add_node(self.src.clone())
            .unwrap()
            .add_node(self.dst.clone())
            .unwrap()
            .add_node(self.loop_node.clone())
            .unwrap()
            .add_node(self.isolated.clone())
            .unwrap()
            .add_edge(self.hom1.clone())
            .unwrap()
            .add_edge(self.hom2.clone())
            .unwrap()
            .add_edge(self.loop_loop.clone())
            .unwrap();
        graph
    }

    /// Same final contents as `graph1`, reached through temporary nodes
    /// and edges that are later removed
    pub fn graph2(&self) -> Graph {
        let mut graph = checked_graph();
        graph
            // N: [], E: []
            .add_node(self.phantom_node.clone())
            .unwrap()
            // N: [phantom], E: []
            .add_node(self.src.clone())
            .unwrap()
            // N: [phantom, src], E: []
            .add_edge(self.phantom_edge1.clone())
            .unwrap()
            // N: [phantom, src], E: [phantom_edge1]
            .add_node(self.isolated.clone())
            .unwrap()
            // N: [phantom, src, isolated], E: [phantom_edge1]
            .remove_edge(self.phantom_edge1.address())
            // N: [phantom, src, isolated], E: []
            .add_node(self.dst.clone())
            .unwrap()
            // N: [phantom, src, isolated, dst], E: []
            .add_edge(self.hom1.clone())
            .unwrap()
            // N: [phantom, src, isolated, dst], E: [hom1]
            .add_edge(self.phantom_edge2.clone())
            .unwrap()
            // N: [phantom, src, isolated, dst], E: [hom1, phantom_edge2]
            .add_edge(self.hom2.clone())
            .unwrap()
            // N: [phantom, src, isolated, dst], E: [hom1, phantom_edge2, hom2]
            .remove_edge(self.hom1.address())
            // N: [phantom, src, isolated, dst], E: [phantom_edge2, hom2]
            .remove_node(self.phantom_node.address())
            .unwrap()
            // N: [src, isolated, dst], E: [phantom_edge2, hom2]
            .remove_edge(self.phantom_edge2.address())
            // N: [src, isolated, dst], E: [hom2]
            .remove_node(self.isolated.address())
            .unwrap()
            // N: [src, dst], E: [hom2]
            .add_node(self.isolated.clone())
            .unwrap()
            // N: [src, dst, isolated], E: [hom2]
            .add_node(self.loop_node.clone())
            .unwrap()
            // N: [src, dst, isolated, loop], E: [hom2]
            .add_edge(self.loop_loop.clone())
            .unwrap()
            // N: [src, dst, isolated, loop], E: [hom2, loop_loop]
            .add_edge(self.hom1.clone())
            .unwrap();
        // N: [src, dst, isolated, loop], E: [hom2, loop_loop, hom1]
        graph
    }
}

impl Default for AdvancedGraph {
    fn default() -> Self {
        Self::new()
    }
}
