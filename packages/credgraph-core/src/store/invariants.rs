//! Consistency check between the entity maps and the adjacency indexes

use super::Graph;
use crate::error::{GraphError, Result};

impl Graph {
    /// Verify that no edge dangles and that the adjacency indexes agree
    /// exactly with the edge set.
    ///
    /// Public mutations keep these properties, so an error here means the
    /// store itself is broken. Linear in the size of the graph.
    pub fn check_invariants(&self) -> Result<()> {
        for (address, node) in &self.nodes {
            if node.address() != address {
                return Err(GraphError::corrupted(format!(
                    "node stored under {address} has address {}",
                    node.address()
                )));
            }
            if !self.outgoing.contains_key(address) || !self.incoming.contains_key(address) {
                return Err(GraphError::corrupted(format!(
                    "{address} has no adjacency entry"
                )));
            }
        }

        for (address, edge) in &self.edges {
            if edge.address() != address {
                return Err(GraphError::corrupted(format!(
                    "edge stored under {address} has address {}",
                    edge.address()
                )));
            }
            for node in [edge.src(), edge.dst()] {
                if !self.nodes.contains_key(node) {
                    return Err(GraphError::corrupted(format!(
                        "{address} dangles: {node} is missing"
                    )));
                }
            }
            let indexed_out = self
                .outgoing
                .get(edge.src())
                .is_some_and(|edges| edges.contains(address));
            let indexed_in = self
                .incoming
                .get(edge.dst())
                .is_some_and(|edges| edges.contains(address));
            if !indexed_out || !indexed_in {
                return Err(GraphError::corrupted(format!(
                    "{address} is missing from the adjacency index"
                )));
            }
        }

        for (label, index) in [("outgoing", &self.outgoing), ("incoming", &self.incoming)] {
            if index.len() != self.nodes.len() {
                return Err(GraphError::corrupted(format!(
                    "{label} index has {} entries for {} nodes",
                    index.len(),
                    self.nodes.len()
                )));
            }
            for (node, edges) in index {
                for address in edges {
                    let endpoint_matches = self.edges.get(address).is_some_and(|edge| {
                        let endpoint = if label == "outgoing" { edge.src() } else { edge.dst() };
                        endpoint == node
                    });
                    if !endpoint_matches {
                        return Err(GraphError::corrupted(format!(
                            "{label} index of {node} lists stale {address}"
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{Edge, EdgeAddress, Node, NodeAddress};
    use crate::error::ErrorKind;
    use crate::store::Graph;

    fn addr(name: &str) -> NodeAddress {
        NodeAddress::from_parts([name]).unwrap()
    }

    fn populated() -> Graph {
        let mut graph = Graph::new();
        graph
            .add_node(Node::new(addr("a")))
            .unwrap()
            .add_node(Node::new(addr("b")))
            .unwrap()
            .add_edge(Edge::new(EdgeAddress::from_parts(["ab"]).unwrap(), addr("a"), addr("b")))
            .unwrap();
        graph
    }

    #[test]
    fn test_valid_graph_passes() {
        assert!(Graph::new().check_invariants().is_ok());
        assert!(populated().check_invariants().is_ok());
    }

    #[test]
    fn test_detects_dangling_edge() {
        let mut graph = populated();
        graph.nodes.remove(&addr("b"));
        graph.incoming.remove(&addr("b"));
        graph.outgoing.remove(&addr("b"));
        let err = graph.check_invariants().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Corrupted);
        assert!(err.to_string().contains("dangles"));
    }

    #[test]
    fn test_detects_stale_index_entry() {
        let mut graph = populated();
        graph.edges.clear();
        let err = graph.check_invariants().unwrap_err();
        assert!(err.to_string().contains("stale"));
    }

    #[test]
    fn test_detects_missing_index_entry() {
        let mut graph = populated();
        if let Some(edges) = graph.outgoing.get_mut(&addr("a")) {
            edges.clear();
        }
        let err = graph.check_invariants().unwrap_err();
        assert!(err.to_string().contains("missing from the adjacency index"));
    }

    #[test]
    #[should_panic(expected = "graph invariants violated")]
    fn test_strict_policy_panics_on_corruption() {
        let mut graph = crate::store::Graph::with_config(crate::config::GraphConfig::strict());
        graph.add_node(Node::new(addr("a"))).unwrap();
        graph.outgoing.clear();
        graph.add_node(Node::new(addr("b"))).unwrap();
    }
}
