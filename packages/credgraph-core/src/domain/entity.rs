//! Node and edge values
//!
//! Both are frozen after construction: fields are private and there are no
//! setters, so a single value can be shared by several graphs after a merge.

use std::fmt;

use serde_json::Value;

use super::address::{EdgeAddress, NodeAddress};

/// A vertex of the contribution graph
///
/// # Examples
///
/// ```rust
/// use credgraph_core::domain::{Node, NodeAddress};
///
/// let address = NodeAddress::from_parts(["git", "commit", "abc123"]).unwrap();
/// let node = Node::with_payload(address.clone(), serde_json::json!({"author": "d11"}));
/// assert_eq!(node.address(), &address);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    address: NodeAddress,
    /// Descriptive content; participates in equality
    payload: Value,
}

impl Node {
    /// Create a node with a `Null` payload
    pub fn new(address: NodeAddress) -> Self {
        Self {
            address,
            payload: Value::Null,
        }
    }

    /// Create a node carrying descriptive content
    pub fn with_payload(address: NodeAddress, payload: Value) -> Self {
        Self { address, payload }
    }

    pub fn address(&self) -> &NodeAddress {
        &self.address
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

/// Which end of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Src,
    Dst,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Src => "src",
            Endpoint::Dst => "dst",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A directed edge between two node addresses
///
/// Edges hold addresses rather than node references; whether the endpoints
/// exist is checked by the graph at insertion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    address: EdgeAddress,
    src: NodeAddress,
    dst: NodeAddress,
}

impl Edge {
    pub fn new(address: EdgeAddress, src: NodeAddress, dst: NodeAddress) -> Self {
        Self { address, src, dst }
    }

    pub fn address(&self) -> &EdgeAddress {
        &self.address
    }

    pub fn src(&self) -> &NodeAddress {
        &self.src
    }

    pub fn dst(&self) -> &NodeAddress {
        &self.dst
    }

    pub fn endpoint(&self, endpoint: Endpoint) -> &NodeAddress {
        match endpoint {
            Endpoint::Src => &self.src,
            Endpoint::Dst => &self.dst,
        }
    }

    /// True when `src == dst`
    pub fn is_loop(&self) -> bool {
        self.src == self.dst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_address(name: &str) -> NodeAddress {
        NodeAddress::from_parts([name]).unwrap()
    }

    #[test]
    fn test_node_new_has_null_payload() {
        let node = Node::new(node_address("src"));
        assert_eq!(node.payload(), &Value::Null);
        assert_eq!(node.address(), &node_address("src"));
    }

    #[test]
    fn test_node_payload_participates_in_equality() {
        let plain = Node::new(node_address("src"));
        let described = Node::with_payload(node_address("src"), serde_json::json!({"title": "x"}));
        assert_ne!(plain, described);
        assert_eq!(described.clone(), described);
    }

    #[test]
    fn test_edge_accessors() {
        let edge = Edge::new(
            EdgeAddress::from_parts(["hom", "1"]).unwrap(),
            node_address("src"),
            node_address("dst"),
        );
        assert_eq!(edge.src(), &node_address("src"));
        assert_eq!(edge.dst(), &node_address("dst"));
        assert_eq!(edge.endpoint(Endpoint::Src), edge.src());
        assert_eq!(edge.endpoint(Endpoint::Dst), edge.dst());
        assert!(!edge.is_loop());
    }

    #[test]
    fn test_edge_equality_covers_endpoints() {
        let address = EdgeAddress::from_parts(["e"]).unwrap();
        let forward = Edge::new(address.clone(), node_address("a"), node_address("b"));
        let backward = Edge::new(address, node_address("b"), node_address("a"));
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_self_loop() {
        let edge = Edge::new(
            EdgeAddress::from_parts(["loop"]).unwrap(),
            node_address("loop"),
            node_address("loop"),
        );
        assert!(edge.is_loop());
    }

    #[test]
    fn test_endpoint_as_str() {
        assert_eq!(Endpoint::Src.as_str(), "src");
        assert_eq!(Endpoint::Dst.to_string(), "dst");
    }
}
