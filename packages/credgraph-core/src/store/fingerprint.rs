//! History-independent content hash of a whole graph
//!
//! Each entity is hashed on its own (in parallel), the per-entity digests
//! are sorted, and the sorted lists are hashed again. The result depends
//! only on the node and edge sets, so equal graphs always share a
//! fingerprint no matter how they were built.

use std::fmt;

use rayon::prelude::*;
use sha2::{Digest, Sha256};

use super::Graph;
use crate::domain::{Edge, Node};

type EntityDigest = [u8; 32];

/// Version tag mixed into every fingerprint; bump if the encoding changes
const FINGERPRINT_DOMAIN: &[u8] = b"credgraph-fingerprint-v1";

/// Hex-encoded SHA-256 fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphFingerprint(String);

impl GraphFingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GraphFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Length-prefixed segments so `["ab"]` and `["a", "b"]` never collide
fn update_parts(hasher: &mut Sha256, parts: &[String]) {
    hasher.update((parts.len() as u64).to_le_bytes());
    for part in parts {
        hasher.update((part.len() as u64).to_le_bytes());
        hasher.update(part.as_bytes());
    }
}

fn finish(hasher: Sha256) -> EntityDigest {
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

fn node_digest(node: &Node) -> EntityDigest {
    let mut hasher = Sha256::new();
    hasher.update(b"node");
    update_parts(&mut hasher, node.address().parts());
    // serde_json keeps object keys sorted, so this encoding is canonical
    let payload = node.payload().to_string();
    hasher.update((payload.len() as u64).to_le_bytes());
    hasher.update(payload.as_bytes());
    finish(hasher)
}

fn edge_digest(edge: &Edge) -> EntityDigest {
    let mut hasher = Sha256::new();
    hasher.update(b"edge");
    update_parts(&mut hasher, edge.address().parts());
    update_parts(&mut hasher, edge.src().parts());
    update_parts(&mut hasher, edge.dst().parts());
    finish(hasher)
}

impl Graph {
    /// Content hash of the node and edge sets
    ///
    /// # Examples
    ///
    /// ```rust
    /// use credgraph_core::{Graph, Node, NodeAddress};
    ///
    /// let a = Node::new(NodeAddress::from_parts(["a"]).unwrap());
    /// let b = Node::new(NodeAddress::from_parts(["b"]).unwrap());
    ///
    /// let mut forward = Graph::new();
    /// forward.add_node(a.clone()).unwrap().add_node(b.clone()).unwrap();
    /// let mut backward = Graph::new();
    /// backward.add_node(b).unwrap().add_node(a).unwrap();
    ///
    /// assert_eq!(forward.fingerprint(), backward.fingerprint());
    /// ```
    pub fn fingerprint(&self) -> GraphFingerprint {
        let (mut nodes, mut edges): (Vec<EntityDigest>, Vec<EntityDigest>) = rayon::join(
            || self.nodes.values().par_bridge().map(|node| node_digest(node)).collect(),
            || self.edges.values().par_bridge().map(|edge| edge_digest(edge)).collect(),
        );
        nodes.par_sort_unstable();
        edges.par_sort_unstable();

        let mut hasher = Sha256::new();
        hasher.update(FINGERPRINT_DOMAIN);
        hasher.update((nodes.len() as u64).to_le_bytes());
        for digest in &nodes {
            hasher.update(digest);
        }
        hasher.update((edges.len() as u64).to_le_bytes());
        for digest in &edges {
            hasher.update(digest);
        }
        GraphFingerprint(format!("{:x}", hasher.finalize()))
    }
}
