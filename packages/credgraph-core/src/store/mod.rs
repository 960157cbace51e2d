//! Graph store
//!
//! [`Graph`] owns a node collection and an edge collection and is the only
//! place where cross-entity invariants are enforced:
//!
//! 1. node addresses are unique
//! 2. edge addresses are unique
//! 3. every edge's `src` and `dst` are member nodes (no dangling edges)
//! 4. several edges may share the same `(src, dst)`
//! 5. equality depends only on the node and edge sets, never on history
//!
//! Every mutation validates first and commits second, so a rejected call
//! leaves the graph exactly as it was. Mutations return `&mut Self` for
//! chaining with `?`:
//!
//! ```rust
//! use credgraph_core::{Edge, EdgeAddress, Graph, Node, NodeAddress};
//!
//! # fn main() -> credgraph_core::Result<()> {
//! let src = NodeAddress::from_parts(["src"])?;
//! let dst = NodeAddress::from_parts(["dst"])?;
//! let mut graph = Graph::new();
//! graph
//!     .add_node(Node::new(src.clone()))?
//!     .add_node(Node::new(dst.clone()))?
//!     .add_edge(Edge::new(EdgeAddress::from_parts(["hom", "1"])?, src, dst))?;
//! assert_eq!(graph.edge_count(), 1);
//! # Ok(())
//! # }
//! ```

mod fingerprint;
mod invariants;
mod merge;
mod query;

use std::collections::BTreeSet;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use tracing::{debug, trace, warn};

use crate::config::GraphConfig;
use crate::domain::{Edge, EdgeAddress, Endpoint, Node, NodeAddress};
use crate::error::{GraphError, Result};

pub use fingerprint::GraphFingerprint;
pub use query::{Direction, EdgeFilter, Neighbor, NeighborsOptions};

type EdgeSet = AHashSet<EdgeAddress>;

/// Content-addressed, history-independent directed multigraph
///
/// Node and edge values are stored behind `Arc` and shared, not copied,
/// when graphs are cloned or merged.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: AHashMap<NodeAddress, Arc<Node>>,
    edges: AHashMap<EdgeAddress, Arc<Edge>>,
    /// Edges leaving each member node; every member has an entry
    outgoing: AHashMap<NodeAddress, EdgeSet>,
    /// Edges entering each member node; every member has an entry
    incoming: AHashMap<NodeAddress, EdgeSet>,
    config: GraphConfig,
    modification_count: u64,
}

impl Graph {
    /// Create an empty graph with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of committed mutations; no-ops and rejected calls do not count
    pub fn modification_count(&self) -> u64 {
        self.modification_count
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Mutations
    // ═══════════════════════════════════════════════════════════════════════

    /// Insert a node
    ///
    /// Re-adding an identical node is a no-op.
    ///
    /// # Errors
    ///
    /// `GraphError::AddressConflict` if a node with the same address but a
    /// different payload is already present.
    pub fn add_node(&mut self, node: impl Into<Arc<Node>>) -> Result<&mut Self> {
        let node = node.into();
        match self.nodes.get(node.address()).map(|existing| **existing == *node) {
            Some(true) => {
                debug!(address = %node.address(), "add_node: already present");
                Ok(self)
            }
            Some(false) => {
                debug!(address = %node.address(), "add_node rejected: address conflict");
                Err(GraphError::conflict(node.address().clone()))
            }
            None => {
                trace!(address = %node.address(), "add_node");
                self.insert_node(node);
                self.record_modification();
                Ok(self)
            }
        }
    }

    /// Remove a node
    ///
    /// Removing an absent node is a no-op.
    ///
    /// # Errors
    ///
    /// `GraphError::IncidentEdge` while any edge has the node as `src` or
    /// `dst`; remove those edges first.
    pub fn remove_node(&mut self, address: &NodeAddress) -> Result<&mut Self> {
        if !self.nodes.contains_key(address) {
            debug!(%address, "remove_node: not present");
            return Ok(self);
        }

        let incident: BTreeSet<&EdgeAddress> = self
            .outgoing
            .get(address)
            .into_iter()
            .chain(self.incoming.get(address))
            .flatten()
            .collect();
        if let Some(edge) = incident.first() {
            debug!(%address, incident = incident.len(), "remove_node rejected: incident edges");
            return Err(GraphError::IncidentEdge {
                node: address.clone(),
                edge: (*edge).clone(),
                count: incident.len(),
            });
        }

        trace!(%address, "remove_node");
        self.nodes.remove(address);
        self.outgoing.remove(address);
        self.incoming.remove(address);
        self.record_modification();
        Ok(self)
    }

    /// Insert an edge
    ///
    /// Re-adding an identical edge is a no-op. Edges sharing endpoints with
    /// other edges (multi-edges) and self loops are accepted.
    ///
    /// # Errors
    ///
    /// - `GraphError::DanglingEdge` if `src` or `dst` is not a member node
    ///   (checked first)
    /// - `GraphError::AddressConflict` if a different edge already has this
    ///   address
    pub fn add_edge(&mut self, edge: impl Into<Arc<Edge>>) -> Result<&mut Self> {
        let edge = edge.into();
        for endpoint in [Endpoint::Src, Endpoint::Dst] {
            let node = edge.endpoint(endpoint);
            if !self.nodes.contains_key(node) {
                debug!(address = %edge.address(), %endpoint, %node, "add_edge rejected: dangling");
                return Err(GraphError::DanglingEdge {
                    edge: edge.address().clone(),
                    endpoint,
                    node: node.clone(),
                });
            }
        }

        match self.edges.get(edge.address()).map(|existing| **existing == *edge) {
            Some(true) => {
                debug!(address = %edge.address(), "add_edge: already present");
                Ok(self)
            }
            Some(false) => {
                debug!(address = %edge.address(), "add_edge rejected: address conflict");
                Err(GraphError::conflict(edge.address().clone()))
            }
            None => {
                trace!(address = %edge.address(), src = %edge.src(), dst = %edge.dst(), "add_edge");
                self.insert_edge(edge);
                self.record_modification();
                Ok(self)
            }
        }
    }

    /// Remove an edge. Never fails; removing an absent edge is a no-op.
    pub fn remove_edge(&mut self, address: &EdgeAddress) -> &mut Self {
        match self.edges.remove(address) {
            Some(edge) => {
                trace!(%address, "remove_edge");
                if let Some(out) = self.outgoing.get_mut(edge.src()) {
                    out.remove(address);
                }
                if let Some(inc) = self.incoming.get_mut(edge.dst()) {
                    inc.remove(address);
                }
                self.record_modification();
            }
            None => debug!(%address, "remove_edge: not present"),
        }
        self
    }

    /// Structural equality: same node set and same edge set.
    ///
    /// Configuration and modification count are ignored.
    pub fn equals(&self, other: &Graph) -> bool {
        self == other
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Internals
    // ═══════════════════════════════════════════════════════════════════════

    /// Insert without validation; caller guarantees the address is free.
    fn insert_node(&mut self, node: Arc<Node>) {
        let address = node.address().clone();
        self.outgoing.insert(address.clone(), EdgeSet::new());
        self.incoming.insert(address.clone(), EdgeSet::new());
        self.nodes.insert(address, node);
    }

    /// Insert without validation; caller guarantees both endpoints exist
    /// and the address is free.
    fn insert_edge(&mut self, edge: Arc<Edge>) {
        let address = edge.address().clone();
        self.outgoing
            .entry(edge.src().clone())
            .or_default()
            .insert(address.clone());
        self.incoming
            .entry(edge.dst().clone())
            .or_default()
            .insert(address.clone());
        self.edges.insert(address, edge);
    }

    fn record_modification(&mut self) {
        self.modification_count += 1;
        if self.config.invariant_checks.should_check(self.modification_count) {
            self.assert_invariants();
        }
    }

    fn assert_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            warn!(error = %err, modification = self.modification_count, "graph invariant check failed");
            panic!(
                "graph invariants violated after modification {}: {}",
                self.modification_count, err
            );
        }
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl Eq for Graph {}
