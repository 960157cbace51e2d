//! Read-only queries over a [`Graph`]
//!
//! Iterators borrow the graph, so the borrow checker rules out mutation
//! while one is alive. Calling the method again restarts iteration. Order
//! is unspecified; sort by address if you need determinism.

use std::sync::Arc;

use super::Graph;
use crate::domain::{Edge, EdgeAddress, Node, NodeAddress};
use crate::error::{GraphError, Result};

/// Edge direction relative to the node being queried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Edges whose `dst` is the node
    In,
    /// Edges whose `src` is the node
    Out,
    /// Both; a loop is still reported once
    #[default]
    Any,
}

/// Prefix filters for [`Graph::edges_matching`]
///
/// Each prefix defaults to the empty address, which matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeFilter {
    pub address_prefix: EdgeAddress,
    pub src_prefix: NodeAddress,
    pub dst_prefix: NodeAddress,
}

impl EdgeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address_prefix(mut self, prefix: EdgeAddress) -> Self {
        self.address_prefix = prefix;
        self
    }

    pub fn src_prefix(mut self, prefix: NodeAddress) -> Self {
        self.src_prefix = prefix;
        self
    }

    pub fn dst_prefix(mut self, prefix: NodeAddress) -> Self {
        self.dst_prefix = prefix;
        self
    }

    pub fn matches(&self, edge: &Edge) -> bool {
        edge.address().has_prefix(&self.address_prefix)
            && edge.src().has_prefix(&self.src_prefix)
            && edge.dst().has_prefix(&self.dst_prefix)
    }
}

/// Options for [`Graph::neighbors`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborsOptions {
    pub direction: Direction,
    pub node_prefix: NodeAddress,
    pub edge_prefix: EdgeAddress,
}

impl NeighborsOptions {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    pub fn node_prefix(mut self, prefix: NodeAddress) -> Self {
        self.node_prefix = prefix;
        self
    }

    pub fn edge_prefix(mut self, prefix: EdgeAddress) -> Self {
        self.edge_prefix = prefix;
        self
    }
}

/// An adjacent node together with the edge connecting it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor<'a> {
    pub node: &'a Node,
    pub edge: &'a Edge,
}

impl Graph {
    pub fn has_node(&self, address: &NodeAddress) -> bool {
        self.nodes.contains_key(address)
    }

    pub fn has_edge(&self, address: &EdgeAddress) -> bool {
        self.edges.contains_key(address)
    }

    /// Look up a node, `None` if absent
    pub fn get_node(&self, address: &NodeAddress) -> Option<&Node> {
        self.nodes.get(address).map(Arc::as_ref)
    }

    /// Look up an edge, `None` if absent
    pub fn get_edge(&self, address: &EdgeAddress) -> Option<&Edge> {
        self.edges.get(address).map(Arc::as_ref)
    }

    /// Look up a node
    ///
    /// # Errors
    ///
    /// `GraphError::NotFound` if no node has this address
    pub fn node(&self, address: &NodeAddress) -> Result<&Node> {
        self.get_node(address)
            .ok_or_else(|| GraphError::not_found(address.clone()))
    }

    /// Look up an edge
    ///
    /// # Errors
    ///
    /// `GraphError::NotFound` if no edge has this address
    pub fn edge(&self, address: &EdgeAddress) -> Result<&Edge> {
        self.get_edge(address)
            .ok_or_else(|| GraphError::not_found(address.clone()))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values().map(Arc::as_ref)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values().map(Arc::as_ref)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Nodes whose address starts with `prefix`
    pub fn nodes_with_prefix<'a>(
        &'a self,
        prefix: &'a NodeAddress,
    ) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes().filter(move |node| node.address().has_prefix(prefix))
    }

    /// Edges accepted by `filter`
    pub fn edges_matching<'a>(&'a self, filter: &'a EdgeFilter) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges().filter(move |edge| filter.matches(edge))
    }

    /// Nodes adjacent to `address`, with the connecting edge
    ///
    /// # Errors
    ///
    /// `GraphError::NotFound` if `address` is not a member node
    pub fn neighbors<'a>(
        &'a self,
        address: &NodeAddress,
        options: &NeighborsOptions,
    ) -> Result<impl Iterator<Item = Neighbor<'a>> + 'a> {
        if !self.has_node(address) {
            return Err(GraphError::not_found(address.clone()));
        }

        let direction = options.direction;
        let node_prefix = options.node_prefix.clone();
        let edge_prefix = options.edge_prefix.clone();

        let outgoing = match direction {
            Direction::In => None,
            Direction::Out | Direction::Any => self.outgoing.get(address),
        };
        let incoming = match direction {
            Direction::Out => None,
            Direction::In | Direction::Any => self.incoming.get(address),
        };

        let out_edges = outgoing
            .into_iter()
            .flatten()
            .filter_map(move |edge| self.get_edge(edge))
            .map(|edge| (edge.dst(), edge));
        // Loops already came through the outgoing side
        let in_edges = incoming
            .into_iter()
            .flatten()
            .filter_map(move |edge| self.get_edge(edge))
            .filter(move |edge| !(direction == Direction::Any && edge.is_loop()))
            .map(|edge| (edge.src(), edge));

        Ok(out_edges
            .chain(in_edges)
            .filter(move |(_, edge)| edge.address().has_prefix(&edge_prefix))
            .filter(move |(node, _)| node.has_prefix(&node_prefix))
            .filter_map(move |(node, edge)| {
                self.get_node(node).map(|node| Neighbor { node, edge })
            }))
    }
}
