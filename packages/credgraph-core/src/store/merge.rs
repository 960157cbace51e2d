//! Composition of independently built fragment graphs

use std::hash::Hash;
use std::sync::Arc;

use ahash::AHashMap;
use tracing::{debug, info};

use super::Graph;
use crate::config::GraphConfig;
use crate::error::{GraphError, Result};

impl Graph {
    /// Union of `graphs` into a fresh graph with the default configuration
    ///
    /// Nodes and edges are shared with the inputs, not copied. Identical
    /// entities present in several inputs appear once. The inputs are left
    /// untouched.
    ///
    /// # Errors
    ///
    /// `GraphError::MergeConflict` if two inputs hold different content at
    /// the same node or edge address. `fragment` is the index of the input
    /// in which the disagreement was found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use credgraph_core::{Graph, Node, NodeAddress};
    ///
    /// let mut git = Graph::new();
    /// git.add_node(Node::new(NodeAddress::from_parts(["git", "commit", "1"]).unwrap())).unwrap();
    /// let mut github = Graph::new();
    /// github.add_node(Node::new(NodeAddress::from_parts(["github", "pull", "1"]).unwrap())).unwrap();
    ///
    /// let merged = Graph::merge([&git, &github]).unwrap();
    /// assert_eq!(merged.node_count(), 2);
    /// ```
    pub fn merge<'a, I>(graphs: I) -> Result<Graph>
    where
        I: IntoIterator<Item = &'a Graph>,
    {
        Self::merge_with_config(GraphConfig::default(), graphs)
    }

    /// [`Graph::merge`] with an explicit configuration for the result
    pub fn merge_with_config<'a, I>(config: GraphConfig, graphs: I) -> Result<Graph>
    where
        I: IntoIterator<Item = &'a Graph>,
    {
        let graphs: Vec<&Graph> = graphs.into_iter().collect();
        let mut merged = Graph::with_config(config);

        // All nodes first, so every input edge finds both endpoints.
        for (fragment, graph) in graphs.iter().enumerate() {
            for (address, node) in &graph.nodes {
                match merged.nodes.get(address).map(|existing| existing == node) {
                    Some(true) => {}
                    Some(false) => {
                        let address = smallest_conflict(&merged.nodes, &graph.nodes).unwrap_or(address);
                        debug!(%address, fragment, "merge rejected: node conflict");
                        return Err(GraphError::merge_conflict(address.clone(), fragment));
                    }
                    None => merged.insert_node(Arc::clone(node)),
                }
            }
        }

        for (fragment, graph) in graphs.iter().enumerate() {
            for (address, edge) in &graph.edges {
                match merged.edges.get(address).map(|existing| existing == edge) {
                    Some(true) => {}
                    Some(false) => {
                        let address = smallest_conflict(&merged.edges, &graph.edges).unwrap_or(address);
                        debug!(%address, fragment, "merge rejected: edge conflict");
                        return Err(GraphError::merge_conflict(address.clone(), fragment));
                    }
                    None => merged.insert_edge(Arc::clone(edge)),
                }
            }
        }

        if merged.config.invariant_checks.is_enabled() {
            merged.assert_invariants();
        }

        info!(
            fragments = graphs.len(),
            nodes = merged.node_count(),
            edges = merged.edge_count(),
            "merged graph fragments"
        );
        Ok(merged)
    }
}

/// Smallest address at which `fragment` disagrees with `merged`
///
/// Entries `fragment` already contributed compare equal to themselves, so
/// only disagreements with earlier inputs are found.
fn smallest_conflict<'a, K, V>(
    merged: &AHashMap<K, Arc<V>>,
    fragment: &'a AHashMap<K, Arc<V>>,
) -> Option<&'a K>
where
    K: Ord + Hash,
    V: PartialEq,
{
    fragment
        .iter()
        .filter(|(address, value)| merged.get(*address).is_some_and(|existing| existing != *value))
        .map(|(address, _)| address)
        .min()
}
