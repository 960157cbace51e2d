//! Custom assertions for graph tests

use credgraph_core::{EdgeAddress, ErrorKind, Graph, GraphError, NodeAddress, Result};

/// Sorted node addresses, for readable diffs
pub fn sorted_node_addresses(graph: &Graph) -> Vec<NodeAddress> {
    let mut addresses: Vec<NodeAddress> = graph.nodes().map(|n| n.address().clone()).collect();
    addresses.sort();
    addresses
}

/// Sorted edge addresses, for readable diffs
pub fn sorted_edge_addresses(graph: &Graph) -> Vec<EdgeAddress> {
    let mut addresses: Vec<EdgeAddress> = graph.edges().map(|e| e.address().clone()).collect();
    addresses.sort();
    addresses
}

/// Assert node and edge counts
pub fn assert_counts(graph: &Graph, nodes: usize, edges: usize) {
    assert_eq!(
        graph.node_count(),
        nodes,
        "Expected {nodes} nodes, got {:?}",
        sorted_node_addresses(graph)
    );
    assert_eq!(
        graph.edge_count(),
        edges,
        "Expected {edges} edges, got {:?}",
        sorted_edge_addresses(graph)
    );
    assert_eq!(graph.nodes().count(), nodes);
    assert_eq!(graph.edges().count(), edges);
}

/// Assert two graphs are equal by every history-independent measure
pub fn assert_same_graph(left: &Graph, right: &Graph) {
    pretty_assertions::assert_eq!(sorted_node_addresses(left), sorted_node_addresses(right));
    pretty_assertions::assert_eq!(sorted_edge_addresses(left), sorted_edge_addresses(right));
    assert!(left.equals(right), "graphs differ in content");
    assert!(right.equals(left), "equality is not symmetric");
    assert_eq!(left.fingerprint(), right.fingerprint());
}

/// Apply `mutation` to `graph`, assert it failed with `kind`, and assert
/// the graph still equals its state from before the call
pub fn assert_rejected<F>(graph: &mut Graph, kind: ErrorKind, mutation: F) -> GraphError
where
    F: FnOnce(&mut Graph) -> Result<&mut Graph>,
{
    let before = graph.clone();
    let err = mutation(&mut *graph)
        .map(|_| ())
        .expect_err("expected the mutation to be rejected");
    assert_eq!(err.kind(), kind, "unexpected error: {err}");
    assert!(graph.equals(&before), "rejected mutation changed the graph");
    assert_eq!(graph.modification_count(), before.modification_count());
    assert_eq!(graph.fingerprint(), before.fingerprint());
    err
}
