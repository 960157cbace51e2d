//! credgraph-core - Contribution Graph Store
//!
//! > "Equal contents, equal graphs: history never leaks into identity."
//!
//! Contribution records from many sources (git history, issue trackers,
//! forum posts) are turned into one graph. Each source builds its own
//! fragment [`Graph`] through the mutation API; [`Graph::merge`] unifies
//! the fragments; analysis and display only read the result.
//!
//! ## Core Principles
//!
//! 1. **Content addressing**: an entity is identified by its hierarchical
//!    address, never by construction history or memory location
//! 2. **Atomic mutations**: every call either commits completely or leaves
//!    the graph unchanged
//! 3. **No dangling edges**: endpoints are checked when an edge is added and
//!    when a node is removed
//! 4. **History independence**: equality (and [`Graph::fingerprint`]) only
//!    look at the node and edge sets
//!
//! ## Usage
//!
//! ```rust
//! use credgraph_core::{Edge, EdgeAddress, Graph, Node, NodeAddress};
//!
//! # fn main() -> credgraph_core::Result<()> {
//! // 1. Each source builds a fragment, namespaced by its own leading segment
//! let commit = NodeAddress::from_parts(["git", "commit", "abc123"])?;
//! let mut git = Graph::new();
//! git.add_node(Node::new(commit.clone()))?;
//!
//! let pull = NodeAddress::from_parts(["github", "pull", "7"])?;
//! let mut github = Graph::new();
//! github
//!     .add_node(Node::new(pull.clone()))?
//!     .add_node(Node::new(commit.clone()))?
//!     .add_edge(Edge::new(
//!         EdgeAddress::from_parts(["github", "merged_as", "7"])?,
//!         pull,
//!         commit,
//!     ))?;
//!
//! // 2. Merge the fragments (shared, identical nodes are unified)
//! let graph = Graph::merge([&git, &github])?;
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod interop;
pub mod store;

pub use error::{ErrorKind, GraphError, Result};

pub use config::{GraphConfig, InvariantCheckPolicy};
pub use domain::{Edge, EdgeAddress, Endpoint, EntityAddress, Node, NodeAddress};
pub use interop::PetgraphView;
pub use store::{Direction, EdgeFilter, Graph, GraphFingerprint, Neighbor, NeighborsOptions};
