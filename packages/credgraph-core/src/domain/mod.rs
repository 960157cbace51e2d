//! Domain layer: addresses and entity values
//!
//! # Domain Models
//!
//! - `NodeAddress` / `EdgeAddress`: disjoint hierarchical key spaces
//! - `Node`: address plus descriptive payload
//! - `Edge`: address plus ordered `(src, dst)` node addresses
//!
//! Everything here is an immutable value. Invariants that involve more than
//! one entity (dangling edges, address conflicts) are enforced by
//! [`Graph`](crate::store::Graph).
//!
//! # Examples
//!
//! ```rust
//! use credgraph_core::domain::{Edge, EdgeAddress, Node, NodeAddress};
//!
//! let author = NodeAddress::from_parts(["github", "user", "d11"]).unwrap();
//! let issue = NodeAddress::from_parts(["github", "issue", "7"]).unwrap();
//! let authors = Edge::new(
//!     EdgeAddress::from_parts(["github", "authors", "7"]).unwrap(),
//!     author.clone(),
//!     issue.clone(),
//! );
//! assert_eq!(authors.src(), &author);
//! assert_eq!(Node::new(issue.clone()).address(), &issue);
//! ```

mod address;
mod entity;

pub use address::{EdgeAddress, EntityAddress, NodeAddress};
pub use entity::{Edge, Endpoint, Node};
