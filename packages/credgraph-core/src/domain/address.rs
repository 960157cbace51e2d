//! Hierarchical addresses for nodes and edges
//!
//! An address is an ordered sequence of non-empty string segments, usually
//! namespaced by the originating source first (`["github", "issue", "42"]`).
//! Node and edge addresses are separate types: the same parts produce two
//! keys that can never be compared or collide.

use std::fmt;

use crate::error::{GraphError, Result};

/// Rejects the first empty segment, reporting its position.
fn validate_parts(parts: Vec<String>) -> Result<Vec<String>> {
    match parts.iter().position(String::is_empty) {
        Some(index) => Err(GraphError::InvalidAddress { parts, index }),
        None => Ok(parts),
    }
}

macro_rules! address_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Vec<String>);

        impl $name {
            /// Build an address from its segments.
            ///
            /// # Errors
            ///
            /// Returns `GraphError::InvalidAddress` if any segment is empty.
            pub fn from_parts<I, S>(parts: I) -> Result<Self>
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                let parts = parts.into_iter().map(Into::into).collect();
                validate_parts(parts).map(Self)
            }

            /// The zero-segment address. Every address has it as a prefix.
            pub fn empty() -> Self {
                Self(Vec::new())
            }

            /// Borrow the segments.
            pub fn parts(&self) -> &[String] {
                &self.0
            }

            /// Copy the segments out; inverse of [`Self::from_parts`].
            pub fn to_parts(&self) -> Vec<String> {
                self.0.clone()
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Segment-wise prefix test: `["a", "bc"]` does not start with `["a", "b"]`.
            pub fn has_prefix(&self, prefix: &Self) -> bool {
                self.0.starts_with(&prefix.0)
            }

            /// A new address with `parts` appended after this one's segments.
            pub fn append<I, S>(&self, parts: I) -> Result<Self>
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                let joined = self
                    .0
                    .iter()
                    .cloned()
                    .chain(parts.into_iter().map(Into::into))
                    .collect();
                validate_parts(joined).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}[", stringify!($name))?;
                for (i, part) in self.0.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{:?}", part)?;
                }
                write!(f, "]")
            }
        }

        impl TryFrom<Vec<String>> for $name {
            type Error = GraphError;

            fn try_from(parts: Vec<String>) -> Result<Self> {
                validate_parts(parts).map(Self)
            }
        }
    };
}

address_type!(
    /// Address of a [`Node`](super::Node).
    NodeAddress
);

address_type!(
    /// Address of an [`Edge`](super::Edge).
    EdgeAddress
);

/// An address of either kind, for errors that may concern nodes or edges
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityAddress {
    Node(NodeAddress),
    Edge(EdgeAddress),
}

impl EntityAddress {
    pub fn as_node(&self) -> Option<&NodeAddress> {
        match self {
            EntityAddress::Node(address) => Some(address),
            EntityAddress::Edge(_) => None,
        }
    }

    pub fn as_edge(&self) -> Option<&EdgeAddress> {
        match self {
            EntityAddress::Edge(address) => Some(address),
            EntityAddress::Node(_) => None,
        }
    }
}

impl fmt::Display for EntityAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityAddress::Node(address) => address.fmt(f),
            EntityAddress::Edge(address) => address.fmt(f),
        }
    }
}

impl From<NodeAddress> for EntityAddress {
    fn from(address: NodeAddress) -> Self {
        EntityAddress::Node(address)
    }
}

impl From<EdgeAddress> for EntityAddress {
    fn from(address: EdgeAddress) -> Self {
        EntityAddress::Edge(address)
    }
}
