//! Error types for credgraph-core

use std::fmt;
use thiserror::Error;

use crate::domain::{EdgeAddress, Endpoint, EntityAddress, NodeAddress};

/// Graph error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Address built with an empty segment
    InvalidAddress,
    /// Address already holds different content
    AddressConflict,
    /// Edge endpoint is not a member node
    DanglingEdge,
    /// Node still referenced by an edge
    IncidentEdge,
    /// Lookup of an unknown address
    NotFound,
    /// Merge inputs disagree on an address
    MergeConflict,
    /// Internal indexes disagree with the entity sets
    Corrupted,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidAddress => "invalid_address",
            ErrorKind::AddressConflict => "address_conflict",
            ErrorKind::DanglingEdge => "dangling_edge",
            ErrorKind::IncidentEdge => "incident_edge",
            ErrorKind::NotFound => "not_found",
            ErrorKind::MergeConflict => "merge_conflict",
            ErrorKind::Corrupted => "corrupted",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Graph error type
///
/// Every variant is a contract violation raised at the offending call.
/// None of them is transient; callers fix the call sequence instead of
/// retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("[invalid_address] empty segment at index {index} in {parts:?}")]
    InvalidAddress { parts: Vec<String>, index: usize },

    #[error("[address_conflict] {address} already exists with different content")]
    AddressConflict { address: EntityAddress },

    #[error("[dangling_edge] {edge} has {endpoint} {node}, which is not in the graph")]
    DanglingEdge {
        edge: EdgeAddress,
        endpoint: Endpoint,
        node: NodeAddress,
    },

    #[error("[incident_edge] cannot remove {node}: referenced by {count} edge(s), including {edge}")]
    IncidentEdge {
        node: NodeAddress,
        edge: EdgeAddress,
        count: usize,
    },

    #[error("[not_found] {address}")]
    NotFound { address: EntityAddress },

    #[error("[merge_conflict] input graph {fragment} disagrees on the content of {address}")]
    MergeConflict {
        address: EntityAddress,
        fragment: usize,
    },

    #[error("[corrupted] {0}")]
    Corrupted(String),
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::InvalidAddress { .. } => ErrorKind::InvalidAddress,
            GraphError::AddressConflict { .. } => ErrorKind::AddressConflict,
            GraphError::DanglingEdge { .. } => ErrorKind::DanglingEdge,
            GraphError::IncidentEdge { .. } => ErrorKind::IncidentEdge,
            GraphError::NotFound { .. } => ErrorKind::NotFound,
            GraphError::MergeConflict { .. } => ErrorKind::MergeConflict,
            GraphError::Corrupted(_) => ErrorKind::Corrupted,
        }
    }

    // Convenience constructors
    pub fn conflict(address: impl Into<EntityAddress>) -> Self {
        GraphError::AddressConflict {
            address: address.into(),
        }
    }

    pub fn not_found(address: impl Into<EntityAddress>) -> Self {
        GraphError::NotFound {
            address: address.into(),
        }
    }

    pub fn merge_conflict(address: impl Into<EntityAddress>, fragment: usize) -> Self {
        GraphError::MergeConflict {
            address: address.into(),
            fragment,
        }
    }

    pub fn corrupted(message: impl Into<String>) -> Self {
        GraphError::Corrupted(message.into())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GraphError>;
