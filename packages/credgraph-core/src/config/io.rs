//! Configuration I/O (YAML loading)
//!
//! Defines the YAML schema envelope. Loading and export live on
//! [`GraphConfig`](super::GraphConfig).

use serde::{Deserialize, Serialize};

use super::graph_config::GraphConfig;

/// Schema versions this crate can read
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
///
/// ```yaml
/// version: 1
/// graph:
///   invariant_checks:
///     mode: every
///     interval: 100
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    #[serde(default)]
    pub version: Option<u32>,

    /// Graph store settings
    #[serde(default)]
    pub graph: GraphConfig,
}
