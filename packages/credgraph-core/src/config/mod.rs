//! Configuration system
//!
//! A small, versioned YAML configuration for the graph store:
//!
//! ```yaml
//! version: 1
//! graph:
//!   invariant_checks:
//!     mode: every      # never | always | every
//!     interval: 100
//! ```
//!
//! Everything has a default, so `GraphConfig::default()` is what most
//! callers want.

pub mod error;
pub mod graph_config;
pub mod io;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use graph_config::{GraphConfig, InvariantCheckPolicy, MAX_CHECK_INTERVAL};
pub use io::{ConfigExportV1, SUPPORTED_VERSIONS};
pub use validation::Validatable;
