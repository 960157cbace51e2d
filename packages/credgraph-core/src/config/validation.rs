//! Post-parse checks that serde cannot express

use super::error::ConfigResult;

/// A config section with cross-field or range rules
///
/// # Example
/// ```rust
/// use credgraph_core::config::{GraphConfig, Validatable};
///
/// let config = GraphConfig::default();
/// assert!(config.validate().is_ok());
/// ```
pub trait Validatable {
    /// Check the rules, reporting the first violated one
    fn validate(&self) -> ConfigResult<()>;

    /// Prefix for field paths in errors, e.g. `GraphConfig`
    fn config_name(&self) -> &'static str;
}
