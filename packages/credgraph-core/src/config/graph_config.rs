//! Graph store settings

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, SUPPORTED_VERSIONS};
use super::validation::Validatable;

/// Upper bound for `InvariantCheckPolicy::Every { interval }`
pub const MAX_CHECK_INTERVAL: u32 = 1_000_000;

/// When the graph re-verifies its internal indexes after a mutation
///
/// Checks are a debugging aid: a failing check means the store itself is
/// broken, so it panics rather than returning an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum InvariantCheckPolicy {
    #[default]
    Never,
    Always,
    /// Check after every `interval`-th committed mutation
    Every { interval: u32 },
}

impl InvariantCheckPolicy {
    /// Whether the mutation with sequence number `modification` triggers a check
    pub fn should_check(&self, modification: u64) -> bool {
        match self {
            InvariantCheckPolicy::Never => false,
            InvariantCheckPolicy::Always => true,
            InvariantCheckPolicy::Every { interval } => {
                *interval != 0 && modification % u64::from(*interval) == 0
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, InvariantCheckPolicy::Never)
    }
}

/// Graph store configuration
///
/// # Examples
///
/// ```rust
/// use credgraph_core::config::{GraphConfig, InvariantCheckPolicy};
///
/// let config = GraphConfig::from_yaml_str(
///     "version: 1\ngraph:\n  invariant_checks:\n    mode: always\n",
/// )
/// .unwrap();
/// assert_eq!(config.invariant_checks, InvariantCheckPolicy::Always);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphConfig {
    #[serde(default)]
    pub invariant_checks: InvariantCheckPolicy,
}

impl GraphConfig {
    /// Config that verifies indexes after every mutation (used by tests)
    pub fn strict() -> Self {
        Self {
            invariant_checks: InvariantCheckPolicy::Always,
        }
    }

    pub fn invariant_checks(mut self, policy: InvariantCheckPolicy) -> Self {
        self.invariant_checks = policy;
        self
    }

    /// Load and validate from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading graph config");
        Self::from_yaml_str(&content)
    }

    /// Parse and validate a YAML document in the v1 schema
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        match export.version {
            None => return Err(ConfigError::MissingVersion),
            Some(found) if !SUPPORTED_VERSIONS.contains(&found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: SUPPORTED_VERSIONS.to_vec(),
                });
            }
            Some(_) => {}
        }

        export.graph.validate()?;
        Ok(export.graph)
    }

    /// Export as a v1 YAML document
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            graph: *self,
        };
        Ok(serde_yaml::to_string(&export)?)
    }
}

impl Validatable for GraphConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let InvariantCheckPolicy::Every { interval } = self.invariant_checks {
            if !(1..=MAX_CHECK_INTERVAL).contains(&interval) {
                return Err(ConfigError::range_with_hint(
                    format!("{}.invariant_checks.interval", self.config_name()),
                    interval,
                    1,
                    MAX_CHECK_INTERVAL,
                    "Use mode 'never' to disable checks",
                ));
            }
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "GraphConfig"
    }
}
