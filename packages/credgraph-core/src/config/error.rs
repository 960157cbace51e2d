//! Errors raised while loading or validating a graph config

use thiserror::Error;

/// Why a graph config was refused
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric setting is outside its accepted range
    #[error("graph config: {field} = {value} is outside {min}..={max} ({hint})")]
    Range {
        field: String,
        value: String,
        min: String,
        max: String,
        hint: String,
    },

    #[error("graph config: no 'version' key, start the document with 'version: 1'")]
    MissingVersion,

    #[error("graph config: schema version {found} is unknown (readable: {})", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    #[error("graph config: cannot read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("graph config: malformed YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// `Range` error; `hint` tells the user how to get back in range
    pub fn range_with_hint(
        field: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
        hint: impl Into<String>,
    ) -> Self {
        Self::Range {
            field: field.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
            hint: hint.into(),
        }
    }
}
