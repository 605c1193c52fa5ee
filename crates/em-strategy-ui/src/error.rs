//! Error types for site configuration loading.

use thiserror::Error;

/// Failure while reading the embedded site configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Document was not valid JSON or did not match the expected shape.
    #[error("site configuration could not be parsed")]
    Parse {
        /// Decoder error detail.
        #[source]
        source: serde_json::Error,
    },
    /// Field contained an unusable value.
    #[error("invalid value for '{field}': {reason}")]
    InvalidField {
        /// Dotted path of the offending field.
        field: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

impl From<serde_json::Error> for ConfigError {
    fn from(source: serde_json::Error) -> Self {
        Self::Parse { source }
    }
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
