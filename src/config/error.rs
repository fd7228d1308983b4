//! Errors raised while loading machine definitions.

use thiserror::Error;

use crate::error::FsmError;

/// Errors from the document loaders.
///
/// Parse and I/O failures keep their sources; machine-level validation
/// failures pass through as [`FsmError`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no configuration data provided")]
    NoData,

    #[error("failed to parse JSON document")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse YAML document")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read document file")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Fsm(#[from] FsmError),
}
