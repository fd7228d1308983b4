//! Loading machine definitions from documents.
//!
//! The loaders here turn YAML or JSON text, files, or already-deserialized
//! values into a [`MachineDoc`], which
//! [`FsmBuilder::document`](crate::FsmBuilder::document) then folds into a
//! machine:
//!
//! ```rust
//! use statebound::{config, FsmBuilder};
//!
//! let doc = config::from_yaml(
//!     "
//!     start_state: closed
//!     states: [closed, opened]
//!     transitions:
//!       - action: open
//!         from_state: closed
//!         to_state: opened
//!     ",
//! )?;
//! let fsm = FsmBuilder::new().document(doc)?.build()?;
//! assert!(fsm.is_state("closed"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod document;
mod error;

use std::fs;
use std::path::Path;

pub use document::{MachineDoc, StateDoc, StateSpec, TransitionDoc};
pub use error::ConfigError;

/// Build a document from already-deserialized data.
///
/// Fails with [`ConfigError::NoData`] if the value is JSON `null`.
pub fn from_value(value: serde_json::Value) -> Result<MachineDoc, ConfigError> {
    if value.is_null() {
        return Err(ConfigError::NoData);
    }
    Ok(serde_json::from_value(value)?)
}

/// Parse a document from JSON text.
///
/// Fails with [`ConfigError::NoData`] on blank input.
pub fn from_json(text: &str) -> Result<MachineDoc, ConfigError> {
    if text.trim().is_empty() {
        return Err(ConfigError::NoData);
    }
    Ok(serde_json::from_str(text)?)
}

/// Parse a document from YAML text.
///
/// Fails with [`ConfigError::NoData`] on blank input.
pub fn from_yaml(text: &str) -> Result<MachineDoc, ConfigError> {
    if text.trim().is_empty() {
        return Err(ConfigError::NoData);
    }
    Ok(serde_yaml::from_str(text)?)
}

/// Read and parse a JSON document file.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<MachineDoc, ConfigError> {
    from_json(&fs::read_to_string(path)?)
}

/// Read and parse a YAML document file.
pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<MachineDoc, ConfigError> {
    from_yaml(&fs::read_to_string(path)?)
}
