//! Ordered sets of named lifecycle callbacks.
//!
//! Callbacks are referenced by name and resolved against the bound model at
//! call time. A name with no matching handler on the model is skipped:
//! callbacks are optional hooks, not required contracts.

use serde::{Deserialize, Serialize};

use crate::core::model::Model;
use crate::error::FsmError;

/// One callback name or a sequence of callback names.
///
/// Configuration documents and builder APIs accept either form; both
/// normalize to a list. In a document this corresponds to
/// `on_enter: my_hook` versus `on_enter: [hook_a, hook_b]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallbackNames {
    /// A single callback name.
    One(String),
    /// A list of callback names, invoked in order.
    Many(Vec<String>),
}

impl CallbackNames {
    /// Normalize to a list of names.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(name) => vec![name],
            Self::Many(names) => names,
        }
    }
}

impl From<&str> for CallbackNames {
    fn from(name: &str) -> Self {
        Self::One(name.to_string())
    }
}

impl From<String> for CallbackNames {
    fn from(name: String) -> Self {
        Self::One(name)
    }
}

impl From<Vec<String>> for CallbackNames {
    fn from(names: Vec<String>) -> Self {
        Self::Many(names)
    }
}

impl From<Vec<&str>> for CallbackNames {
    fn from(names: Vec<&str>) -> Self {
        Self::Many(names.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for CallbackNames {
    fn from(names: [&str; N]) -> Self {
        Self::Many(names.into_iter().map(str::to_string).collect())
    }
}

/// An ordered, append-only list of callback names.
///
/// Names are kept in insertion order and are not deduplicated: a name added
/// twice fires twice. Every entry must be a non-empty identifier.
///
/// # Example
///
/// ```rust
/// use statebound::CallbackSet;
///
/// let mut set = CallbackSet::new();
/// set.add("on_open")?;
/// set.add(["notify", "log_change"])?;
/// assert_eq!(set.names(), ["on_open", "notify", "log_change"]);
/// # Ok::<(), statebound::FsmError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CallbackSet {
    names: Vec<String>,
}

impl CallbackSet {
    /// Create an empty callback set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from one name or a sequence of names.
    pub fn from_names(names: impl Into<CallbackNames>) -> Result<Self, FsmError> {
        let mut set = Self::new();
        set.add(names)?;
        Ok(set)
    }

    /// Append one name or a sequence of names, preserving order.
    ///
    /// Fails with [`FsmError::MissingName`] if any name is empty; on failure
    /// the set is left unmodified.
    pub fn add(&mut self, names: impl Into<CallbackNames>) -> Result<(), FsmError> {
        let names = names.into().into_vec();
        if names.iter().any(String::is_empty) {
            return Err(FsmError::MissingName);
        }
        self.names.extend(names);
        Ok(())
    }

    /// The callback names in invocation order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Invoke each named callback on the target, in order.
    ///
    /// Dispatch is soft-bound through [`Model::handle_callback`]: names the
    /// target does not recognize are skipped silently. Invocation is
    /// synchronous and return values are ignored.
    pub fn call_on<M: Model>(&self, target: &mut M) {
        for name in &self.names {
            target.handle_callback(name);
        }
    }
}
