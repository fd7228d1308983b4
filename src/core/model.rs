//! The model capability: state holding and named callback dispatch.
//!
//! A machine is always bound to a model. The model records the current
//! state identifier and supplies the handlers that lifecycle callbacks
//! resolve against by name. The engine is the sole writer of the recorded
//! state once bound.

use std::cell::RefCell;
use std::rc::Rc;

/// Capability an entity must provide to be driven by a state machine.
///
/// Two obligations: hold the current state identifier, and dispatch named
/// zero-argument callbacks. Handler dispatch is optional — the default
/// implementation recognizes no names, so every callback is skipped.
///
/// The [`model_binding!`](crate::model_binding) macro generates an
/// implementation from a state field and a list of handler methods.
///
/// # Example
///
/// ```rust
/// use statebound::Model;
///
/// #[derive(Default)]
/// struct Door {
///     state: Option<String>,
///     open_count: u32,
/// }
///
/// impl Model for Door {
///     fn current_state(&self) -> Option<&str> {
///         self.state.as_deref()
///     }
///
///     fn set_current_state(&mut self, name: String) {
///         self.state = Some(name);
///     }
///
///     fn handle_callback(&mut self, name: &str) -> bool {
///         match name {
///             "on_open" => {
///                 self.open_count += 1;
///                 true
///             }
///             _ => false,
///         }
///     }
/// }
/// ```
pub trait Model {
    /// The recorded state identifier, or `None` before binding.
    fn current_state(&self) -> Option<&str>;

    /// Record a new state identifier.
    ///
    /// Called by the engine when binding and when a transition commits.
    /// Callers and handlers must not invoke this directly; the engine is
    /// the single controlled pathway for state changes.
    fn set_current_state(&mut self, name: String);

    /// Dispatch a named zero-argument callback.
    ///
    /// Returns `true` if a handler matched the name. A `false` return is
    /// not an error — unmatched callbacks are skipped.
    fn handle_callback(&mut self, name: &str) -> bool {
        let _ = name;
        false
    }
}

/// A model shared between the engine and the caller.
///
/// The engine does not own the model's lifetime; both sides hold a handle.
/// The engine provides no internal synchronization, so the handle is
/// single-threaded by construction.
pub type SharedModel<M> = Rc<RefCell<M>>;

/// Wrap a model for sharing with a state machine.
pub fn share<M: Model>(model: M) -> SharedModel<M> {
    Rc::new(RefCell::new(model))
}

/// Minimal model holding nothing but the recorded state.
///
/// This is the engine's standalone mode: a builder that is not given a
/// model binds a fresh `StateCell`, so the machine can be driven and
/// queried without any external entity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateCell {
    state: Option<String>,
}

impl StateCell {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for StateCell {
    fn current_state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    fn set_current_state(&mut self, name: String) {
        self.state = Some(name);
    }
}
