//! Action-triggered transitions between named states.

use serde::Serialize;

use crate::core::callback::{CallbackNames, CallbackSet};
use crate::error::FsmError;

/// An action edge from one state to another.
///
/// The `(from_state, action)` pair is the transition's identity within an
/// engine's table. `to_state` may equal `from_state`: a self-loop models an
/// action performed without leaving the state, and fires only the
/// before/after callbacks, never enter/exit.
///
/// # Example
///
/// ```rust
/// use statebound::Transition;
///
/// let tran = Transition::new("open", "closed", "opened")?
///     .with_on_before("check_lock")?;
/// assert_eq!(tran.action(), "open");
/// assert_eq!(tran.from_state(), "closed");
/// assert_eq!(tran.to_state(), "opened");
/// # Ok::<(), statebound::FsmError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Transition {
    action: String,
    from_state: String,
    to_state: String,
    on_before: CallbackSet,
    on_after: CallbackSet,
}

impl Transition {
    /// Create a transition for `action` from `from_state` to `to_state`.
    ///
    /// All three identifiers are required; an empty one fails with
    /// [`FsmError::MissingField`] naming the offending field.
    pub fn new(
        action: impl Into<String>,
        from_state: impl Into<String>,
        to_state: impl Into<String>,
    ) -> Result<Self, FsmError> {
        let action = action.into();
        let from_state = from_state.into();
        let to_state = to_state.into();
        if action.is_empty() {
            return Err(FsmError::MissingField("action"));
        }
        if from_state.is_empty() {
            return Err(FsmError::MissingField("from_state"));
        }
        if to_state.is_empty() {
            return Err(FsmError::MissingField("to_state"));
        }
        Ok(Self {
            action,
            from_state,
            to_state,
            on_before: CallbackSet::new(),
            on_after: CallbackSet::new(),
        })
    }

    /// Append callbacks fired before the state change.
    pub fn with_on_before(mut self, names: impl Into<CallbackNames>) -> Result<Self, FsmError> {
        self.on_before.add(names)?;
        Ok(self)
    }

    /// Append callbacks fired after the state change.
    pub fn with_on_after(mut self, names: impl Into<CallbackNames>) -> Result<Self, FsmError> {
        self.on_after.add(names)?;
        Ok(self)
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn from_state(&self) -> &str {
        &self.from_state
    }

    pub fn to_state(&self) -> &str {
        &self.to_state
    }

    pub fn on_before(&self) -> &CallbackSet {
        &self.on_before
    }

    pub fn on_after(&self) -> &CallbackSet {
        &self.on_after
    }

    /// Mutable access to the before callbacks for in-place extension.
    pub fn on_before_mut(&mut self) -> &mut CallbackSet {
        &mut self.on_before
    }

    /// Mutable access to the after callbacks for in-place extension.
    pub fn on_after_mut(&mut self) -> &mut CallbackSet {
        &mut self.on_after
    }

    /// Whether this transition stays in its source state.
    pub fn is_self_loop(&self) -> bool {
        self.from_state == self.to_state
    }
}

/// Values accepted where a transition is expected.
///
/// Engines take a constructed [`Transition`] or structured transition data
/// (a document entry or raw deserialized value); the latter is
/// shape-validated on conversion.
pub trait IntoTransition {
    fn into_transition(self) -> Result<Transition, FsmError>;
}

impl IntoTransition for Transition {
    fn into_transition(self) -> Result<Transition, FsmError> {
        Ok(self)
    }
}
