//! Named machine states with enter/exit callback sets.

use serde::Serialize;

use crate::core::callback::{CallbackNames, CallbackSet};
use crate::error::FsmError;

/// A named state of a machine.
///
/// The name is the state's identity and is immutable once constructed;
/// exactly one `State` is registered per distinct name within an engine.
/// The enter/exit callback sets remain extensible in place.
///
/// # Example
///
/// ```rust
/// use statebound::State;
///
/// let state = State::new("opened")?
///     .with_on_enter("on_open")?
///     .with_on_exit(["on_close", "log_change"])?;
/// assert_eq!(state.name(), "opened");
/// assert_eq!(state.on_enter().names(), ["on_open"]);
/// # Ok::<(), statebound::FsmError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct State {
    name: String,
    on_enter: CallbackSet,
    on_exit: CallbackSet,
}

impl State {
    /// Create a state with the given name and empty callback sets.
    ///
    /// Fails with [`FsmError::MissingName`] if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, FsmError> {
        let name = name.into();
        if name.is_empty() {
            return Err(FsmError::MissingName);
        }
        Ok(Self {
            name,
            on_enter: CallbackSet::new(),
            on_exit: CallbackSet::new(),
        })
    }

    /// Append callbacks fired after this state is entered.
    pub fn with_on_enter(mut self, names: impl Into<CallbackNames>) -> Result<Self, FsmError> {
        self.on_enter.add(names)?;
        Ok(self)
    }

    /// Append callbacks fired before this state is exited.
    pub fn with_on_exit(mut self, names: impl Into<CallbackNames>) -> Result<Self, FsmError> {
        self.on_exit.add(names)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn on_enter(&self) -> &CallbackSet {
        &self.on_enter
    }

    pub fn on_exit(&self) -> &CallbackSet {
        &self.on_exit
    }

    /// Mutable access to the enter callbacks for in-place extension.
    pub fn on_enter_mut(&mut self) -> &mut CallbackSet {
        &mut self.on_enter
    }

    /// Mutable access to the exit callbacks for in-place extension.
    pub fn on_exit_mut(&mut self) -> &mut CallbackSet {
        &mut self.on_exit
    }
}

/// Values accepted where a state is expected.
///
/// Engines take either a constructed [`State`] or a bare name (the string
/// shorthand for a state with no callbacks). Configuration documents plug
/// in through their own implementation.
pub trait IntoState {
    fn into_state(self) -> Result<State, FsmError>;
}

impl IntoState for State {
    fn into_state(self) -> Result<State, FsmError> {
        Ok(self)
    }
}

impl IntoState for &str {
    fn into_state(self) -> Result<State, FsmError> {
        State::new(self)
    }
}

impl IntoState for String {
    fn into_state(self) -> Result<State, FsmError> {
        State::new(self)
    }
}
