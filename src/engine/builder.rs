//! Builder for constructing and binding state machines.

use crate::config::MachineDoc;
use crate::core::{share, Model, SharedModel, State, StateCell, Transition};
use crate::engine::machine::Fsm;
use crate::error::FsmError;

/// Fluent builder for [`Fsm`].
///
/// The builder is the machine's unbound phase: states, transitions, the
/// start state, and an optional model are collected here, and `build()`
/// performs the one-time bind. Without an explicit model the machine binds
/// a fresh [`StateCell`] and runs standalone.
///
/// # Example
///
/// ```rust
/// use statebound::{FsmBuilder, Transition};
///
/// let fsm = FsmBuilder::new()
///     .named_states(["green", "yellow", "red"])?
///     .transition(Transition::new("caution", "green", "yellow")?)
///     .transition(Transition::new("stop", "yellow", "red")?)
///     .transition(Transition::new("go", "red", "green")?)
///     .start_state("green")
///     .build()?;
///
/// assert_eq!(fsm.actions(), ["caution"]);
/// # Ok::<(), statebound::FsmError>(())
/// ```
#[derive(Debug)]
pub struct FsmBuilder<M: Model = StateCell> {
    model: SharedModel<M>,
    states: Vec<State>,
    transitions: Vec<Transition>,
    start_state: Option<String>,
    feedback: bool,
}

impl FsmBuilder<StateCell> {
    /// Start a builder bound to a fresh standalone [`StateCell`] model.
    pub fn new() -> Self {
        Self {
            model: share(StateCell::new()),
            states: Vec::new(),
            transitions: Vec::new(),
            start_state: None,
            feedback: true,
        }
    }
}

impl Default for FsmBuilder<StateCell> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Model> FsmBuilder<M> {
    /// Bind an external model instead of the standalone default.
    pub fn model<M2: Model>(self, model: SharedModel<M2>) -> FsmBuilder<M2> {
        FsmBuilder {
            model,
            states: self.states,
            transitions: self.transitions,
            start_state: self.start_state,
            feedback: self.feedback,
        }
    }

    /// Add a state.
    pub fn state(mut self, state: State) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states.
    pub fn states(mut self, states: impl IntoIterator<Item = State>) -> Self {
        self.states.extend(states);
        self
    }

    /// Add bare states by name (the string shorthand).
    pub fn named_states<I, S>(mut self, names: I) -> Result<Self, FsmError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.states.push(State::new(name)?);
        }
        Ok(self)
    }

    /// Add a transition.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Ingest a configuration document: its states, transitions, and start
    /// state.
    ///
    /// Fails with [`FsmError::InvalidData`] if the document declares no
    /// states or no transitions, and with the entry's own error if a state
    /// or transition entry is malformed.
    pub fn document(mut self, doc: MachineDoc) -> Result<Self, FsmError> {
        if doc.states.is_empty() {
            return Err(FsmError::InvalidData(
                "states must contain at least one entry".to_string(),
            ));
        }
        if doc.transitions.is_empty() {
            return Err(FsmError::InvalidData(
                "transitions must contain at least one entry".to_string(),
            ));
        }
        for state in doc.states {
            self.states.push(State::try_from(state)?);
        }
        for tran in doc.transitions {
            self.transitions.push(Transition::try_from(tran)?);
        }
        self.start_state = Some(doc.start_state);
        Ok(self)
    }

    /// Set the start state (required).
    pub fn start_state(mut self, name: impl Into<String>) -> Self {
        self.start_state = Some(name.into());
        self
    }

    /// Enable or disable the per-transition feedback notice (default on).
    pub fn feedback(mut self, enabled: bool) -> Self {
        self.feedback = enabled;
        self
    }

    /// Build the machine and bind the model.
    ///
    /// Registers states, then transitions (validating that every endpoint
    /// names a registered state), then initializes the model's recorded
    /// state to the start state without firing any callback. Fails with
    /// [`FsmError::NoStartState`] if no start state was supplied and
    /// [`FsmError::InvalidState`] if it is not among the states.
    pub fn build(self) -> Result<Fsm<M>, FsmError> {
        let start_state = self.start_state.ok_or(FsmError::NoStartState)?;
        let mut fsm = Fsm::bound(self.model, self.feedback);
        for state in self.states {
            fsm.add_state(state)?;
        }
        for tran in self.transitions {
            fsm.add_transition(tran)?;
        }
        fsm.bind_start(&start_state)?;
        Ok(fsm)
    }
}
