//! The transition engine.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::core::{IntoState, IntoTransition, Model, SharedModel, State, Transition};
use crate::error::FsmError;

/// A bound finite state machine.
///
/// Owns the state registry and the transition table, shares the model it
/// drives, and mediates every state change through [`perform`](Fsm::perform).
/// Instances are created through [`FsmBuilder`](crate::FsmBuilder) and are
/// always bound: the model's recorded state is initialized to the start
/// state when `build()` succeeds.
///
/// The transition table is keyed `from_state` → `action`; registering a
/// transition under an existing `(from_state, action)` pair replaces the
/// previous entry.
///
/// # Example
///
/// ```rust
/// use statebound::{FsmBuilder, Transition};
///
/// let mut fsm = FsmBuilder::new()
///     .named_states(["closed", "opened"])?
///     .transition(Transition::new("open", "closed", "opened")?)
///     .transition(Transition::new("close", "opened", "closed")?)
///     .start_state("closed")
///     .feedback(false)
///     .build()?;
///
/// assert!(fsm.is_state("closed"));
/// fsm.perform("open")?;
/// assert!(fsm.is_state("opened"));
/// # Ok::<(), statebound::FsmError>(())
/// ```
pub struct Fsm<M: Model> {
    states: BTreeMap<String, State>,
    transitions: BTreeMap<String, BTreeMap<String, Transition>>,
    model: SharedModel<M>,
    feedback: bool,
}

impl<M: Model> Fsm<M> {
    pub(crate) fn bound(model: SharedModel<M>, feedback: bool) -> Self {
        Self {
            states: BTreeMap::new(),
            transitions: BTreeMap::new(),
            model,
            feedback,
        }
    }

    /// The model's current recorded state identifier.
    pub fn state(&self) -> String {
        self.model
            .borrow()
            .current_state()
            .unwrap_or_default()
            .to_string()
    }

    /// The [`State`] the model currently occupies.
    ///
    /// Fails with [`FsmError::InvalidState`] if the model reports an
    /// identifier that is not registered — possible only if the model's
    /// state field was written outside the engine.
    pub fn current_state(&self) -> Result<&State, FsmError> {
        let name = self.state();
        self.states.get(&name).ok_or(FsmError::InvalidState(name))
    }

    /// Whether the model's recorded state equals `name`.
    pub fn is_state(&self, name: &str) -> bool {
        self.state() == name
    }

    /// Action identifiers available from the current state.
    pub fn actions(&self) -> Vec<String> {
        self.actions_for(&self.state())
    }

    /// Action identifiers registered for the given state.
    ///
    /// Empty if the state has no outgoing transitions (or is unknown).
    pub fn actions_for(&self, state: &str) -> Vec<String> {
        self.transitions
            .get(state)
            .map(|actions| actions.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Names of all registered states.
    pub fn state_names(&self) -> Vec<String> {
        self.states.keys().cloned().collect()
    }

    /// The shared handle to the bound model.
    pub fn model(&self) -> &SharedModel<M> {
        &self.model
    }

    /// Register a state.
    ///
    /// Accepts a [`State`], a bare name, or a document entry. Registering
    /// a name that already exists replaces the previous `State`.
    pub fn add_state(&mut self, state: impl IntoState) -> Result<(), FsmError> {
        let state = state.into_state()?;
        debug!(state = state.name(), "registered state");
        self.states.insert(state.name().to_string(), state);
        Ok(())
    }

    /// Register a transition, keyed by `(from_state, action)`.
    ///
    /// Accepts a [`Transition`] or structured transition data; the latter
    /// fails with [`FsmError::InvalidData`] if the shape is wrong. Both
    /// endpoints must name registered states ([`FsmError::InvalidState`]
    /// otherwise). A transition under an existing key replaces the previous
    /// one.
    pub fn add_transition(&mut self, transition: impl IntoTransition) -> Result<(), FsmError> {
        let tran = transition.into_transition()?;
        if !self.states.contains_key(tran.from_state()) {
            return Err(FsmError::InvalidState(tran.from_state().to_string()));
        }
        if !self.states.contains_key(tran.to_state()) {
            return Err(FsmError::InvalidState(tran.to_state().to_string()));
        }
        debug!(
            action = tran.action(),
            from = tran.from_state(),
            to = tran.to_state(),
            "registered transition"
        );
        self.transitions
            .entry(tran.from_state().to_string())
            .or_default()
            .insert(tran.action().to_string(), tran);
        Ok(())
    }

    /// Perform an action, triggering the transition it names.
    ///
    /// Lookup failures are atomic: if the current state has no outgoing
    /// transitions ([`FsmError::NoActions`]) or none matches `action`
    /// ([`FsmError::InvalidAction`]), no callback has fired and the
    /// recorded state is unchanged.
    ///
    /// On a match, callbacks fire in order: the transition's `on_before`,
    /// then — only if the target state differs from the current one — the
    /// current state's `on_exit`, the state update, and the new state's
    /// `on_enter`, then the transition's `on_after`. A transition whose
    /// target equals the current state fires no enter/exit callbacks.
    pub fn perform(&mut self, action: &str) -> Result<(), FsmError> {
        let from = self.state();
        let tran = self
            .transitions
            .get(&from)
            .ok_or_else(|| FsmError::NoActions(from.clone()))?
            .get(action)
            .ok_or_else(|| FsmError::InvalidAction {
                action: action.to_string(),
                state: from.clone(),
            })?;

        tran.on_before().call_on(&mut *self.model.borrow_mut());

        let to = tran.to_state().to_string();
        if from != to {
            let leaving = self
                .states
                .get(&from)
                .ok_or_else(|| FsmError::InvalidState(from.clone()))?;
            leaving.on_exit().call_on(&mut *self.model.borrow_mut());

            self.model.borrow_mut().set_current_state(to.clone());

            let entering = self
                .states
                .get(&to)
                .ok_or_else(|| FsmError::InvalidState(to.clone()))?;
            entering.on_enter().call_on(&mut *self.model.borrow_mut());
        }

        tran.on_after().call_on(&mut *self.model.borrow_mut());

        if self.feedback {
            info!(action, %from, %to, "performed action");
        }
        Ok(())
    }

    pub(crate) fn bind_start(&mut self, start_state: &str) -> Result<(), FsmError> {
        if !self.states.contains_key(start_state) {
            return Err(FsmError::InvalidState(start_state.to_string()));
        }
        // Pure initialization: no enter/exit callbacks fire here.
        self.model
            .borrow_mut()
            .set_current_state(start_state.to_string());
        debug!(start_state, "bound model");
        Ok(())
    }
}
