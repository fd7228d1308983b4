//! Serde document shapes for declarative machine definitions.

use serde::{Deserialize, Serialize};

use crate::core::{CallbackNames, IntoState, IntoTransition, State, Transition};
use crate::error::FsmError;

/// A complete machine definition as found in a YAML or JSON document.
///
/// ```yaml
/// start_state: closed
/// states:
///   - closed
///   - name: opened
///     on_enter: on_open
/// transitions:
///   - action: open
///     from_state: closed
///     to_state: opened
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineDoc {
    pub start_state: String,
    pub states: Vec<StateDoc>,
    pub transitions: Vec<TransitionDoc>,
}

/// A state entry: either a bare name or a full spec with callbacks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateDoc {
    Name(String),
    Spec(StateSpec),
}

/// The long form of a state entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_enter: Option<CallbackNames>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_exit: Option<CallbackNames>,
}

/// A transition entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionDoc {
    pub action: String,
    pub from_state: String,
    pub to_state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_before: Option<CallbackNames>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_after: Option<CallbackNames>,
}

impl TryFrom<StateDoc> for State {
    type Error = FsmError;

    fn try_from(doc: StateDoc) -> Result<Self, Self::Error> {
        match doc {
            StateDoc::Name(name) => State::new(name),
            StateDoc::Spec(spec) => {
                let mut state = State::new(spec.name)?;
                if let Some(names) = spec.on_enter {
                    state.on_enter_mut().add(names)?;
                }
                if let Some(names) = spec.on_exit {
                    state.on_exit_mut().add(names)?;
                }
                Ok(state)
            }
        }
    }
}

impl TryFrom<TransitionDoc> for Transition {
    type Error = FsmError;

    fn try_from(doc: TransitionDoc) -> Result<Self, Self::Error> {
        let mut tran = Transition::new(doc.action, doc.from_state, doc.to_state)?;
        if let Some(names) = doc.on_before {
            tran.on_before_mut().add(names)?;
        }
        if let Some(names) = doc.on_after {
            tran.on_after_mut().add(names)?;
        }
        Ok(tran)
    }
}

impl IntoState for StateDoc {
    fn into_state(self) -> Result<State, FsmError> {
        State::try_from(self)
    }
}

impl IntoTransition for TransitionDoc {
    fn into_transition(self) -> Result<Transition, FsmError> {
        Transition::try_from(self)
    }
}

/// Raw deserialized data is accepted wherever structured transition data
/// is; a wrong shape fails with [`FsmError::InvalidData`].
impl IntoTransition for serde_json::Value {
    fn into_transition(self) -> Result<Transition, FsmError> {
        let doc: TransitionDoc = serde_json::from_value(self)
            .map_err(|err| FsmError::InvalidData(err.to_string()))?;
        doc.into_transition()
    }
}

/// Raw deserialized data accepted wherever a state is.
impl IntoState for serde_json::Value {
    fn into_state(self) -> Result<State, FsmError> {
        let doc: StateDoc =
            serde_json::from_value(self).map_err(|err| FsmError::InvalidData(err.to_string()))?;
        doc.into_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_name_entry_becomes_a_bare_state() {
        let state = State::try_from(StateDoc::Name("s1".to_string())).unwrap();
        assert_eq!(state.name(), "s1");
        assert!(state.on_enter().is_empty());
    }

    #[test]
    fn spec_entry_carries_callbacks() {
        let doc: StateDoc = serde_json::from_value(json!({
            "name": "s2",
            "on_enter": "on_callback",
            "on_exit": ["cb1", "cb2"],
        }))
        .unwrap();
        let state = State::try_from(doc).unwrap();
        assert_eq!(state.on_enter().names(), ["on_callback"]);
        assert_eq!(state.on_exit().names(), ["cb1", "cb2"]);
    }

    #[test]
    fn transition_entry_requires_all_identifiers() {
        let result: Result<TransitionDoc, _> =
            serde_json::from_value(json!({ "action": "a1", "from_state": "s1" }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<TransitionDoc, _> = serde_json::from_value(json!({
            "action": "a1",
            "from_state": "s1",
            "to_state": "s2",
            "unexpected": true,
        }));
        assert!(result.is_err());
    }

    #[test]
    fn value_converts_to_transition_when_shaped_right() {
        let tran = json!({
            "action": "a1",
            "from_state": "s1",
            "to_state": "s2",
            "on_before": "cb1",
        })
        .into_transition()
        .unwrap();
        assert_eq!(tran.action(), "a1");
        assert_eq!(tran.on_before().names(), ["cb1"]);
    }

    #[test]
    fn misshapen_value_fails_with_invalid_data() {
        let err = json!({ "action": "a1" }).into_transition().unwrap_err();
        assert!(matches!(err, FsmError::InvalidData(_)));

        let err = json!(42).into_state().unwrap_err();
        assert!(matches!(err, FsmError::InvalidData(_)));
    }

    #[test]
    fn empty_identifiers_surface_the_core_errors() {
        let err = json!({ "action": "a1", "from_state": "s1", "to_state": "" })
            .into_transition()
            .unwrap_err();
        assert!(matches!(err, FsmError::MissingField("to_state")));
    }
}
