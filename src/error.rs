//! Errors raised by the state machine engine.

use thiserror::Error;

/// Errors that can occur while constructing or driving a state machine.
///
/// All variants are raised synchronously at the point of detection and are
/// never retried internally: they signal configuration or caller mistakes,
/// not transient faults. An operation that fails with one of these has not
/// fired any callback and has not changed the recorded state.
#[derive(Debug, Error)]
pub enum FsmError {
    #[error("no start state provided")]
    NoStartState,

    #[error("invalid state '{0}', not among registered states")]
    InvalidState(String),

    #[error("state requires a non-empty name")]
    MissingName,

    #[error("transition is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("invalid configuration data: {0}")]
    InvalidData(String),

    #[error("no actions found for current state '{0}'")]
    NoActions(String),

    #[error("cannot perform action '{action}' in state '{state}'")]
    InvalidAction { action: String, state: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offender() {
        let err = FsmError::InvalidAction {
            action: "open".to_string(),
            state: "opened".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot perform action 'open' in state 'opened'"
        );

        let err = FsmError::NoActions("closed".to_string());
        assert_eq!(err.to_string(), "no actions found for current state 'closed'");

        let err = FsmError::MissingField("to_state");
        assert_eq!(
            err.to_string(),
            "transition is missing required field 'to_state'"
        );
    }
}
