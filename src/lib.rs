//! Statebound: a declarative finite state machine engine with model binding
//!
//! A machine is defined by named states, action-triggered transitions
//! between them, and optional lifecycle callbacks. The engine binds a
//! "model" — any entity implementing the [`Model`] capability — and from
//! then on mediates every state change through a single controlled
//! pathway, [`Fsm::perform`].
//!
//! # Core Concepts
//!
//! - **State**: a named machine state with `on_enter`/`on_exit` callbacks
//! - **Transition**: an action edge between states with
//!   `on_before`/`on_after` callbacks
//! - **Model**: the bound entity holding the current state and supplying
//!   callback handlers by name; unknown names are skipped, not errors
//! - **Documents**: machines can be declared in YAML or JSON and loaded
//!   through the [`config`] module
//!
//! # Example
//!
//! ```rust
//! use statebound::{share, FsmBuilder, Model, Transition};
//!
//! #[derive(Default)]
//! struct Door {
//!     state: Option<String>,
//!     opened_times: u32,
//! }
//!
//! impl Model for Door {
//!     fn current_state(&self) -> Option<&str> {
//!         self.state.as_deref()
//!     }
//!
//!     fn set_current_state(&mut self, name: String) {
//!         self.state = Some(name);
//!     }
//!
//!     fn handle_callback(&mut self, name: &str) -> bool {
//!         match name {
//!             "on_open" => {
//!                 self.opened_times += 1;
//!                 true
//!             }
//!             _ => false,
//!         }
//!     }
//! }
//!
//! # fn main() -> Result<(), statebound::FsmError> {
//! let door = share(Door::default());
//! let mut fsm = FsmBuilder::new()
//!     .model(door.clone())
//!     .named_states(["closed", "opened"])?
//!     .transition(Transition::new("open", "closed", "opened")?.with_on_after("on_open")?)
//!     .transition(Transition::new("close", "opened", "closed")?)
//!     .start_state("closed")
//!     .feedback(false)
//!     .build()?;
//!
//! assert!(fsm.is_state("closed"));
//! fsm.perform("open")?;
//! assert!(fsm.is_state("opened"));
//! assert_eq!(door.borrow().opened_times, 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use config::{ConfigError, MachineDoc, StateDoc, StateSpec, TransitionDoc};
pub use core::{
    share, CallbackNames, CallbackSet, IntoState, IntoTransition, Model, SharedModel, State,
    StateCell, Transition,
};
pub use engine::{Fsm, FsmBuilder};
pub use error::FsmError;
