//! The transition engine and its builder.
//!
//! An [`Fsm`] mediates every state change of its bound model through
//! [`Fsm::perform`]; construction and the one-time model bind happen in
//! [`FsmBuilder`].

mod builder;
mod machine;

pub use builder::FsmBuilder;
pub use machine::Fsm;
