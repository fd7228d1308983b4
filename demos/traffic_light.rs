//! Traffic Light State Machine
//!
//! A standalone cyclic machine: no external model, the engine holds the
//! state itself.
//!
//! Run with: cargo run --example traffic_light

use statebound::{FsmBuilder, Transition};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut fsm = FsmBuilder::new()
        .named_states(["green", "yellow", "red"])?
        .transition(Transition::new("caution", "green", "yellow")?)
        .transition(Transition::new("stop", "yellow", "red")?)
        .transition(Transition::new("go", "red", "green")?)
        .start_state("green")
        .build()?;

    println!("Initial state: {}", fsm.state());
    println!("Available actions: {:?}", fsm.actions());

    // Two full cycles: green -> yellow -> red -> green -> ...
    for action in ["caution", "stop", "go", "caution", "stop", "go"] {
        fsm.perform(action)?;
        println!("{action:>8} -> {}", fsm.state());
    }

    assert!(fsm.is_state("green"));
    println!("Back to green after a full cycle.");
    Ok(())
}
