//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - One event driving every transition
//! - Entry hooks updating a shared context
//!
//! Run with: cargo run --example traffic_light

use switchyard::{fsm_enum, StateMachine};

fsm_enum! {
    enum TrafficLight {
        Red,
        Green,
        Yellow,
    }
}

fsm_enum! {
    enum Tick {
        Timer,
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let mut builder = StateMachine::create_with("traffic-light", 0u32);
    for light in TrafficLight::ALL {
        builder = builder
            .state(*light)
            .on_entry(|firing, cycles: &mut u32| {
                if *firing.to == TrafficLight::Red {
                    *cycles += 1;
                }
                Ok(())
            })
            .then();
    }

    let mut machine = builder
        .initial(TrafficLight::Red)
        .from(TrafficLight::Red)
        .on_event(Tick::Timer)
        .go_to(TrafficLight::Green)
        .then()
        .from(TrafficLight::Green)
        .on_event(Tick::Timer)
        .go_to(TrafficLight::Yellow)
        .then()
        .from(TrafficLight::Yellow)
        .on_event(Tick::Timer)
        .go_to(TrafficLight::Red)
        .build()
        .expect("traffic light definition is complete");

    println!("Initial state: {}\n", machine.current().name());

    println!("Transition sequence:");
    for _ in 0..6 {
        let from = *machine.current();
        machine
            .trigger(Tick::Timer)
            .expect("traffic light hooks never fail");
        println!("  {:<6} -> {}", from.name(), machine.current().name());
    }

    println!("\nCompleted cycles: {}", machine.context());
    println!("\n=== Example Complete ===");
}
