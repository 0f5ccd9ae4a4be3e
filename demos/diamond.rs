//! Guarded Diamond
//!
//! Four states wired as a diamond, every transition gated by one shared
//! switch. Dispatch is traced with `tracing`; set `RUST_LOG=debug` to see
//! held and applied transitions.
//!
//! Run with: RUST_LOG=debug cargo run --example diamond

use std::cell::Cell;
use std::rc::Rc;
use switchyard::{fsm_enum, Firing, HookError, StateMachine};
use tracing::info;
use tracing_subscriber::EnvFilter;

fsm_enum! {
    enum Node {
        A,
        B,
        C,
        D,
    }
}

fsm_enum! {
    enum Edge {
        A1,
        A2,
        B1,
        B2,
        C1,
    }
}

fn announce(
    phase: &'static str,
) -> impl Fn(&Firing<'_, Node, Edge>, &mut Rc<Cell<bool>>) -> Result<(), HookError> {
    move |firing: &Firing<'_, Node, Edge>, _: &mut Rc<Cell<bool>>| {
        info!(
            phase,
            from = firing.from.name(),
            to = firing.to.name(),
            event = firing.event.name(),
            "hook"
        );
        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let switch = Rc::new(Cell::new(false));
    let open = |s: &Rc<Cell<bool>>| s.get();

    let mut builder = StateMachine::create_with("diamond", Rc::clone(&switch));
    for node in Node::ALL {
        builder = builder
            .state(*node)
            .on_entry(announce("entry"))
            .on_exit(announce("exit"))
            .then();
    }

    let mut machine = builder
        .initial(Node::A)
        .from(Node::A).on_event(Edge::A1).when(open).go_to(Node::B).on_transition(announce("transition"))
        .then()
        .from(Node::A).on_event(Edge::A2).when(open).go_to(Node::C).on_transition(announce("transition"))
        .then()
        .from(Node::B).on_event(Edge::B1).when(open).go_to(Node::C).on_transition(announce("transition"))
        .and()
        .from(Node::A).on_event(Edge::B2).when(open).go_to(Node::D).on_transition(announce("transition"))
        .then()
        .from(Node::C).on_event(Edge::C1).when(open).go_to(Node::D).on_transition(announce("transition"))
        .build()
        .expect("diamond definition is complete");

    println!("=== Guarded Diamond ===\n");
    println!("Start: {}", machine.current().name());

    machine.trigger(Edge::A1).expect("hooks never fail");
    println!("A1 with switch closed: {}", machine.current().name());

    switch.set(true);
    for edge in [Edge::A1, Edge::B1, Edge::C1] {
        machine.trigger(edge).expect("hooks never fail");
        println!("{} with switch open: {}", edge.name(), machine.current().name());
    }

    let path: Vec<&str> = machine.history().get_path().into_iter().map(Node::name).collect();
    println!("\nPath: {}", path.join(" -> "));
    println!("\n=== Example Complete ===");
}
