//! Property-based tests for machine dispatch.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated event sequences and guard settings.

use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use switchyard::{fsm_enum, StateMachine};

fsm_enum! {
    enum Stage {
        Idle,
        Loading,
        Ready,
        Failed,
    }
}

fsm_enum! {
    enum Input {
        Load,
        Succeed,
        Fail,
        Reset,
        Ping,
    }
}

/// Guard switches, one per transition, plus a count of hook invocations.
#[derive(Clone, Default)]
struct Switches {
    open: Rc<[Cell<bool>; 4]>,
    hooks: Rc<Cell<usize>>,
}

fn machine(switches: Switches) -> StateMachine<Stage, Switches, Input> {
    StateMachine::create_with("loader", switches)
        .initial(Stage::Idle)
        .on_exit(count_hook)
        .state(Stage::Loading)
        .on_entry(count_hook)
        .on_exit(count_hook)
        .from(Stage::Idle)
        .on_event(Input::Load)
        .when(|s: &Switches| s.open[0].get())
        .go_to(Stage::Loading)
        .then()
        .from(Stage::Loading)
        .on_event(Input::Succeed)
        .when(|s: &Switches| s.open[1].get())
        .go_to(Stage::Ready)
        .then()
        .from(Stage::Loading)
        .on_event(Input::Fail)
        .when(|s: &Switches| s.open[2].get())
        .go_to(Stage::Failed)
        .then()
        .from(Stage::Failed)
        .on_event(Input::Reset)
        .when(|s: &Switches| s.open[3].get())
        .go_to(Stage::Idle)
        .build()
        .unwrap()
}

fn count_hook(
    _: &switchyard::Firing<'_, Stage, Input>,
    s: &mut Switches,
) -> Result<(), switchyard::HookError> {
    s.hooks.set(s.hooks.get() + 1);
    Ok(())
}

fn switches(open: [bool; 4]) -> Switches {
    Switches {
        open: Rc::new(open.map(Cell::new)),
        hooks: Rc::new(Cell::new(0)),
    }
}

prop_compose! {
    fn arbitrary_input()(variant in 0..Input::ALL.len()) -> Input {
        Input::ALL[variant]
    }
}

proptest! {
    #[test]
    fn identical_builds_behave_identically(
        open in prop::array::uniform4(any::<bool>()),
        events in prop::collection::vec(arbitrary_input(), 0..20)
    ) {
        let mut first = machine(switches(open));
        let mut second = machine(switches(open));

        for event in events {
            first.trigger(event).unwrap();
            second.trigger(event).unwrap();
            prop_assert_eq!(first.current(), second.current());
        }
        prop_assert_eq!(first.history().get_path(), second.history().get_path());
    }

    #[test]
    fn current_is_stable_without_dispatch(
        events in prop::collection::vec(arbitrary_input(), 0..10)
    ) {
        let mut m = machine(switches([true; 4]));
        for event in events {
            m.trigger(event).unwrap();
        }

        let seen = *m.current();
        prop_assert_eq!(*m.current(), seen);
        prop_assert_eq!(*m.current(), seen);
    }

    #[test]
    fn ping_is_always_a_noop(
        open in prop::array::uniform4(any::<bool>()),
        events in prop::collection::vec(arbitrary_input(), 0..10)
    ) {
        let s = switches(open);
        let mut m = machine(s.clone());
        for event in events {
            m.trigger(event).unwrap();
        }

        let before = *m.current();
        let hooks_before = s.hooks.get();
        let moves_before = m.history().len();

        m.trigger(Input::Ping).unwrap();

        prop_assert_eq!(*m.current(), before);
        prop_assert_eq!(s.hooks.get(), hooks_before);
        prop_assert_eq!(m.history().len(), moves_before);
    }

    #[test]
    fn closed_guards_never_move(
        events in prop::collection::vec(arbitrary_input(), 0..20)
    ) {
        let s = switches([false; 4]);
        let mut m = machine(s.clone());
        for event in events {
            m.trigger(event).unwrap();
        }

        prop_assert_eq!(*m.current(), Stage::Idle);
        prop_assert_eq!(s.hooks.get(), 0);
        prop_assert!(m.history().is_empty());
    }

    #[test]
    fn every_move_is_recorded_with_its_event(
        events in prop::collection::vec(arbitrary_input(), 0..20)
    ) {
        let mut m = machine(switches([true; 4]));
        let mut moves = 0;
        for event in events {
            let before = *m.current();
            m.trigger(event).unwrap();
            if *m.current() != before {
                moves += 1;
                prop_assert_eq!(m.history().last().map(|t| t.event), Some(event));
            }
        }

        prop_assert_eq!(m.history().len(), moves);
    }
}
