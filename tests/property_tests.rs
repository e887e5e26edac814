//! Property-based tests for the transition algorithm.
//!
//! These tests use proptest to verify transition properties hold across
//! many randomly generated state and transition names.

use proptest::prelude::*;
use transom::core::{Symbol, TransitionTable};
use transom::dispatch::ListenerList;
use transom::machine::{EventStateMachine, StateMachineError};

fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}"
}

fn machine(initial: &str) -> EventStateMachine<ListenerList> {
    EventStateMachine::new(ListenerList::new(), initial)
}

proptest! {
    #[test]
    fn bare_transition_lands_on_transition_name(
        initial in name(),
        transition in name(),
    ) {
        let mut machine = machine(&initial);

        machine.transition(transition.as_str()).unwrap();

        prop_assert_eq!(machine.state(), transition.as_str());
    }

    #[test]
    fn abort_never_changes_state(
        initial in name(),
        transition in name(),
    ) {
        let mut machine = machine(&initial);
        machine.dispatcher_mut().listen(|event| {
            event.abort_transition(true);
            Ok(())
        });

        let err = machine.transition(transition.as_str()).unwrap_err();

        let is_expected = matches!(err, StateMachineError::CouldNotTransition { .. });
        prop_assert!(is_expected);
        prop_assert_eq!(err.transition(), transition.as_str());
        prop_assert_eq!(machine.state(), initial.as_str());
    }

    #[test]
    fn override_always_wins_over_transition_name(
        initial in name(),
        transition in name(),
        destination in name(),
    ) {
        let mut machine = machine(&initial);
        let destination_inner = destination.clone();
        machine.dispatcher_mut().listen(move |event| {
            event.set_new_state(Some(destination_inner.as_str()));
            Ok(())
        });

        machine.transition(transition.as_str()).unwrap();

        prop_assert_eq!(machine.state(), destination.as_str());
    }

    #[test]
    fn null_override_never_changes_state(
        initial in name(),
        transition in name(),
    ) {
        let mut machine = machine(&initial);
        machine.dispatcher_mut().listen(|event| {
            event.set_new_state(None::<Symbol>);
            Ok(())
        });

        let err = machine.transition(transition.as_str()).unwrap_err();

        let is_expected = matches!(err, StateMachineError::NullNewState { .. });
        prop_assert!(is_expected);
        prop_assert_eq!(machine.state(), initial.as_str());
    }

    #[test]
    fn failing_listener_still_commits(
        initial in name(),
        transition in name(),
    ) {
        let mut machine = machine(&initial);
        machine
            .dispatcher_mut()
            .listen(|_event| Err("listener failed".into()));

        let err = machine.transition(transition.as_str()).unwrap_err();

        let is_expected = matches!(err, StateMachineError::DispatchFailed { .. });
        prop_assert!(is_expected);
        prop_assert!(err.state_was_committed());
        prop_assert_eq!(machine.state(), transition.as_str());
    }

    #[test]
    fn chained_transitions_land_on_the_last_name(
        initial in name(),
        transitions in prop::collection::vec(name(), 1..8),
    ) {
        let mut machine = machine(&initial);

        for transition in &transitions {
            machine.transition(transition.as_str()).unwrap();
        }

        let last = transitions.last().unwrap();
        prop_assert_eq!(machine.state(), last.as_str());
    }

    #[test]
    fn table_probes_never_panic(
        entries in prop::collection::vec((name(), prop::collection::vec(name(), 0..4)), 0..6),
        probe_state in name(),
        probe_transition in name(),
    ) {
        let table: TransitionTable = entries.into_iter().collect();

        let possible = table.possible(&probe_state);
        let allowed = table.allows(&probe_state, &probe_transition);

        // Membership and listing must agree.
        let listed = possible.iter().any(|t| t == probe_transition.as_str());
        prop_assert_eq!(allowed, listed);
    }

    #[test]
    fn can_transition_agrees_with_the_table(
        initial in name(),
        listed in prop::collection::vec(name(), 0..5),
        probe in name(),
    ) {
        let machine: EventStateMachine<ListenerList> = EventStateMachine::builder()
            .dispatcher(ListenerList::new())
            .initial(initial.as_str())
            .allow(initial.as_str(), listed.iter().map(String::as_str))
            .build()
            .unwrap();

        let expected = listed.iter().any(|t| t == &probe);
        prop_assert_eq!(machine.can_transition(&probe), expected);

        let possible: Vec<_> = machine
            .possible_transitions()
            .iter()
            .map(Symbol::as_str)
            .collect();
        let expected_list: Vec<_> = listed.iter().map(String::as_str).collect();
        prop_assert_eq!(possible, expected_list);
    }
}
