//! Property-based tests for the transition table and run loop.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated tables.

use proptest::prelude::*;
use statetable::{ConfigViolation, Event, Machine, RunError, State, StateHolder, TransitionTable};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, thiserror::Error)]
#[error("never")]
struct Never;

#[derive(Debug)]
struct Cell {
    state: State,
    writes: usize,
}

impl StateHolder for Cell {
    type Context = ();
    type Error = Never;

    fn id(&self) -> &str {
        "cell"
    }

    fn state(&self) -> State {
        self.state
    }

    fn set_state(&mut self, state: State) {
        self.state = state;
    }

    fn persist(&mut self, _ctx: &()) -> Result<(), Never> {
        self.writes += 1;
        Ok(())
    }
}

fn keep(_: &(), cell: Cell, _: &()) -> Result<Cell, Never> {
    Ok(cell)
}

prop_compose! {
    fn arbitrary_state()(ordinal in 0..8i16) -> State {
        State(ordinal)
    }
}

prop_compose! {
    fn arbitrary_event()(ordinal in 0..4i16) -> Event {
        Event(ordinal)
    }
}

prop_compose! {
    fn arbitrary_entries()(
        entries in prop::collection::btree_map(
            (arbitrary_state(), arbitrary_event()),
            prop::collection::btree_set(arbitrary_state(), 1..4),
            0..12,
        )
    ) -> BTreeMap<(State, Event), BTreeSet<State>> {
        entries
    }
}

fn table_from(
    entries: &BTreeMap<(State, Event), BTreeSet<State>>,
) -> TransitionTable<Cell> {
    let mut table = TransitionTable::new();
    for ((source, event), destinations) in entries {
        let name = format!("{source}/{event}");
        table.register(&name, *source, *event, keep, destinations.iter().copied());
    }
    table
}

proptest! {
    #[test]
    fn lookup_returns_exactly_registered(
        entries in arbitrary_entries(),
        probe_state in arbitrary_state(),
        probe_event in arbitrary_event(),
    ) {
        let table = table_from(&entries);
        prop_assert_eq!(table.len(), entries.len());

        for ((source, event), destinations) in &entries {
            let transition = table.lookup(*source, *event).unwrap();
            prop_assert_eq!(transition.name(), format!("{source}/{event}"));
            prop_assert_eq!(transition.destinations(), destinations);
        }

        let registered = entries.contains_key(&(probe_state, probe_event));
        prop_assert_eq!(table.lookup(probe_state, probe_event).is_some(), registered);
    }

    #[test]
    fn duplicate_registration_never_replaces(
        entries in arbitrary_entries(),
        replacement in prop::collection::btree_set(arbitrary_state(), 1..4),
    ) {
        let mut table = table_from(&entries);

        for (source, event) in entries.keys() {
            let err = table
                .try_register("replacement", *source, *event, keep, replacement.iter().copied())
                .unwrap_err();
            let is_duplicate = err.has(|v| matches!(v, ConfigViolation::DuplicateTransition { .. }));
            prop_assert!(is_duplicate);
            prop_assert_eq!(
                table.lookup(*source, *event).unwrap().name(),
                format!("{source}/{event}")
            );
        }
        prop_assert_eq!(table.len(), entries.len());
    }

    #[test]
    fn empty_destinations_always_rejected(
        source in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        let mut table: TransitionTable<Cell> = TransitionTable::new();
        let result = table.try_register("empty", source, event, keep, Vec::new());

        prop_assert!(result.is_err());
        prop_assert!(table.is_empty());
    }

    #[test]
    fn validate_destination_matches_declaration(
        entries in arbitrary_entries(),
        candidate in arbitrary_state(),
    ) {
        let table = table_from(&entries);

        for ((source, event), destinations) in &entries {
            prop_assert_eq!(
                table.validate_destination(*source, *event, candidate),
                destinations.contains(&candidate)
            );
            prop_assert_eq!(
                table.validate_destination(*source, *event, *source),
                destinations.contains(source)
            );
        }
    }

    #[test]
    fn linear_chain_rests_at_its_end(length in 1..10i16) {
        let mut machine: Machine<Cell> = Machine::new("chain");
        for i in 0..length {
            let next = State(i + 1);
            let event = if i == 0 { Event(1) } else { Event::NONE };
            machine.register(
                &format!("step-{i}"),
                State(i),
                event,
                move |_: &(), mut cell: Cell, _: &()| {
                    cell.set_state(next);
                    Ok(cell)
                },
                [next],
            );
        }

        let outcome = machine
            .run_traced(&(), Cell { state: State::INIT, writes: 0 }, Event(1), &())
            .unwrap();

        prop_assert_eq!(outcome.holder.state(), State(length));
        prop_assert_eq!(outcome.holder.writes, length as usize);
        prop_assert_eq!(outcome.history.steps().len(), length as usize);
    }

    #[test]
    fn unregistered_first_step_is_always_an_error(
        state in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        let machine: Machine<Cell> = Machine::new("empty");
        let result = machine.run(&(), Cell { state, writes: 0 }, event, &());

        let is_miss = matches!(
            result,
            Err(RunError::NoTransition { state: s, event: e, .. }) if s == state && e == event
        );
        prop_assert!(is_miss);
    }
}
