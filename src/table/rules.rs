//! Registration rules, checked with `Validation` so that a rejected
//! transition reports every problem at once.

use crate::core::{Event, State};
use crate::table::error::ConfigViolation;
use std::collections::BTreeSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// What a registration call is asking for, minus the action.
pub(crate) struct Candidate<'a> {
    pub source: State,
    pub event: Event,
    pub destinations: &'a BTreeSet<State>,
    /// Name of the transition already holding `(source, event)`, if any.
    pub existing: Option<&'a str>,
}

/// Check all registration rules, accumulating every violation.
pub(crate) fn check(candidate: &Candidate<'_>) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    let checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = vec![
        has_destinations(candidate),
        is_unclaimed(candidate),
    ];

    Validation::all_vec(checks).map(|_| ())
}

fn has_destinations(candidate: &Candidate<'_>) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if candidate.destinations.is_empty() {
        Validation::fail(ConfigViolation::EmptyDestinations {
            state: candidate.source,
            event: candidate.event,
        })
    } else {
        Validation::success(())
    }
}

fn is_unclaimed(candidate: &Candidate<'_>) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    match candidate.existing {
        Some(existing) => Validation::fail(ConfigViolation::DuplicateTransition {
            state: candidate.source,
            event: candidate.event,
            existing: existing.to_string(),
        }),
        None => Validation::success(()),
    }
}
