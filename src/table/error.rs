//! Registration errors.

use crate::core::{Event, State};
use thiserror::Error;

/// A single rule broken by a transition registration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("no destination states declared for (state {state}, event {event})")]
    EmptyDestinations { state: State, event: Event },

    #[error("(state {state}, event {event}) already handled by '{existing}'")]
    DuplicateTransition {
        state: State,
        event: Event,
        existing: String,
    },
}

/// Every violation found while registering one transition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid transition '{name}': {}", render(.violations))]
pub struct RegistrationError {
    pub name: String,
    pub violations: Vec<ConfigViolation>,
}

impl RegistrationError {
    pub fn has(&self, pred: impl Fn(&ConfigViolation) -> bool) -> bool {
        self.violations.iter().any(pred)
    }
}

fn render(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
