//! The transition table: `(state, event)` to registered transition.
//!
//! Tables are built once, single-threaded, while the owning machine is being
//! configured. After that they are only read, so a machine can be shared
//! across threads without locking.

pub mod error;
mod rules;
pub mod transition;

pub use error::{ConfigViolation, RegistrationError};
pub use transition::{Action, Transition, TransitionInfo};

use crate::core::{Event, State, StateHolder};
use rules::Candidate;
use std::collections::HashMap;
use std::sync::Arc;
use stillwater::validation::Validation;

/// Registered transitions keyed by source state and triggering event.
pub struct TransitionTable<H: StateHolder, A = ()> {
    entries: HashMap<(State, Event), Transition<H, A>>,
}

impl<H: StateHolder, A> TransitionTable<H, A> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a transition, panicking on any configuration violation.
    ///
    /// A duplicate `(source, event)` or an empty destination set is a
    /// programming error in the machine definition.
    ///
    /// # Panics
    ///
    /// When [`try_register`](Self::try_register) would fail.
    pub fn register<F>(
        &mut self,
        name: &str,
        source: State,
        event: Event,
        action: F,
        destinations: impl IntoIterator<Item = State>,
    ) where
        F: Fn(&H::Context, H, &A) -> Result<H, H::Error> + Send + Sync + 'static,
    {
        if let Err(err) = self.try_register(name, source, event, action, destinations) {
            tracing::error!(error = %err, "Rejecting transition registration");
            panic!("{err}");
        }
    }

    /// Register a transition, reporting every violated rule.
    ///
    /// On error the table is left unchanged.
    pub fn try_register<F>(
        &mut self,
        name: &str,
        source: State,
        event: Event,
        action: F,
        destinations: impl IntoIterator<Item = State>,
    ) -> Result<(), RegistrationError>
    where
        F: Fn(&H::Context, H, &A) -> Result<H, H::Error> + Send + Sync + 'static,
    {
        self.try_insert(Transition {
            name: name.to_string(),
            source,
            event,
            action: Arc::new(action),
            destinations: destinations.into_iter().collect(),
        })
    }

    /// Insert an already assembled transition under its own key.
    pub(crate) fn try_insert(
        &mut self,
        transition: Transition<H, A>,
    ) -> Result<(), RegistrationError> {
        let key = (transition.source, transition.event);
        let candidate = Candidate {
            source: transition.source,
            event: transition.event,
            destinations: &transition.destinations,
            existing: self.entries.get(&key).map(|t| t.name.as_str()),
        };

        if let Validation::Failure(errors) = rules::check(&candidate) {
            return Err(RegistrationError {
                name: transition.name,
                violations: errors.iter().cloned().collect(),
            });
        }

        tracing::debug!(
            transition = %transition.name,
            source = %transition.source,
            event = %transition.event,
            destinations = ?transition.destinations,
            "Registered transition"
        );

        self.entries.insert(key, transition);
        Ok(())
    }

    /// Transition registered for `(source, event)`.
    ///
    /// `None` is the ordinary "nothing further to do" answer.
    pub fn lookup(&self, source: State, event: Event) -> Option<&Transition<H, A>> {
        self.entries.get(&(source, event))
    }

    pub fn contains(&self, source: State, event: Event) -> bool {
        self.entries.contains_key(&(source, event))
    }

    /// Whether `candidate` is a declared destination of `(source, event)`.
    ///
    /// False for unregistered keys, and for the source state itself unless
    /// it was listed.
    pub fn validate_destination(&self, source: State, event: Event, candidate: State) -> bool {
        self.lookup(source, event)
            .is_some_and(|t| t.allows(candidate))
    }

    /// Events with a registered transition out of `source`, ascending.
    pub fn events_from(&self, source: State) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .entries
            .keys()
            .filter(|(state, _)| *state == source)
            .map(|(_, event)| *event)
            .collect();
        events.sort();
        events
    }

    /// Summaries of every transition, ordered by `(source, event)`.
    pub fn describe(&self) -> Vec<TransitionInfo> {
        let mut infos: Vec<TransitionInfo> = self.entries.values().map(Transition::info).collect();
        infos.sort_by_key(|info| (info.source, info.event));
        infos
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H: StateHolder, A> Default for TransitionTable<H, A> {
    fn default() -> Self {
        Self::new()
    }
}
