//! Registered transitions and their actions.

use crate::core::{Event, State, StateHolder};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Business logic attached to a transition.
///
/// Receives the caller's context, the holder (by value) and the extra
/// arguments passed to the run call. Returns the updated holder, whose state
/// must be one of the transition's destinations.
pub type Action<H, A> = Arc<
    dyn Fn(&<H as StateHolder>::Context, H, &A) -> Result<H, <H as StateHolder>::Error>
        + Send
        + Sync,
>;

/// An action plus the states it may leave the holder in, keyed by
/// `(source, event)` in a [`TransitionTable`](crate::TransitionTable).
pub struct Transition<H: StateHolder, A = ()> {
    pub(crate) name: String,
    pub(crate) source: State,
    pub(crate) event: Event,
    pub(crate) action: Action<H, A>,
    pub(crate) destinations: BTreeSet<State>,
}

impl<H: StateHolder, A> Transition<H, A> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> State {
        self.source
    }

    pub fn event(&self) -> Event {
        self.event
    }

    pub fn destinations(&self) -> &BTreeSet<State> {
        &self.destinations
    }

    /// Whether `state` was declared as a destination at registration.
    pub fn allows(&self, state: State) -> bool {
        self.destinations.contains(&state)
    }

    /// Run the action.
    pub fn execute(&self, ctx: &H::Context, holder: H, args: &A) -> Result<H, H::Error> {
        (self.action)(ctx, holder, args)
    }

    /// Serializable summary for diagnostics.
    pub fn info(&self) -> TransitionInfo {
        TransitionInfo {
            name: self.name.clone(),
            source: self.source,
            event: self.event,
            destinations: self.destinations.iter().copied().collect(),
        }
    }
}

impl<H: StateHolder, A> Clone for Transition<H, A> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            source: self.source,
            event: self.event,
            action: Arc::clone(&self.action),
            destinations: self.destinations.clone(),
        }
    }
}

impl<H: StateHolder, A> fmt::Debug for Transition<H, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("event", &self.event)
            .field("destinations", &self.destinations)
            .finish_non_exhaustive()
    }
}

/// Action-free view of a registered transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransitionInfo {
    pub name: String,
    pub source: State,
    pub event: Event,
    pub destinations: Vec<State>,
}
