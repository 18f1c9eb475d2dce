//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Event, State, StateHolder};
use crate::table::{Action, Transition};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
///
/// ```rust
/// # use statetable::{Event, State, StateHolder, TransitionBuilder};
/// # #[derive(Debug, thiserror::Error)]
/// # #[error("e")]
/// # struct E;
/// # struct Row(State);
/// # impl StateHolder for Row {
/// #     type Context = ();
/// #     type Error = E;
/// #     fn id(&self) -> &str { "row" }
/// #     fn state(&self) -> State { self.0 }
/// #     fn set_state(&mut self, s: State) { self.0 = s; }
/// #     fn persist(&mut self, _: &()) -> Result<(), E> { Ok(()) }
/// # }
/// let transition = TransitionBuilder::<Row>::named("capture")
///     .from(State(1))
///     .automatic()
///     .moves_to(State(2))
///     .build()
///     .unwrap();
///
/// assert_eq!(transition.event(), Event::NONE);
/// assert!(transition.allows(State(2)));
/// ```
pub struct TransitionBuilder<H: StateHolder, A = ()> {
    name: String,
    source: Option<State>,
    event: Option<Event>,
    action: Option<Action<H, A>>,
    destinations: BTreeSet<State>,
}

impl<H: StateHolder + 'static, A: 'static> TransitionBuilder<H, A> {
    /// Start a transition with a diagnostic name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
            event: None,
            action: None,
            destinations: BTreeSet::new(),
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: State) -> Self {
        self.source = Some(state);
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: Event) -> Self {
        self.event = Some(event);
        self
    }

    /// Trigger on [`Event::NONE`], so the transition chains automatically.
    pub fn automatic(self) -> Self {
        self.on(Event::NONE)
    }

    /// Set the action (required).
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&H::Context, H, &A) -> Result<H, H::Error> + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Use an action that only sets the state, and declare that state as a
    /// destination.
    pub fn moves_to(self, state: State) -> Self {
        self.action(move |_: &H::Context, mut holder: H, _: &A| {
            holder.set_state(state);
            Ok(holder)
        })
        .to(state)
    }

    /// Declare a legal destination state.
    pub fn to(mut self, state: State) -> Self {
        self.destinations.insert(state);
        self
    }

    /// Declare several legal destination states.
    pub fn to_any(mut self, states: impl IntoIterator<Item = State>) -> Self {
        self.destinations.extend(states);
        self
    }

    /// Build the transition.
    ///
    /// Destination rules are checked when the transition is registered.
    pub fn build(self) -> Result<Transition<H, A>, BuildError> {
        let source = self
            .source
            .ok_or_else(|| BuildError::MissingSource(self.name.clone()))?;
        let event = self
            .event
            .ok_or_else(|| BuildError::MissingEvent(self.name.clone()))?;
        let action = self
            .action
            .ok_or_else(|| BuildError::MissingAction(self.name.clone()))?;

        Ok(Transition {
            name: self.name,
            source,
            event,
            action,
            destinations: self.destinations,
        })
    }
}
