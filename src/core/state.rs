//! Ordinal state and event identifiers.
//!
//! The engine never interprets states or events. Both are small opaque
//! integers defined by the embedding domain, usually through the
//! [`ordinals!`](crate::ordinals) macro.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of an entity in a machine.
///
/// # Example
///
/// ```rust
/// use statetable::State;
///
/// let auth = State(1);
/// assert_ne!(auth, State::INIT);
/// assert_eq!(auth.to_string(), "1");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(pub i16);

impl State {
    /// Conventional initial state of a freshly created entity.
    pub const INIT: State = State(0);

    /// Raw ordinal value.
    pub fn ordinal(self) -> i16 {
        self.0
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trigger that causes a transition attempt.
///
/// [`Event::NONE`] is reserved: the run loop feeds it after every successful
/// step so that transitions registered on it execute automatically.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(pub i16);

impl Event {
    /// No externally supplied event.
    pub const NONE: Event = Event(0);

    /// Raw ordinal value.
    pub fn ordinal(self) -> i16 {
        self.0
    }

    /// Whether this is the chaining sentinel.
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
