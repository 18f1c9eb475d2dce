//! Errors returned by a run.

use crate::core::{Event, State};
use thiserror::Error;

/// Why a run call stopped without reaching a resting state.
///
/// `E` is the holder's error type. Action and persistence failures carry the
/// original error unchanged as their source.
#[derive(Debug, Error)]
pub enum RunError<E>
where
    E: std::error::Error + 'static,
{
    #[error("no transition found, id = {holder_id}, state = {state}, event = {event}")]
    NoTransition {
        holder_id: String,
        state: State,
        event: Event,
    },

    #[error("transition '{transition}' failed")]
    Action {
        transition: String,
        #[source]
        source: E,
    },

    #[error("failed to persist '{holder_id}'")]
    Persist {
        holder_id: String,
        #[source]
        source: E,
    },

    #[error("'{holder_id}' still moving after {limit} steps (state = {state})")]
    ChainLimitExceeded {
        holder_id: String,
        limit: usize,
        state: State,
    },
}

impl<E> RunError<E>
where
    E: std::error::Error + 'static,
{
    /// The action or persistence error, if that is what stopped the run.
    pub fn into_source(self) -> Option<E> {
        match self {
            Self::Action { source, .. } | Self::Persist { source, .. } => Some(source),
            Self::NoTransition { .. } | Self::ChainLimitExceeded { .. } => None,
        }
    }

    pub fn is_no_transition(&self) -> bool {
        matches!(self, Self::NoTransition { .. })
    }
}
