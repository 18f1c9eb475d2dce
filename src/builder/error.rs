//! Build errors for machine and transition builders.

use crate::table::RegistrationError;
use thiserror::Error;

/// Errors that can occur when building machines and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Transition '{0}' has no source state. Call .from(state)")]
    MissingSource(String),

    #[error("Transition '{0}' has no triggering event. Call .on(event) or .automatic()")]
    MissingEvent(String),

    #[error("Transition '{0}' has no action. Call .action(f) or .moves_to(state)")]
    MissingAction(String),

    #[error("Machine '{0}' has no transitions. Add at least one transition")]
    NoTransitions(String),

    #[error(transparent)]
    Registration(#[from] RegistrationError),
}
