//! Core engine types.
//!
//! - Opaque `State` and `Event` ordinals with their reserved values
//! - The `StateHolder` capability implemented by persisted entities
//! - Immutable per-run step history

mod history;
mod holder;
mod state;

pub use history::{HistoryError, RunHistory, StepRecord};
pub use holder::StateHolder;
pub use state::{Event, State};
