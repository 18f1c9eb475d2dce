//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders that report configuration problems
//! as values, and the [`ordinals!`](crate::ordinals) macro for naming a
//! domain's states and events.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use transition::TransitionBuilder;
