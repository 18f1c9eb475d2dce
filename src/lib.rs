//! Statetable: a transition-table state machine engine
//!
//! Statetable drives an externally persisted entity (a row in a store, a
//! session record) through opaque integer states in response to events. A
//! machine is a table of `(state, event) -> transition` entries, built once at
//! startup; each transition carries caller-supplied business logic and the
//! set of states that logic may leave the entity in.
//!
//! # Core Concepts
//!
//! - **State / Event**: opaque `i16` ordinals; `Event::NONE` drives chaining
//! - **StateHolder**: the capability (id, get/set state, persist) an entity exposes
//! - **TransitionTable**: registration with fail-fast validation, and lookup
//! - **Machine**: the run loop, advancing a holder as far as it will go
//!
//! # Example
//!
//! ```rust
//! use statetable::{ordinals, Event, MachineBuilder, State, StateHolder, TransitionBuilder};
//!
//! ordinals! {
//!     struct Pay: State { INIT = 0, AUTH = 1, CAPTURED = 2 }
//! }
//! ordinals! {
//!     struct PayEvent: Event { NONE = 0, AUTH = 1 }
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("store unavailable")]
//! struct StoreError;
//!
//! struct Payment {
//!     id: String,
//!     state: State,
//! }
//!
//! impl StateHolder for Payment {
//!     type Context = ();
//!     type Error = StoreError;
//!     fn id(&self) -> &str { &self.id }
//!     fn state(&self) -> State { self.state }
//!     fn set_state(&mut self, state: State) { self.state = state; }
//!     fn persist(&mut self, _: &()) -> Result<(), StoreError> { Ok(()) }
//! }
//!
//! let machine = MachineBuilder::<Payment>::new("payments")
//!     .transition(TransitionBuilder::named("authorize").from(Pay::INIT).on(PayEvent::AUTH).moves_to(Pay::AUTH))?
//!     .transition(TransitionBuilder::named("capture").from(Pay::AUTH).automatic().moves_to(Pay::CAPTURED))?
//!     .build()?;
//!
//! let payment = Payment { id: "pay-1".into(), state: Pay::INIT };
//! let payment = machine.run(&(), payment, PayEvent::AUTH, &())?;
//! assert_eq!(payment.state(), Pay::CAPTURED);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod table;

// Re-export commonly used types
pub use crate::builder::{BuildError, MachineBuilder, TransitionBuilder};
pub use crate::core::{Event, HistoryError, RunHistory, State, StateHolder, StepRecord};
pub use crate::machine::{Machine, MachineConfig, RunError, RunOutcome};
pub use crate::table::{ConfigViolation, RegistrationError, Transition, TransitionInfo, TransitionTable};
