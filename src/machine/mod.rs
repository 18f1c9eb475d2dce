//! Machine: a named transition table plus the run loop that drives holders
//! through it.
//!
//! # Run semantics
//!
//! A run starts from the holder's current state and the external event. Each
//! step looks up `(state, event)`, executes the action, checks the resulting
//! state against the transition's declared destinations, persists the
//! holder and then continues with [`Event::NONE`]. The run ends successfully
//! when no transition matches after at least one step. A miss on the very
//! first lookup is reported as [`RunError::NoTransition`].
//!
//! Runs on different holders may proceed concurrently. Runs on the same
//! holder must be serialized by the caller.

pub mod config;
pub mod error;

pub use config::{MachineConfig, DEFAULT_MAX_CHAIN_STEPS};
pub use error::RunError;

use crate::core::{Event, RunHistory, State, StateHolder, StepRecord};
use crate::table::{RegistrationError, TransitionInfo, TransitionTable};
use chrono::Utc;
use uuid::Uuid;

/// Result of [`Machine::run_traced`]: the rested holder and what happened.
#[derive(Debug)]
pub struct RunOutcome<H> {
    pub holder: H,
    pub history: RunHistory,
}

/// A transition table with a name and run configuration.
///
/// `A` is the type of the extra arguments handed to every action.
///
/// # Example
///
/// ```rust
/// use statetable::{Event, Machine, State, StateHolder};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("store error")]
/// struct StoreError;
///
/// struct Payment {
///     id: String,
///     state: State,
/// }
///
/// impl StateHolder for Payment {
///     type Context = ();
///     type Error = StoreError;
///     fn id(&self) -> &str { &self.id }
///     fn state(&self) -> State { self.state }
///     fn set_state(&mut self, state: State) { self.state = state; }
///     fn persist(&mut self, _: &()) -> Result<(), StoreError> { Ok(()) }
/// }
///
/// const AUTH: State = State(1);
/// const CAPTURED: State = State(2);
/// const EV_AUTH: Event = Event(1);
///
/// let mut machine: Machine<Payment> = Machine::new("payments");
/// machine.register("authorize", State::INIT, EV_AUTH, |_, mut p: Payment, _| {
///     p.set_state(AUTH);
///     Ok(p)
/// }, [AUTH]);
/// machine.register("capture", AUTH, Event::NONE, |_, mut p: Payment, _| {
///     p.set_state(CAPTURED);
///     Ok(p)
/// }, [CAPTURED]);
///
/// let payment = Payment { id: "pay-1".into(), state: State::INIT };
/// let payment = machine.run(&(), payment, EV_AUTH, &()).unwrap();
/// assert_eq!(payment.state(), CAPTURED);
/// ```
pub struct Machine<H: StateHolder, A = ()> {
    name: String,
    config: MachineConfig,
    table: TransitionTable<H, A>,
}

impl<H: StateHolder, A> Machine<H, A> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, MachineConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: MachineConfig) -> Self {
        Self {
            name: name.into(),
            config,
            table: TransitionTable::new(),
        }
    }

    pub(crate) fn from_parts(
        name: String,
        config: MachineConfig,
        table: TransitionTable<H, A>,
    ) -> Self {
        Self {
            name,
            config,
            table,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn table(&self) -> &TransitionTable<H, A> {
        &self.table
    }

    /// Register a transition. See [`TransitionTable::register`].
    ///
    /// # Panics
    ///
    /// On a duplicate `(source, event)` or an empty destination set.
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
        self.table.register(name, source, event, action, destinations);
    }

    /// Fallible form of [`register`](Self::register).
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
        self.table
            .try_register(name, source, event, action, destinations)
    }

    pub fn describe(&self) -> Vec<TransitionInfo> {
        self.table.describe()
    }

    /// Drive `holder` as far as it will go from `event`.
    ///
    /// Returns the holder in its resting state. On error the holder is not
    /// returned; its last persisted state is authoritative.
    ///
    /// # Panics
    ///
    /// When an action leaves the holder in a state not declared for its
    /// transition.
    pub fn run(
        &self,
        ctx: &H::Context,
        holder: H,
        event: Event,
        args: &A,
    ) -> Result<H, RunError<H::Error>> {
        self.run_traced(ctx, holder, event, args)
            .map(|outcome| outcome.holder)
    }

    /// Like [`run`](Self::run), also returning the executed steps.
    pub fn run_traced(
        &self,
        ctx: &H::Context,
        mut holder: H,
        mut event: Event,
        args: &A,
    ) -> Result<RunOutcome<H>, RunError<H::Error>> {
        let run_id = Uuid::new_v4();
        let span = tracing::debug_span!(
            "run",
            machine = %self.name,
            run_id = %run_id,
            holder = holder.id()
        );
        let _enter = span.enter();

        let mut history = RunHistory::new(run_id, holder.id());
        let mut steps = 0usize;

        loop {
            let from = holder.state();
            let Some(transition) = self.table.lookup(from, event) else {
                if steps > 0 {
                    tracing::debug!(state = %from, steps, "Run came to rest");
                    return Ok(RunOutcome { holder, history });
                }
                return Err(RunError::NoTransition {
                    holder_id: holder.id().to_string(),
                    state: from,
                    event,
                });
            };

            if steps >= self.config.max_chain_steps {
                tracing::warn!(
                    state = %from,
                    limit = self.config.max_chain_steps,
                    "Chain limit reached before run came to rest"
                );
                return Err(RunError::ChainLimitExceeded {
                    holder_id: holder.id().to_string(),
                    limit: self.config.max_chain_steps,
                    state: from,
                });
            }

            let mut next = transition
                .execute(ctx, holder, args)
                .map_err(|source| RunError::Action {
                    transition: transition.name().to_string(),
                    source,
                })?;

            let to = next.state();
            if !self.table.validate_destination(from, event, to) {
                tracing::error!(
                    transition = transition.name(),
                    from = %from,
                    event = %event,
                    to = %to,
                    "Action left holder in undeclared state"
                );
                panic!(
                    "transition '{}' moved '{}' from {} to undeclared state {} (allowed: {:?})",
                    transition.name(),
                    next.id(),
                    from,
                    to,
                    transition.destinations()
                );
            }

            next.persist(ctx).map_err(|source| RunError::Persist {
                holder_id: next.id().to_string(),
                source,
            })?;

            tracing::debug!(
                transition = transition.name(),
                from = %from,
                event = %event,
                to = %to,
                "Step persisted"
            );

            history = history.record(StepRecord {
                step: steps,
                transition: transition.name().to_string(),
                from,
                event,
                to,
                timestamp: Utc::now(),
            });

            holder = next;
            event = Event::NONE;
            steps += 1;
        }
    }
}
