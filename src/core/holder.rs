//! The capability every entity driven by a machine must expose.

use super::state::State;

/// Durable, identity-bearing record driven through a machine.
///
/// Typically a row in a store. The engine reads and writes the state ordinal
/// and asks the holder to persist itself after each successful step. The
/// `Context` is the caller's request context (deadline, cancellation flag,
/// connection handle) and is passed through unmodified to every action and
/// persist call.
///
/// # Example
///
/// ```rust
/// use statetable::{State, StateHolder};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("write failed")]
/// struct WriteFailed;
///
/// struct Order {
///     id: String,
///     state: State,
///     saved: Option<State>,
/// }
///
/// impl StateHolder for Order {
///     type Context = ();
///     type Error = WriteFailed;
///
///     fn id(&self) -> &str {
///         &self.id
///     }
///
///     fn state(&self) -> State {
///         self.state
///     }
///
///     fn set_state(&mut self, state: State) {
///         self.state = state;
///     }
///
///     fn persist(&mut self, _ctx: &()) -> Result<(), WriteFailed> {
///         self.saved = Some(self.state);
///         Ok(())
///     }
/// }
/// ```
pub trait StateHolder {
    /// Request context threaded through actions and persistence.
    type Context: ?Sized;

    /// Error returned by actions and by [`persist`](StateHolder::persist).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Stable identifier, used in diagnostics.
    fn id(&self) -> &str;

    /// Current state ordinal.
    fn state(&self) -> State;

    /// Replace the state ordinal. Does not persist.
    fn set_state(&mut self, state: State);

    /// Make the current record durable.
    fn persist(&mut self, ctx: &Self::Context) -> Result<(), Self::Error>;
}
