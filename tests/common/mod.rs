//! In-memory store and payment row shared by the integration tests.

#![allow(dead_code)]

use statetable::{ordinals, Event, Machine, State, StateHolder};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

ordinals! {
    pub struct Pay: State {
        INIT = 0,
        AUTH = 1,
        CAPTURED = 2,
        DECLINED = 3,
        SETTLED = 4,
    }
}

ordinals! {
    pub struct PayEvent: Event {
        NONE = 0,
        AUTH = 1,
        REFUND = 2,
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("store unavailable")]
    Unavailable,
    #[error("request cancelled")]
    Cancelled,
    #[error("card declined: {0}")]
    Declined(String),
}

/// Request context handed to every action and persist call.
#[derive(Default)]
pub struct RequestContext {
    pub request_id: u64,
    pub cancelled: bool,
    pub trail: Mutex<Vec<String>>,
}

impl RequestContext {
    pub fn new(request_id: u64) -> Self {
        Self {
            request_id,
            ..Default::default()
        }
    }

    pub fn note(&self, entry: String) {
        self.trail.lock().unwrap().push(entry);
    }

    pub fn trail(&self) -> Vec<String> {
        self.trail.lock().unwrap().clone()
    }
}

/// Extra arguments passed through a run.
#[derive(Clone, Debug, Default)]
pub struct Charge {
    pub amount: u64,
    pub limit: u64,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    rows: Arc<Mutex<HashMap<String, State>>>,
}

impl MemoryStore {
    pub fn get(&self, id: &str) -> Option<State> {
        self.rows.lock().unwrap().get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Create and persist a fresh row in `Pay::INIT`.
    pub fn insert(&self, id: &str) -> PaymentRow {
        self.rows.lock().unwrap().insert(id.to_string(), Pay::INIT);
        PaymentRow {
            id: id.to_string(),
            state: Pay::INIT,
            store: self.clone(),
            fail_persist_in: None,
        }
    }
}

#[derive(Debug)]
pub struct PaymentRow {
    pub id: String,
    pub state: State,
    pub store: MemoryStore,
    /// Persisting while in this state fails with `StoreError::Unavailable`.
    pub fail_persist_in: Option<State>,
}

impl StateHolder for PaymentRow {
    type Context = RequestContext;
    type Error = StoreError;

    fn id(&self) -> &str {
        &self.id
    }

    fn state(&self) -> State {
        self.state
    }

    fn set_state(&mut self, state: State) {
        self.state = state;
    }

    fn persist(&mut self, ctx: &RequestContext) -> Result<(), StoreError> {
        if ctx.cancelled {
            return Err(StoreError::Cancelled);
        }
        if self.fail_persist_in == Some(self.state) {
            return Err(StoreError::Unavailable);
        }
        ctx.note(format!("persist:{}:{}", ctx.request_id, self.state));
        self.store
            .rows
            .lock()
            .unwrap()
            .insert(self.id.clone(), self.state);
        Ok(())
    }
}

/// Authorize on `PayEvent::AUTH` (declining over the limit), then capture
/// automatically.
pub fn payment_machine() -> Machine<PaymentRow, Charge> {
    let mut machine = Machine::new("payments");

    machine.register(
        "authorize",
        Pay::INIT,
        PayEvent::AUTH,
        |ctx: &RequestContext, mut row: PaymentRow, charge: &Charge| {
            ctx.note(format!("authorize:{}", ctx.request_id));
            if charge.amount > charge.limit {
                row.set_state(Pay::DECLINED);
            } else {
                row.set_state(Pay::AUTH);
            }
            Ok(row)
        },
        [Pay::AUTH, Pay::DECLINED],
    );

    machine.register(
        "capture",
        Pay::AUTH,
        PayEvent::NONE,
        |ctx: &RequestContext, mut row: PaymentRow, _: &Charge| {
            ctx.note(format!("capture:{}", ctx.request_id));
            row.set_state(Pay::CAPTURED);
            Ok(row)
        },
        [Pay::CAPTURED],
    );

    machine
}
