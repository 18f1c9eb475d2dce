//! Per-invocation record of executed steps.
//!
//! Every step the run loop persists is appended to a [`RunHistory`]. The
//! history is an immutable value; [`RunHistory::record`] returns a new one.
//! It can be encoded to JSON or to a compact binary form for audit trails.

use super::state::{Event, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Errors encoding or decoding a history.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}

/// One persisted step of a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Zero-based position within the run
    pub step: usize,
    /// Diagnostic name of the executed transition
    pub transition: String,
    /// State before the action ran
    pub from: State,
    /// Event that selected the transition
    pub event: Event,
    /// State the action left the holder in
    pub to: State,
    /// When the step was persisted
    pub timestamp: DateTime<Utc>,
}

/// Ordered steps executed by a single run invocation.
///
/// # Example
///
/// ```rust
/// use statetable::{Event, RunHistory, State, StepRecord};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let history = RunHistory::new(Uuid::new_v4(), "order-1");
/// let history = history.record(StepRecord {
///     step: 0,
///     transition: "authorize".to_string(),
///     from: State::INIT,
///     event: Event(1),
///     to: State(1),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec![State::INIT, State(1)]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunHistory {
    run_id: Uuid,
    holder_id: String,
    steps: Vec<StepRecord>,
}

impl RunHistory {
    /// Create an empty history for a run.
    pub fn new(run_id: Uuid, holder_id: impl Into<String>) -> Self {
        Self {
            run_id,
            holder_id: holder_id.into(),
            steps: Vec::new(),
        }
    }

    /// Record a step, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, step: StepRecord) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self {
            run_id: self.run_id,
            holder_id: self.holder_id.clone(),
            steps,
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn holder_id(&self) -> &str {
        &self.holder_id
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// States traversed: the first step's source, then every destination.
    pub fn path(&self) -> Vec<State> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            path.push(first.from);
        }
        path.extend(self.steps.iter().map(|s| s.to));
        path
    }

    /// State the run ended in, if any step executed.
    pub fn final_state(&self) -> Option<State> {
        self.steps.last().map(|s| s.to)
    }

    /// Time between the first and last persisted step.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.steps.first()?, self.steps.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, HistoryError> {
        serde_json::to_string(self).map_err(|e| HistoryError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, HistoryError> {
        serde_json::from_str(json).map_err(|e| HistoryError::DeserializationFailed(e.to_string()))
    }

    /// Encode in compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, HistoryError> {
        bincode::serialize(self).map_err(|e| HistoryError::SerializationFailed(e.to_string()))
    }

    /// Decode from compact binary form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HistoryError> {
        bincode::deserialize(bytes).map_err(|e| HistoryError::DeserializationFailed(e.to_string()))
    }
}
