//! Transition history tracking.
//!
//! Provides immutable tracking of classifier transitions over time,
//! optionally bounded to the most recent records.

use super::classification::Classification;
use super::state::PairState;
use super::transition::{PressEvent, Rule};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single transition.
///
/// # Example
///
/// ```rust
/// use pressfsm::core::{Button, Classification, PairState, PressEvent, Rule, TransitionRecord};
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: PairState::PENDING_LEFT,
///     to: PairState::LEFT_LEFT,
///     event: PressEvent::Press(Button::Left),
///     classification: Classification::Left,
///     rule: Rule::CompletePair,
///     cycle: 2,
///     timestamp: Utc::now(),
/// };
/// assert!(record.classification.is_output());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being transitioned from
    pub from: PairState,
    /// The state being transitioned to
    pub to: PairState,
    /// The press that caused the transition
    pub event: PressEvent,
    /// What the transition emitted
    pub classification: Classification,
    /// The rule that fired
    pub rule: Rule,
    /// Evaluation cycle the transition happened on, counted from 1
    pub cycle: u64,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition added. With a limit set, the oldest records are dropped.
///
/// # Example
///
/// ```rust
/// use pressfsm::core::{apply, Button, PairState, PressEvent, PressHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let mut history = PressHistory::new();
/// let mut state = PairState::IDLE;
///
/// for (cycle, button) in [Button::Left, Button::Right].into_iter().enumerate() {
///     let event = PressEvent::Press(button);
///     let step = apply(state, event);
///     history = history.record(TransitionRecord {
///         from: state,
///         to: step.next,
///         event,
///         classification: step.classification,
///         rule: step.rule,
///         cycle: cycle as u64 + 1,
///         timestamp: Utc::now(),
///     });
///     state = step.next;
/// }
///
/// let path = history.get_path();
/// assert_eq!(path, vec![PairState::IDLE, PairState::PENDING_LEFT, PairState::LEFT_RIGHT]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PressHistory {
    records: Vec<TransitionRecord>,
    limit: Option<usize>,
}

impl PressHistory {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            limit: None,
        }
    }

    /// Create a history that keeps at most `limit` records.
    pub fn bounded(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is not mutated.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        if let Some(limit) = self.limit {
            let excess = records.len().saturating_sub(limit);
            records.drain(..excess);
        }
        Self {
            records,
            limit: self.limit,
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first record, then the `to` state of
    /// each record.
    pub fn get_path(&self) -> Vec<PairState> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|r| r.to));
        path
    }

    /// Classifications emitted, oldest first.
    pub fn outputs(&self) -> Vec<Classification> {
        self.records
            .iter()
            .map(|r| r.classification)
            .filter(Classification::is_output)
            .collect()
    }

    /// Calculate total duration from first to last record.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
