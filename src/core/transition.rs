//! Transition function for the pair classifier.
//!
//! Two rules change the tier: pair completion (tier 1 to tier 2) emits a
//! classification, reset (tier 2 to tier 0) emits nothing. Arming (tier 0
//! to tier 1) also emits nothing. Every function here is pure.

use super::classification::Classification;
use super::state::{Button, PairState};
use serde::{Deserialize, Serialize};

/// Errors raised when an input snapshot is outside the supported domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Both buttons reported a press in the same cycle")]
    SimultaneousPress,
}

/// One cycle's worth of input: at most one press.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum PressEvent {
    #[default]
    Nothing,
    Press(Button),
}

impl PressEvent {
    /// Build an event from the two press flags.
    ///
    /// Both flags set is rejected rather than resolved by precedence.
    ///
    /// ```rust
    /// use pressfsm::core::{Button, InputError, PressEvent};
    ///
    /// assert_eq!(PressEvent::from_flags(false, false), Ok(PressEvent::Nothing));
    /// assert_eq!(PressEvent::from_flags(false, true), Ok(PressEvent::Press(Button::Right)));
    /// assert_eq!(PressEvent::from_flags(true, true), Err(InputError::SimultaneousPress));
    /// ```
    pub fn from_flags(left: bool, right: bool) -> Result<Self, InputError> {
        match (left, right) {
            (false, false) => Ok(Self::Nothing),
            (true, false) => Ok(Self::Press(Button::Left)),
            (false, true) => Ok(Self::Press(Button::Right)),
            (true, true) => Err(InputError::SimultaneousPress),
        }
    }

    pub fn button(&self) -> Option<Button> {
        match self {
            Self::Nothing => None,
            Self::Press(button) => Some(*button),
        }
    }
}

/// Which rule produced a step.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Rule {
    /// No press; state unchanged.
    Hold,
    /// First press from `Idle`.
    Arm,
    /// Second press; the only rule that emits a classification.
    CompletePair,
    /// Any press after a completed pair; returns to `Idle` silently.
    Reset,
}

/// Outcome of applying one event to a state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Step {
    pub next: PairState,
    pub classification: Classification,
    pub rule: Rule,
}

/// Apply one event to a state.
///
/// Total over every state and every `PressEvent`.
///
/// ```rust
/// use pressfsm::core::{apply, Button, Classification, PairState, PressEvent, Rule};
///
/// let step = apply(PairState::PENDING_RIGHT, PressEvent::Press(Button::Right));
/// assert_eq!(step.next, PairState::RIGHT_RIGHT);
/// assert_eq!(step.classification, Classification::Right);
/// assert_eq!(step.rule, Rule::CompletePair);
/// ```
pub fn apply(state: PairState, event: PressEvent) -> Step {
    let PressEvent::Press(button) = event else {
        return Step {
            next: state,
            classification: Classification::NoOutput,
            rule: Rule::Hold,
        };
    };

    match state {
        PairState::Idle => Step {
            next: PairState::Pending(button),
            classification: Classification::NoOutput,
            rule: Rule::Arm,
        },
        PairState::Pending(first) => Step {
            next: PairState::Complete {
                first,
                second: button,
            },
            classification: Classification::of_pair(first, button),
            rule: Rule::CompletePair,
        },
        PairState::Complete { .. } => Step {
            next: PairState::Idle,
            classification: Classification::NoOutput,
            rule: Rule::Reset,
        },
    }
}

/// Evaluate one cycle from the two press flags.
///
/// Callers must never set both flags. Doing so panics in debug builds; in
/// release builds the snapshot is dropped, leaving the state unchanged with
/// `NoOutput`. Use [`PressEvent::from_flags`] to reject such input instead.
///
/// ```rust
/// use pressfsm::core::{evaluate, Classification, PairState};
///
/// let (state, out) = evaluate(PairState::IDLE, true, false);
/// assert_eq!((state, out), (PairState::PENDING_LEFT, Classification::NoOutput));
///
/// let (state, out) = evaluate(state, false, true);
/// assert_eq!((state, out), (PairState::LEFT_RIGHT, Classification::None));
/// ```
pub fn evaluate(state: PairState, left: bool, right: bool) -> (PairState, Classification) {
    debug_assert!(
        !(left && right),
        "both buttons pressed in one cycle from state {state}"
    );

    let event = PressEvent::from_flags(left, right).unwrap_or(PressEvent::Nothing);
    let step = apply(state, event);
    (step.next, step.classification)
}
