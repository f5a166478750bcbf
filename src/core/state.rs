//! Controller states.
//!
//! The seven states form three tiers: nothing recorded, one press recorded,
//! and a completed pair waiting for the press that resets it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two physical inputs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Button {
    Left,
    Right,
}

impl Button {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

/// How many presses the current state has recorded.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Tier {
    Zero,
    One,
    Two,
}

/// Current position of the pair classifier.
///
/// Tier-2 states share a single variant so the reset rule is written once.
///
/// # Example
///
/// ```rust
/// use pressfsm::core::{Button, PairState, Tier};
///
/// let state = PairState::Pending(Button::Left);
/// assert_eq!(state, PairState::PENDING_LEFT);
/// assert_eq!(state.tier(), Tier::One);
/// assert_eq!(state.name(), "PendingLeft");
/// assert!(!state.is_complete());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum PairState {
    /// No press recorded.
    #[default]
    Idle,
    /// First press recorded.
    Pending(Button),
    /// Pair recorded; the next press of either button resets.
    Complete { first: Button, second: Button },
}

impl PairState {
    pub const IDLE: Self = Self::Idle;
    pub const PENDING_LEFT: Self = Self::Pending(Button::Left);
    pub const PENDING_RIGHT: Self = Self::Pending(Button::Right);
    pub const LEFT_LEFT: Self = Self::Complete {
        first: Button::Left,
        second: Button::Left,
    };
    pub const LEFT_RIGHT: Self = Self::Complete {
        first: Button::Left,
        second: Button::Right,
    };
    pub const RIGHT_LEFT: Self = Self::Complete {
        first: Button::Right,
        second: Button::Left,
    };
    pub const RIGHT_RIGHT: Self = Self::Complete {
        first: Button::Right,
        second: Button::Right,
    };

    /// Every reachable state, in tier order.
    pub const ALL: [Self; 7] = [
        Self::IDLE,
        Self::PENDING_LEFT,
        Self::PENDING_RIGHT,
        Self::LEFT_LEFT,
        Self::LEFT_RIGHT,
        Self::RIGHT_LEFT,
        Self::RIGHT_RIGHT,
    ];

    /// State name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Pending(Button::Left) => "PendingLeft",
            Self::Pending(Button::Right) => "PendingRight",
            Self::Complete {
                first: Button::Left,
                second: Button::Left,
            } => "LeftLeft",
            Self::Complete {
                first: Button::Left,
                second: Button::Right,
            } => "LeftRight",
            Self::Complete {
                first: Button::Right,
                second: Button::Left,
            } => "RightLeft",
            Self::Complete {
                first: Button::Right,
                second: Button::Right,
            } => "RightRight",
        }
    }

    pub fn tier(&self) -> Tier {
        match self {
            Self::Idle => Tier::Zero,
            Self::Pending(_) => Tier::One,
            Self::Complete { .. } => Tier::Two,
        }
    }

    /// Check if a pair has been recorded.
    ///
    /// Complete states are terminal until the next press resets them.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }
}

impl fmt::Display for PairState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
