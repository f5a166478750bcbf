//! Classification produced by each evaluation.

use super::state::Button;
use serde::{Deserialize, Serialize};

/// Result of a single evaluation.
///
/// `NoOutput` means the displayed label must not change this cycle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Classification {
    Left,
    Right,
    None,
    #[default]
    NoOutput,
}

impl Classification {
    /// Classify a completed pair: the same button twice names that button,
    /// a mixed pair is `None`.
    pub fn of_pair(first: Button, second: Button) -> Self {
        match (first, second) {
            (Button::Left, Button::Left) => Self::Left,
            (Button::Right, Button::Right) => Self::Right,
            _ => Self::None,
        }
    }

    /// Text shown for this classification, or `None` when nothing is shown.
    ///
    /// ```rust
    /// use pressfsm::core::Classification;
    ///
    /// assert_eq!(Classification::Left.label(), Some("left"));
    /// assert_eq!(Classification::None.label(), Some("none"));
    /// assert_eq!(Classification::NoOutput.label(), None);
    /// ```
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Left => Some("left"),
            Self::Right => Some("right"),
            Self::None => Some("none"),
            Self::NoOutput => None,
        }
    }

    pub fn is_output(&self) -> bool {
        !matches!(self, Self::NoOutput)
    }
}
