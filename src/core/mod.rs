//! Core classifier types and logic.
//!
//! This module contains the pure functional core of the controller:
//! - The seven-state `PairState` and its tiers
//! - The `Classification` each evaluation produces
//! - The transition function and its named rules
//! - Immutable history tracking
//!
//! Nothing in this module performs I/O or holds mutable state.

mod classification;
mod history;
mod state;
mod transition;

pub use classification::Classification;
pub use history::{PressHistory, TransitionRecord};
pub use state::{Button, PairState, Tier};
pub use transition::{apply, evaluate, InputError, PressEvent, Rule, Step};
