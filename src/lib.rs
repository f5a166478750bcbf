//! Pressfsm: a finite-state controller for two-button press pairs
//!
//! Pressfsm classifies sequences of presses on two buttons. Two left
//! presses show "left", two right presses show "right", and one of each
//! shows "none". The next press after a completed pair resets the
//! controller without changing the label.
//!
//! The crate follows the "pure core, imperative shell" layout:
//!
//! - **core**: states, classifications, and the pure transition function
//! - **engine**: `PairClassifier`, the single owner of the persistent state
//! - **io**: input sources and output sinks around the classifier
//! - **controller**: the polling loop that runs input, engine, and display
//!
//! # Example
//!
//! ```rust
//! use pressfsm::core::{evaluate, Classification, PairState};
//!
//! let (state, out) = evaluate(PairState::IDLE, true, false);
//! assert_eq!(out, Classification::NoOutput);
//!
//! let (state, out) = evaluate(state, true, false);
//! assert_eq!((state, out), (PairState::LEFT_LEFT, Classification::Left));
//!
//! // A third press resets silently.
//! let (state, out) = evaluate(state, false, true);
//! assert_eq!((state, out), (PairState::IDLE, Classification::NoOutput));
//! ```

pub mod config;
pub mod controller;
pub mod core;
pub mod engine;
pub mod io;

// Re-export commonly used types
pub use controller::{Controller, ControllerBuilder};
pub use self::core::{evaluate, Button, Classification, PairState, PressEvent};
pub use engine::PairClassifier;
