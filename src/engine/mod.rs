//! Stateful shell around the pure transition function.
//!
//! `PairClassifier` owns the persistent state explicitly; there is no
//! global state. It logs transitions through `tracing` and can keep a
//! bounded transition history.

mod machine;

pub use crate::core::InputError;
pub use machine::PairClassifier;
