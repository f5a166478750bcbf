//! Imperative shell: the polling loop and its builder.

pub mod builder;
pub mod error;
pub mod runner;

pub use builder::ControllerBuilder;
pub use error::{BuildError, ControllerError};
pub use runner::Controller;
