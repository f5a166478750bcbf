//! Controller and builder errors.

use crate::io::DisplayError;
use thiserror::Error;

/// Errors that can occur when building a controller.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Input source not specified. Call .input(source) before .build()")]
    MissingInput,

    #[error("Output sink not specified. Call .display(sink) before .build()")]
    MissingDisplay,
}

/// Errors that stop the polling loop
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Display(#[from] DisplayError),
}
