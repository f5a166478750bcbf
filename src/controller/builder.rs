//! Builder for constructing controllers.

use crate::controller::error::BuildError;
use crate::controller::runner::Controller;
use crate::engine::PairClassifier;
use crate::io::{InputSource, OutputSink};

/// Builder for constructing controllers with a fluent API.
///
/// # Example
///
/// ```rust
/// use pressfsm::controller::ControllerBuilder;
/// use pressfsm::core::{Button, PressEvent};
/// use pressfsm::io::{LabelDisplay, ScriptedInput};
///
/// let input = ScriptedInput::from_events([
///     PressEvent::Press(Button::Right),
///     PressEvent::Press(Button::Right),
/// ]);
///
/// let mut controller = ControllerBuilder::new()
///     .input(input)
///     .display(LabelDisplay::new())
///     .history_limit(8)
///     .build()
///     .unwrap();
///
/// controller.run_cycles(2).unwrap();
/// assert_eq!(controller.display().text(), "right");
/// ```
pub struct ControllerBuilder<I, O> {
    input: Option<I>,
    display: Option<O>,
    history_limit: Option<usize>,
}

impl<I: InputSource, O: OutputSink> ControllerBuilder<I, O> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            input: None,
            display: None,
            history_limit: None,
        }
    }

    /// Set the input source (required).
    pub fn input(mut self, input: I) -> Self {
        self.input = Some(input);
        self
    }

    /// Set the output sink (required).
    pub fn display(mut self, display: O) -> Self {
        self.display = Some(display);
        self
    }

    /// Record up to `limit` transitions (optional).
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Build the controller, starting in `Idle`.
    pub fn build(self) -> Result<Controller<I, O>, BuildError> {
        let input = self.input.ok_or(BuildError::MissingInput)?;
        let display = self.display.ok_or(BuildError::MissingDisplay)?;

        let classifier = match self.history_limit {
            Some(limit) => PairClassifier::with_history(limit),
            None => PairClassifier::new(),
        };

        Ok(Controller::new(input, display, classifier))
    }
}

impl<I: InputSource, O: OutputSink> Default for ControllerBuilder<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PairState;
    use crate::io::{LabelDisplay, ScriptedInput};

    #[test]
    fn builder_requires_input() {
        let result = ControllerBuilder::<ScriptedInput, LabelDisplay>::new()
            .display(LabelDisplay::new())
            .build();

        assert!(matches!(result, Err(BuildError::MissingInput)));
    }

    #[test]
    fn builder_requires_display() {
        let result = ControllerBuilder::<ScriptedInput, LabelDisplay>::new()
            .input(ScriptedInput::default())
            .build();

        assert!(matches!(result, Err(BuildError::MissingDisplay)));
    }

    #[test]
    fn history_limit_enables_recording() {
        let controller = ControllerBuilder::new()
            .input(ScriptedInput::default())
            .display(LabelDisplay::new())
            .history_limit(4)
            .build()
            .unwrap();

        assert_eq!(controller.state(), PairState::IDLE);
        let history = controller.classifier().history().unwrap();
        assert_eq!(history.limit(), Some(4));
    }

    #[test]
    fn history_is_off_by_default() {
        let controller = ControllerBuilder::new()
            .input(ScriptedInput::default())
            .display(LabelDisplay::new())
            .build()
            .unwrap();

        assert!(controller.classifier().history().is_none());
    }
}
