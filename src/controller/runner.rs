//! Polling loop tying input, classifier, and display together.

use crate::controller::error::ControllerError;
use crate::core::{Classification, PairState};
use crate::engine::PairClassifier;
use crate::io::{InputSource, OutputSink};
use tracing::{info, warn};

/// Single-threaded controller: poll, evaluate, render, in that order.
pub struct Controller<I, O> {
    input: I,
    display: O,
    classifier: PairClassifier,
    rejected: u64,
}

impl<I: InputSource, O: OutputSink> Controller<I, O> {
    /// Create a controller around an existing classifier.
    pub fn new(input: I, display: O, classifier: PairClassifier) -> Self {
        Self {
            input,
            display,
            classifier,
            rejected: 0,
        }
    }

    pub fn classifier(&self) -> &PairClassifier {
        &self.classifier
    }

    pub fn state(&self) -> PairState {
        self.classifier.state()
    }

    pub fn display(&self) -> &O {
        &self.display
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Snapshots dropped because both buttons reported a press.
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    /// Run one cycle.
    ///
    /// A snapshot with both presses set is logged and skipped; the cycle
    /// then reports `NoOutput`. Only sink failures are returned.
    pub fn run_cycle(&mut self) -> Result<Classification, ControllerError> {
        let snapshot = self.input.poll();

        let classification = match snapshot.to_event() {
            Ok(event) => self.classifier.step(event),
            Err(err) => {
                self.rejected += 1;
                warn!(state = %self.classifier.state(), "dropping input snapshot: {err}");
                return Ok(Classification::NoOutput);
            }
        };

        if classification.is_output() {
            self.display.render(classification)?;
        }
        Ok(classification)
    }

    /// Run `cycles` cycles, returning the classifications emitted.
    pub fn run_cycles(&mut self, cycles: usize) -> Result<Vec<Classification>, ControllerError> {
        let mut outputs = Vec::new();
        for _ in 0..cycles {
            let classification = self.run_cycle()?;
            if classification.is_output() {
                outputs.push(classification);
            }
        }
        Ok(outputs)
    }

    /// Poll forever. Returns only when the display fails.
    pub fn run(&mut self) -> Result<(), ControllerError> {
        info!(state = %self.classifier.state(), "controller loop started");
        loop {
            self.run_cycle()?;
        }
    }

    pub fn into_parts(self) -> (I, O, PairClassifier) {
        (self.input, self.display, self.classifier)
    }
}
