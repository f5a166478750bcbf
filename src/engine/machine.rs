//! Classifier that owns the persistent state.

use crate::core::{
    apply, Classification, InputError, PairState, PressEvent, PressHistory, Rule, TransitionRecord,
};
use chrono::Utc;
use tracing::{debug, info, trace};

/// Owner of the one persistent `PairState`.
///
/// Construct one per physical button pair at startup. `step` is the only
/// way the state changes during normal operation.
///
/// # Example
///
/// ```rust
/// use pressfsm::core::{Button, Classification, PairState, PressEvent};
/// use pressfsm::engine::PairClassifier;
///
/// let mut classifier = PairClassifier::new();
/// assert_eq!(classifier.step(PressEvent::Press(Button::Left)), Classification::NoOutput);
/// assert_eq!(classifier.step(PressEvent::Press(Button::Left)), Classification::Left);
/// assert_eq!(classifier.state(), PairState::LEFT_LEFT);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PairClassifier {
    current: PairState,
    cycles: u64,
    history: Option<PressHistory>,
}

impl PairClassifier {
    /// Create a classifier in `Idle` without history recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier that records up to `limit` transitions.
    pub fn with_history(limit: usize) -> Self {
        Self {
            history: Some(PressHistory::bounded(limit)),
            ..Self::default()
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> PairState {
        self.current
    }

    /// Number of evaluations performed, including no-op cycles.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Get recorded history, if recording is enabled (pure)
    pub fn history(&self) -> Option<&PressHistory> {
        self.history.as_ref()
    }

    /// Evaluate one cycle.
    pub fn step(&mut self, event: PressEvent) -> Classification {
        self.cycles += 1;
        let from = self.current;
        let step = apply(from, event);

        if step.rule == Rule::Hold {
            trace!(state = %from, cycle = self.cycles, "no press");
            return step.classification;
        }

        debug!(
            from = %from,
            to = %step.next,
            rule = ?step.rule,
            cycle = self.cycles,
            "state transition"
        );
        if let Some(label) = step.classification.label() {
            info!(label = label, pair = %step.next, "pair classified");
        }

        if let Some(history) = &self.history {
            self.history = Some(history.record(TransitionRecord {
                from,
                to: step.next,
                event,
                classification: step.classification,
                rule: step.rule,
                cycle: self.cycles,
                timestamp: Utc::now(),
            }));
        }

        self.current = step.next;
        step.classification
    }

    /// Evaluate one cycle from the two press flags.
    ///
    /// A snapshot with both flags set is rejected and leaves the state and
    /// cycle count untouched.
    pub fn step_flags(&mut self, left: bool, right: bool) -> Result<Classification, InputError> {
        let event = PressEvent::from_flags(left, right)?;
        Ok(self.step(event))
    }

    /// Return to `Idle`, keeping history and the cycle count.
    pub fn reset(&mut self) {
        debug!(from = %self.current, "classifier reset");
        self.current = PairState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Button;

    const L: PressEvent = PressEvent::Press(Button::Left);
    const R: PressEvent = PressEvent::Press(Button::Right);

    #[test]
    fn starts_idle() {
        let classifier = PairClassifier::new();
        assert_eq!(classifier.state(), PairState::IDLE);
        assert_eq!(classifier.cycles(), 0);
        assert!(classifier.history().is_none());
    }

    #[test]
    fn right_then_left_is_none() {
        let mut classifier = PairClassifier::new();

        assert_eq!(classifier.step(R), Classification::NoOutput);
        assert_eq!(classifier.state(), PairState::PENDING_RIGHT);
        assert_eq!(classifier.step(L), Classification::None);
        assert_eq!(classifier.state(), PairState::RIGHT_LEFT);
    }

    #[test]
    fn third_press_resets_silently() {
        let mut classifier = PairClassifier::new();
        classifier.step(R);
        classifier.step(R);

        assert_eq!(classifier.step(L), Classification::NoOutput);
        assert_eq!(classifier.state(), PairState::IDLE);
    }

    #[test]
    fn idle_cycles_count_but_do_not_change_state() {
        let mut classifier = PairClassifier::new();
        classifier.step(L);
        for _ in 0..5 {
            assert_eq!(classifier.step(PressEvent::Nothing), Classification::NoOutput);
        }

        assert_eq!(classifier.state(), PairState::PENDING_LEFT);
        assert_eq!(classifier.cycles(), 6);
    }

    #[test]
    fn step_flags_rejects_simultaneous_press() {
        let mut classifier = PairClassifier::new();
        classifier.step(L);

        assert_eq!(
            classifier.step_flags(true, true),
            Err(InputError::SimultaneousPress)
        );
        assert_eq!(classifier.state(), PairState::PENDING_LEFT);
        assert_eq!(classifier.cycles(), 1);

        assert_eq!(classifier.step_flags(false, true), Ok(Classification::None));
    }

    #[test]
    fn history_skips_idle_cycles() {
        let mut classifier = PairClassifier::with_history(16);
        classifier.step(L);
        classifier.step(PressEvent::Nothing);
        classifier.step(R);
        classifier.step(PressEvent::Nothing);
        classifier.step(R);

        let history = classifier.history().unwrap();
        assert_eq!(
            history.get_path(),
            vec![
                PairState::IDLE,
                PairState::PENDING_LEFT,
                PairState::LEFT_RIGHT,
                PairState::IDLE,
            ]
        );
        let cycles: Vec<u64> = history.records().iter().map(|r| r.cycle).collect();
        assert_eq!(cycles, vec![1, 3, 5]);
        assert_eq!(history.outputs(), vec![Classification::None]);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut classifier = PairClassifier::new();
        classifier.step(L);
        classifier.reset();

        assert_eq!(classifier.state(), PairState::IDLE);
        assert_eq!(classifier.cycles(), 1);
    }
}
