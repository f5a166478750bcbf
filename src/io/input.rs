//! Input sources that yield one press snapshot per cycle.

use crate::core::{Button, InputError, PressEvent};
use std::collections::VecDeque;

/// Press flags for one cycle.
///
/// Each flag reports a fresh, already debounced press edge, not a held level.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ButtonSnapshot {
    pub left: bool,
    pub right: bool,
}

impl ButtonSnapshot {
    pub const NONE: Self = Self {
        left: false,
        right: false,
    };
    pub const LEFT: Self = Self {
        left: true,
        right: false,
    };
    pub const RIGHT: Self = Self {
        left: false,
        right: true,
    };

    pub fn to_event(self) -> Result<PressEvent, InputError> {
        PressEvent::from_flags(self.left, self.right)
    }
}

impl From<PressEvent> for ButtonSnapshot {
    fn from(event: PressEvent) -> Self {
        match event {
            PressEvent::Nothing => Self::NONE,
            PressEvent::Press(Button::Left) => Self::LEFT,
            PressEvent::Press(Button::Right) => Self::RIGHT,
        }
    }
}

/// Source of press snapshots, polled once per cycle.
///
/// `poll` must not block: it returns the most recent edge state immediately.
pub trait InputSource {
    fn poll(&mut self) -> ButtonSnapshot;
}

impl<F> InputSource for F
where
    F: FnMut() -> ButtonSnapshot,
{
    fn poll(&mut self) -> ButtonSnapshot {
        self()
    }
}

/// Replays a fixed sequence of snapshots, then reports no presses.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    pending: VecDeque<ButtonSnapshot>,
}

impl ScriptedInput {
    pub fn new(snapshots: impl IntoIterator<Item = ButtonSnapshot>) -> Self {
        Self {
            pending: snapshots.into_iter().collect(),
        }
    }

    pub fn from_events(events: impl IntoIterator<Item = PressEvent>) -> Self {
        Self::new(events.into_iter().map(ButtonSnapshot::from))
    }

    /// Queue one more snapshot behind those already pending.
    pub fn push(&mut self, snapshot: ButtonSnapshot) {
        self.pending.push_back(snapshot);
    }

    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> ButtonSnapshot {
        self.pending.pop_front().unwrap_or_default()
    }
}

/// Majority-style debouncer for one raw input level.
#[derive(Clone, Copy, Debug, Default)]
struct Debounce {
    stable: bool,
    candidate: bool,
    count: u8,
}

impl Debounce {
    /// Feed one raw sample; returns true on a debounced press edge.
    fn sample(&mut self, raw: bool, threshold: u8) -> bool {
        if raw == self.candidate {
            self.count = self.count.saturating_add(1);
        } else {
            self.candidate = raw;
            self.count = 1;
        }

        if self.count >= threshold && self.stable != self.candidate {
            self.stable = self.candidate;
            return self.stable;
        }
        false
    }
}

/// Turns raw held levels into single press edges.
///
/// A level must read the same for `stable_samples` consecutive polls before
/// it counts, and a held button reports exactly one press.
///
/// # Example
///
/// ```rust
/// use pressfsm::io::{ButtonSnapshot, EdgeDetector, InputSource};
///
/// let levels = vec![(true, false); 4];
/// let mut raw = levels.into_iter();
/// let mut detector = EdgeDetector::new(move || raw.next().unwrap_or((false, false)), 2);
///
/// assert_eq!(detector.poll(), ButtonSnapshot::NONE);
/// assert_eq!(detector.poll(), ButtonSnapshot::LEFT);
/// assert_eq!(detector.poll(), ButtonSnapshot::NONE);
/// assert_eq!(detector.poll(), ButtonSnapshot::NONE);
/// ```
pub struct EdgeDetector<F> {
    read_levels: F,
    stable_samples: u8,
    left: Debounce,
    right: Debounce,
}

impl<F> EdgeDetector<F>
where
    F: FnMut() -> (bool, bool),
{
    /// `read_levels` returns the raw (left, right) levels, true when held.
    pub fn new(read_levels: F, stable_samples: u8) -> Self {
        Self {
            read_levels,
            stable_samples: stable_samples.max(1),
            left: Debounce::default(),
            right: Debounce::default(),
        }
    }
}

impl<F> InputSource for EdgeDetector<F>
where
    F: FnMut() -> (bool, bool),
{
    fn poll(&mut self) -> ButtonSnapshot {
        let (left, right) = (self.read_levels)();
        ButtonSnapshot {
            left: self.left.sample(left, self.stable_samples),
            right: self.right.sample(right, self.stable_samples),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector_over(
        levels: Vec<(bool, bool)>,
        stable_samples: u8,
    ) -> EdgeDetector<impl FnMut() -> (bool, bool)> {
        let mut levels = levels.into_iter();
        EdgeDetector::new(move || levels.next().unwrap_or((false, false)), stable_samples)
    }

    #[test]
    fn snapshot_converts_to_event() {
        assert_eq!(ButtonSnapshot::NONE.to_event(), Ok(PressEvent::Nothing));
        assert_eq!(
            ButtonSnapshot::LEFT.to_event(),
            Ok(PressEvent::Press(Button::Left))
        );
        let both = ButtonSnapshot {
            left: true,
            right: true,
        };
        assert_eq!(both.to_event(), Err(InputError::SimultaneousPress));
    }

    #[test]
    fn scripted_input_replays_then_idles() {
        let mut input = ScriptedInput::from_events([
            PressEvent::Press(Button::Right),
            PressEvent::Nothing,
        ]);
        assert_eq!(input.remaining(), 2);

        assert_eq!(input.poll(), ButtonSnapshot::RIGHT);
        assert_eq!(input.poll(), ButtonSnapshot::NONE);
        assert!(input.is_exhausted());
        assert_eq!(input.poll(), ButtonSnapshot::NONE);

        input.push(ButtonSnapshot::LEFT);
        assert_eq!(input.poll(), ButtonSnapshot::LEFT);
    }

    #[test]
    fn closures_are_input_sources() {
        let mut source = || ButtonSnapshot::LEFT;
        assert_eq!(InputSource::poll(&mut source), ButtonSnapshot::LEFT);
    }

    #[test]
    fn held_button_presses_once() {
        let mut detector = detector_over(vec![(true, false); 10], 1);

        let presses = (0..10).filter(|_| detector.poll().left).count();
        assert_eq!(presses, 1);
    }

    #[test]
    fn bounce_shorter_than_threshold_is_ignored() {
        let levels = vec![(true, false), (false, false), (true, false), (false, false)];
        let mut detector = detector_over(levels, 2);

        for _ in 0..4 {
            assert_eq!(detector.poll(), ButtonSnapshot::NONE);
        }
    }

    #[test]
    fn release_and_press_again_yields_second_edge() {
        let levels = vec![
            (false, true),
            (false, true),
            (false, false),
            (false, false),
            (false, true),
            (false, true),
        ];
        let mut detector = detector_over(levels, 2);

        let edges: Vec<bool> = (0..6).map(|_| detector.poll().right).collect();
        assert_eq!(edges, vec![false, true, false, false, false, true]);
    }
}
