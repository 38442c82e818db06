//! Test helpers: a classifier that replays a fixed list of states

use crate::input::InputType;
use crate::processing::compute::ComputedInput;
use crate::processing::direction::Direction;
use crate::processing::geometry::Point;
use crate::recognizer::classifier::{GestureClassifier, TouchAction};
use crate::recognizer::state::RecognizerState;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Default)]
struct ProbeData {
    calls: usize,
    resets: usize,
    seen_states: Vec<RecognizerState>,
}

/// Observes a `Scripted` classifier after it has been moved into a recognizer
#[derive(Debug, Clone, Default)]
pub(crate) struct ScriptProbe(Rc<RefCell<ProbeData>>);

impl ScriptProbe {
    pub(crate) fn calls(&self) -> usize {
        self.0.borrow().calls
    }

    pub(crate) fn resets(&self) -> usize {
        self.0.borrow().resets
    }

    /// State handed to each `process` call
    pub(crate) fn seen_states(&self) -> Vec<RecognizerState> {
        self.0.borrow().seen_states.clone()
    }
}

/// Returns queued states in order, then holds the current state
pub(crate) struct Scripted {
    steps: VecDeque<RecognizerState>,
    actions: Vec<TouchAction>,
    probe: ScriptProbe,
}

impl Scripted {
    pub(crate) fn new(steps: impl IntoIterator<Item = RecognizerState>) -> (Self, ScriptProbe) {
        let probe = ScriptProbe::default();
        let scripted = Self {
            steps: steps.into_iter().collect(),
            actions: Vec::new(),
            probe: probe.clone(),
        };
        (scripted, probe)
    }

    pub(crate) fn with_actions(mut self, actions: impl IntoIterator<Item = TouchAction>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }
}

impl GestureClassifier for Scripted {
    fn process(&mut self, _input: &ComputedInput, state: RecognizerState) -> RecognizerState {
        let mut data = self.probe.0.borrow_mut();
        data.calls += 1;
        data.seen_states.push(state);
        self.steps.pop_front().unwrap_or(state)
    }

    fn touch_action(&self) -> Vec<TouchAction> {
        self.actions.clone()
    }

    fn reset(&mut self) {
        self.probe.0.borrow_mut().resets += 1;
    }
}

/// A single-touch move input at the origin
pub(crate) fn sample_input() -> ComputedInput {
    ComputedInput {
        input_type: InputType::Move,
        touches_len: 1,
        timestamp_ms: 0.0,
        center: Some(Point::new(0.0, 0.0)),
        movement: None,
        elapsed_ms: 0.0,
        distance: 0.0,
        direction: Direction::UNDEFINED,
        scale: 1.0,
        rotation: 0.0,
        velocity: None,
        is_first: false,
        is_final: false,
    }
}
