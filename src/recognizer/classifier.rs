//! Gesture classifier trait
//!
//! Defines the contract concrete gesture classifiers (pan, tap, swipe, ...)
//! implement. The `Recognizer` owns a classifier and drives it through the
//! shared state machine.

use crate::processing::compute::ComputedInput;
use crate::recognizer::state::RecognizerState;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Native scroll/zoom hint a classifier would like the rendering layer to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TouchAction {
    Auto,
    None,
    PanX,
    PanY,
    Manipulation,
}

impl TouchAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            TouchAction::Auto => "auto",
            TouchAction::None => "none",
            TouchAction::PanX => "pan-x",
            TouchAction::PanY => "pan-y",
            TouchAction::Manipulation => "manipulation",
        }
    }
}

impl fmt::Display for TouchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TouchAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(TouchAction::Auto),
            "none" => Ok(TouchAction::None),
            "pan-x" => Ok(TouchAction::PanX),
            "pan-y" => Ok(TouchAction::PanY),
            "manipulation" => Ok(TouchAction::Manipulation),
            other => Err(format!("Unknown touch action: {}", other)),
        }
    }
}

/// Trait for gesture classifiers
///
/// `process` is called once per cycle while the recognizer is allowed to run
/// and must not block. It receives the recognizer's current state (already
/// reset to `Possible` after a terminal state) and returns the next one.
pub trait GestureClassifier {
    /// Classify one computed input
    fn process(&mut self, input: &ComputedInput, state: RecognizerState) -> RecognizerState;

    /// Touch-action hints this classifier needs
    fn touch_action(&self) -> Vec<TouchAction> {
        Vec::new()
    }

    /// Called whenever the recognizer is excluded from a cycle or disabled
    fn reset(&mut self) {}
}

impl<F> GestureClassifier for F
where
    F: FnMut(&ComputedInput, RecognizerState) -> RecognizerState,
{
    fn process(&mut self, input: &ComputedInput, state: RecognizerState) -> RecognizerState {
        self(input, state)
    }
}
