//! Recognizer states
//!
//! A recognizer's live state is always exactly one `RecognizerState`. Sets of
//! states (`StateSet`) are only used for membership tests such as "is this a
//! terminal state" and for diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recognizer state
///
/// ```text
///               Possible
///                  |
///            +-----+---------------+
///            |                     |
///      +-----+-----+               |
///      |           |               |
///   Failed      Cancelled          |
///                          +-------+------+
///                          |              |
///                      Recognized       Began
///                                         |
///                                      Changed
///                                         |
///                                     Recognized
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecognizerState {
    Undefined,
    #[default]
    Possible,
    Began,
    Changed,
    Recognized,
    Cancelled,
    Failed,
}

impl RecognizerState {
    pub const ALL: [RecognizerState; 7] = [
        RecognizerState::Undefined,
        RecognizerState::Possible,
        RecognizerState::Began,
        RecognizerState::Changed,
        RecognizerState::Recognized,
        RecognizerState::Cancelled,
        RecognizerState::Failed,
    ];

    /// Bit flag encoding used by `StateSet`
    pub const fn bits(self) -> u8 {
        match self {
            RecognizerState::Undefined => 0,
            RecognizerState::Possible => 1,
            RecognizerState::Began => 2,
            RecognizerState::Changed => 4,
            RecognizerState::Recognized => 8,
            RecognizerState::Cancelled => 16,
            RecognizerState::Failed => 32,
        }
    }

    /// Event name suffix for this state ("start", "move", "end", "cancel")
    pub const fn suffix(self) -> &'static str {
        match self {
            RecognizerState::Cancelled => "cancel",
            RecognizerState::Recognized => "end",
            RecognizerState::Changed => "move",
            RecognizerState::Began => "start",
            _ => "",
        }
    }

    /// Recognized, cancelled or failed
    pub fn is_terminal(self) -> bool {
        StateSet::TERMINAL.contains(self)
    }

    /// States that request a notification
    pub fn is_emitting(self) -> bool {
        StateSet::EMITTING.contains(self)
    }

    /// States that claim ownership of an interaction
    pub fn is_active(self) -> bool {
        StateSet::ACTIVE.contains(self)
    }

    fn name(self) -> &'static str {
        match self {
            RecognizerState::Undefined => "UNDEFINED",
            RecognizerState::Possible => "POSSIBLE",
            RecognizerState::Began => "BEGAN",
            RecognizerState::Changed => "CHANGED",
            RecognizerState::Recognized => "RECOGNIZED",
            RecognizerState::Cancelled => "CANCELLED",
            RecognizerState::Failed => "FAILED",
        }
    }
}

impl fmt::Display for RecognizerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Set of recognizer states
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StateSet(u8);

impl StateSet {
    pub const EMPTY: StateSet = StateSet(0);
    /// Recognized, cancelled, failed
    pub const TERMINAL: StateSet = StateSet(8 | 16 | 32);
    /// Began, changed, recognized, cancelled
    pub const EMITTING: StateSet = StateSet(2 | 4 | 8 | 16);
    /// Began, changed, recognized
    pub const ACTIVE: StateSet = StateSet(2 | 4 | 8);
    /// States a required recognizer may be in without blocking emission
    pub const YIELDING: StateSet = StateSet(1 | 32);

    pub fn of(states: &[RecognizerState]) -> Self {
        states.iter().fold(Self::EMPTY, |set, state| set.with(*state))
    }

    pub const fn with(self, state: RecognizerState) -> Self {
        StateSet(self.0 | state.bits())
    }

    /// `Undefined` carries no bit and is never a member
    pub const fn contains(self, state: RecognizerState) -> bool {
        self.0 & state.bits() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = RecognizerState> {
        RecognizerState::ALL
            .into_iter()
            .filter(move |state| self.contains(*state))
    }
}

impl From<RecognizerState> for StateSet {
    fn from(state: RecognizerState) -> Self {
        StateSet::EMPTY.with(state)
    }
}

impl fmt::Display for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{}", RecognizerState::Undefined);
        }
        let names: Vec<String> = self.iter().map(|state| state.to_string()).collect();
        write!(f, "{}", names.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_possible() {
        assert_eq!(RecognizerState::default(), RecognizerState::Possible);
    }

    #[test]
    fn test_terminal_states() {
        let terminal: Vec<_> = RecognizerState::ALL
            .into_iter()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(
            terminal,
            vec![
                RecognizerState::Recognized,
                RecognizerState::Cancelled,
                RecognizerState::Failed
            ]
        );
    }

    #[test]
    fn test_emitting_and_active_sets() {
        assert!(RecognizerState::Cancelled.is_emitting());
        assert!(!RecognizerState::Cancelled.is_active());
        assert!(RecognizerState::Began.is_active());
        assert!(!RecognizerState::Possible.is_emitting());
        assert!(!RecognizerState::Failed.is_emitting());
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(RecognizerState::Began.suffix(), "start");
        assert_eq!(RecognizerState::Changed.suffix(), "move");
        assert_eq!(RecognizerState::Recognized.suffix(), "end");
        assert_eq!(RecognizerState::Cancelled.suffix(), "cancel");
        assert_eq!(RecognizerState::Possible.suffix(), "");
    }

    #[test]
    fn test_state_set_display() {
        let set = StateSet::of(&[RecognizerState::Failed, RecognizerState::Possible]);
        assert_eq!(set, StateSet::YIELDING);
        assert_eq!(set.to_string(), "POSSIBLE FAILED");
        assert_eq!(StateSet::EMPTY.to_string(), "UNDEFINED");
    }

    #[test]
    fn test_undefined_is_never_a_member() {
        assert!(!StateSet::of(&RecognizerState::ALL).contains(RecognizerState::Undefined));
    }
}
