//! Gesture recognizers
//!
//! Implements the recognizer state machine shared by every gesture, the
//! classifier contract concrete gestures plug into, and the coordination
//! relations (simultaneous recognition, require-failure) between recognizers.

pub mod classifier;
#[allow(clippy::module_inception)]
pub mod recognizer;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use classifier::{GestureClassifier, TouchAction};
pub use recognizer::{
    Notification, NotificationSink, PeerStates, Peers, Recognizer, RecognizerId,
};
pub use state::{RecognizerState, StateSet};
