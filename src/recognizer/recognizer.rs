//! Recognizer state machine
//!
//! Every recognizer follows the same per-cycle flow:
//!
//! 1. a disabled recognizer is reset and forced to `Failed`;
//! 2. a terminal state (`Recognized`, `Cancelled`, `Failed`) goes back to
//!    `Possible` so each cycle gets a fresh chance;
//! 3. the classifier computes the next state;
//! 4. an emitting state (`Began`, `Changed`, `Recognized`, `Cancelled`) tries
//!    to emit, which only succeeds once every required recognizer has failed
//!    or is still possible. Otherwise the recognizer concedes with `Failed`.
//!
//! Recognizers refer to each other only by `RecognizerId`; the states of
//! other recognizers are looked up through `PeerStates`.

use crate::processing::compute::ComputedInput;
use crate::recognizer::classifier::{GestureClassifier, TouchAction};
use crate::recognizer::state::{RecognizerState, StateSet};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Stable identity of a recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecognizerId(Uuid);

impl RecognizerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecognizerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecognizerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read access to the current state of other recognizers
pub trait PeerStates {
    /// `None` if no recognizer with this identity is registered
    fn state_of(&self, id: RecognizerId) -> Option<RecognizerState>;
}

impl PeerStates for [Recognizer] {
    fn state_of(&self, id: RecognizerId) -> Option<RecognizerState> {
        self.iter().find(|r| r.id == id).map(|r| r.state)
    }
}

/// The recognizers around the one currently being dispatched
pub struct Peers<'a> {
    pub before: &'a [Recognizer],
    pub after: &'a [Recognizer],
}

impl PeerStates for Peers<'_> {
    fn state_of(&self, id: RecognizerId) -> Option<RecognizerState> {
        self.before.state_of(id).or_else(|| self.after.state_of(id))
    }
}

/// A single gesture notification
#[derive(Debug, Clone, Copy)]
pub struct Notification<'a> {
    /// Full event name, e.g. "pan" or "panstart"
    pub name: &'a str,
    /// Bare event name of the emitting recognizer
    pub event_name: &'a str,
    pub recognizer: RecognizerId,
    pub state: RecognizerState,
    pub input: &'a ComputedInput,
}

/// Receiver of gesture notifications
pub trait NotificationSink {
    fn notify(&mut self, notification: &Notification<'_>);
}

impl<F> NotificationSink for F
where
    F: FnMut(&Notification<'_>),
{
    fn notify(&mut self, notification: &Notification<'_>) {
        self(notification)
    }
}

pub struct Recognizer {
    id: RecognizerId,
    event_name: String,
    enabled: bool,
    state: RecognizerState,
    simultaneous: HashSet<RecognizerId>,
    require_fail: Vec<RecognizerId>,
    classifier: Box<dyn GestureClassifier>,
}

impl fmt::Debug for Recognizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recognizer")
            .field("id", &self.id)
            .field("event_name", &self.event_name)
            .field("enabled", &self.enabled)
            .field("state", &self.state)
            .field("simultaneous", &self.simultaneous)
            .field("require_fail", &self.require_fail)
            .finish_non_exhaustive()
    }
}

impl Recognizer {
    /// Create an enabled recognizer in the `Possible` state
    pub fn new(event_name: impl Into<String>, classifier: impl GestureClassifier + 'static) -> Self {
        Self {
            id: RecognizerId::new(),
            event_name: event_name.into(),
            enabled: true,
            state: RecognizerState::Possible,
            simultaneous: HashSet::new(),
            require_fail: Vec::new(),
            classifier: Box::new(classifier),
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn id(&self) -> RecognizerId {
        self.id
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn state(&self) -> RecognizerState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// True if this recognizer may run while `other` owns the interaction
    pub fn can_recognize_with(&self, other: RecognizerId) -> bool {
        self.simultaneous.contains(&other)
    }

    pub fn has_require_failures(&self) -> bool {
        !self.require_fail.is_empty()
    }

    pub fn require_failures(&self) -> &[RecognizerId] {
        &self.require_fail
    }

    pub fn simultaneous(&self) -> impl Iterator<Item = RecognizerId> + '_ {
        self.simultaneous.iter().copied()
    }

    pub fn touch_action(&self) -> Vec<TouchAction> {
        self.classifier.touch_action()
    }

    pub(crate) fn add_simultaneous(&mut self, other: RecognizerId) -> bool {
        self.simultaneous.insert(other)
    }

    pub(crate) fn remove_simultaneous(&mut self, other: RecognizerId) -> bool {
        self.simultaneous.remove(&other)
    }

    pub(crate) fn add_require_failure(&mut self, other: RecognizerId) -> bool {
        if self.require_fail.contains(&other) {
            return false;
        }
        self.require_fail.push(other);
        true
    }

    pub(crate) fn remove_require_failure(&mut self, other: RecognizerId) -> bool {
        let before = self.require_fail.len();
        self.require_fail.retain(|id| *id != other);
        self.require_fail.len() != before
    }

    /// Drop every relation to `other`
    pub(crate) fn forget(&mut self, other: RecognizerId) {
        self.remove_simultaneous(other);
        self.remove_require_failure(other);
    }

    /// True if every required recognizer has failed or is still possible
    ///
    /// Required recognizers that are no longer registered do not block.
    pub fn can_emit(&self, peers: &(impl PeerStates + ?Sized)) -> bool {
        self.require_fail.iter().all(|id| {
            peers
                .state_of(*id)
                .map_or(true, |state| StateSet::YIELDING.contains(state))
        })
    }

    /// Run one recognition cycle
    pub fn recognize(
        &mut self,
        input: &ComputedInput,
        peers: &(impl PeerStates + ?Sized),
        sink: &mut (impl NotificationSink + ?Sized),
    ) {
        if !self.enabled {
            self.classifier.reset();
            self.state = RecognizerState::Failed;
            return;
        }

        if self.state.is_terminal() {
            self.state = RecognizerState::Possible;
        }

        let previous = self.state;
        self.state = self.classifier.process(input, self.state);
        if self.state != previous {
            tracing::trace!(
                "Recognizer '{}' {} -> {}",
                self.event_name,
                previous,
                self.state
            );
        }

        if self.state.is_emitting() {
            self.try_emit(input, peers, sink);
        }
    }

    /// Reset hook for a cycle this recognizer is excluded from
    pub fn reset(&mut self) {
        self.classifier.reset();
        if !self.enabled {
            self.state = RecognizerState::Failed;
        }
    }

    fn try_emit(
        &mut self,
        input: &ComputedInput,
        peers: &(impl PeerStates + ?Sized),
        sink: &mut (impl NotificationSink + ?Sized),
    ) {
        if self.can_emit(peers) {
            self.emit(input, sink);
            return;
        }
        tracing::trace!(
            "Recognizer '{}' blocked by a required recognizer, conceding",
            self.event_name
        );
        self.state = RecognizerState::Failed;
    }

    /// Notify the bare name and the state-suffixed name
    ///
    /// Start/move notifications precede the bare name; end/cancel follow it,
    /// so bare-name listeners always see a matching bracket.
    fn emit(&self, input: &ComputedInput, sink: &mut (impl NotificationSink + ?Sized)) {
        let with_state = format!("{}{}", self.event_name, self.state.suffix());
        let names = match self.state {
            RecognizerState::Began | RecognizerState::Changed => {
                [with_state.as_str(), self.event_name.as_str()]
            }
            RecognizerState::Recognized | RecognizerState::Cancelled => {
                [self.event_name.as_str(), with_state.as_str()]
            }
            _ => return,
        };

        for name in names {
            sink.notify(&Notification {
                name,
                event_name: &self.event_name,
                recognizer: self.id,
                state: self.state,
                input,
            });
        }
    }
}
