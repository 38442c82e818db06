//! Gesture manager
//!
//! Owns the registered recognizers, the per-interaction session, the touch
//! tracker and the handler registry. Every raw sample delivered to `handle`
//! is resolved, normalized and fed to each recognizer in registration order.

use crate::error::{GestureError, GestureResult};
use crate::input::{InputType, RawSample, TargetScope, TouchTracker};
use crate::manager::config::ManagerConfig;
use crate::manager::handlers::{Dispatcher, GestureEvent, HandlerId, HandlerRegistry};
use crate::manager::touch_action::clean_touch_actions;
use crate::processing::compute::{compute_input, ComputedInput};
use crate::processing::session::{Session, StopLevel};
use crate::recognizer::{PeerStates, Peers, Recognizer, RecognizerId, RecognizerState, TouchAction};
use crate::recorder::SampleRecording;

#[derive(Debug)]
pub struct Manager {
    config: ManagerConfig,
    enabled: bool,
    recognizers: Vec<Recognizer>,
    session: Session,
    tracker: TouchTracker,
    handlers: HandlerRegistry,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    pub fn new() -> Self {
        Self::build(ManagerConfig::default())
    }

    /// Create a manager from a validated configuration
    pub fn with_config(config: ManagerConfig) -> GestureResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ManagerConfig) -> Self {
        Self {
            enabled: config.enabled,
            session: Session::with_max_history(config.max_history),
            recognizers: Vec::new(),
            tracker: TouchTracker::new(),
            handlers: HandlerRegistry::new(),
            config,
        }
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Gate sample processing; a disabled manager ignores every sample
    pub fn set_enabled(&mut self, enabled: bool) {
        tracing::debug!("Manager {}", if enabled { "enabled" } else { "disabled" });
        self.enabled = enabled;
    }

    /// Restrict tracked touches to the given scope
    pub fn set_scope(&mut self, scope: impl TargetScope + 'static) {
        self.tracker.set_scope(scope);
    }

    // ------------------------------------------------------------------
    // Registry
    // ------------------------------------------------------------------

    /// Register a recognizer, replacing any recognizer with the same event name
    ///
    /// The new recognizer always goes to the end of the dispatch order.
    pub fn add(&mut self, recognizer: Recognizer) -> RecognizerId {
        if self.remove(recognizer.event_name()).is_some() {
            tracing::debug!("Replacing recognizer '{}'", recognizer.event_name());
        }
        let id = recognizer.id();
        tracing::debug!("Registered recognizer '{}' ({})", recognizer.event_name(), id);
        self.recognizers.push(recognizer);
        id
    }

    pub fn get(&self, name: &str) -> Option<&Recognizer> {
        self.recognizers.iter().find(|r| r.event_name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Recognizer> {
        self.recognizers.iter_mut().find(|r| r.event_name() == name)
    }

    /// Recognizers in dispatch order
    pub fn recognizers(&self) -> &[Recognizer] {
        &self.recognizers
    }

    /// Unregister a recognizer and drop every relation pointing at it
    pub fn remove(&mut self, name: &str) -> Option<Recognizer> {
        let index = self.index_of(name)?;
        let removed = self.recognizers.remove(index);
        let id = removed.id();

        for recognizer in &mut self.recognizers {
            recognizer.forget(id);
        }
        if self.session.owner() == Some(id) {
            self.session.set_owner(None);
        }

        tracing::debug!("Removed recognizer '{}'", name);
        Some(removed)
    }

    pub fn set_recognizer_enabled(&mut self, name: &str, enabled: bool) -> GestureResult<()> {
        let recognizer = self
            .get_mut(name)
            .ok_or_else(|| GestureError::UnknownRecognizer(name.to_string()))?;
        recognizer.set_enabled(enabled);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Coordination
    // ------------------------------------------------------------------

    /// Allow `a` and `b` to be recognized at the same time (both directions)
    pub fn recognize_with(&mut self, a: &str, b: &str) -> GestureResult<()> {
        let (a_index, b_index) = self.pair(a, b)?;
        let (a_id, b_id) = (self.recognizers[a_index].id(), self.recognizers[b_index].id());

        self.recognizers[a_index].add_simultaneous(b_id);
        self.recognizers[b_index].add_simultaneous(a_id);
        tracing::debug!("'{}' and '{}' may recognize simultaneously", a, b);
        Ok(())
    }

    /// Stop `a` from running alongside `b`; `b` keeps its own permission
    pub fn drop_recognize_with(&mut self, a: &str, b: &str) -> GestureResult<()> {
        let (a_index, b_index) = self.pair(a, b)?;
        let b_id = self.recognizers[b_index].id();

        self.recognizers[a_index].remove_simultaneous(b_id);
        tracing::debug!("'{}' no longer recognizes with '{}'", a, b);
        Ok(())
    }

    /// Make `a` wait for `b` to fail before emitting
    pub fn require_failure(&mut self, a: &str, b: &str) -> GestureResult<()> {
        let (a_index, b_index) = self.pair(a, b)?;
        let b_id = self.recognizers[b_index].id();

        self.recognizers[a_index].add_require_failure(b_id);
        tracing::debug!("'{}' requires '{}' to fail", a, b);
        Ok(())
    }

    pub fn drop_require_failure(&mut self, a: &str, b: &str) -> GestureResult<()> {
        let (a_index, b_index) = self.pair(a, b)?;
        let b_id = self.recognizers[b_index].id();

        self.recognizers[a_index].remove_require_failure(b_id);
        tracing::debug!("'{}' no longer requires '{}' to fail", a, b);
        Ok(())
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.recognizers.iter().position(|r| r.event_name() == name)
    }

    fn pair(&self, a: &str, b: &str) -> GestureResult<(usize, usize)> {
        if a == b {
            return Err(GestureError::SelfReference(a.to_string()));
        }
        let a_index = self
            .index_of(a)
            .ok_or_else(|| GestureError::UnknownRecognizer(a.to_string()))?;
        let b_index = self
            .index_of(b)
            .ok_or_else(|| GestureError::UnknownRecognizer(b.to_string()))?;
        Ok((a_index, b_index))
    }

    // ------------------------------------------------------------------
    // Handlers
    // ------------------------------------------------------------------

    /// Subscribe to one or more whitespace-separated event names
    pub fn on(&mut self, names: &str, handler: impl FnMut(&GestureEvent<'_>) + 'static) -> HandlerId {
        self.handlers.on(names, handler)
    }

    /// Unsubscribe one handler, or all handlers when `id` is `None`
    pub fn off(&mut self, names: &str, id: Option<HandlerId>) -> usize {
        self.handlers.off(names, id)
    }

    /// Stop recognition for the rest of the current interaction
    pub fn stop(&mut self, force: bool) {
        self.session.stop(force);
    }

    /// Touch-action value for the tracked element
    pub fn touch_action(&self) -> String {
        let actions: Vec<TouchAction> = self
            .recognizers
            .iter()
            .filter(|r| r.is_enabled())
            .flat_map(Recognizer::touch_action)
            .collect();
        clean_touch_actions(&actions)
    }

    /// Drop recognizers, handlers, tracked touches and session state
    pub fn destroy(&mut self) {
        tracing::debug!("Destroying manager with {} recognizers", self.recognizers.len());
        self.handlers.clear();
        self.recognizers.clear();
        self.tracker.reset();
        self.session = Session::with_max_history(self.config.max_history);
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Process one raw sample
    ///
    /// Returns the computed input that was dispatched, or `None` when the
    /// manager is disabled or none of the changed touches are tracked.
    pub fn handle(&mut self, input_type: InputType, sample: &RawSample) -> Option<ComputedInput> {
        if !self.enabled {
            return None;
        }

        let touches = self.tracker.resolve(input_type, sample)?;
        let input = compute_input(&mut self.session, input_type, &touches, sample.timestamp_ms);
        tracing::trace!(
            "{} sample: {} touches, center {:?}, direction {}",
            input_type,
            input.touches_len,
            input.center,
            input.direction
        );

        self.dispatch(&input);
        self.session.push(input);
        Some(input)
    }

    /// Feed every recorded sample to `handle`, returning the dispatched inputs
    pub fn replay(&mut self, recording: &SampleRecording) -> Vec<ComputedInput> {
        recording
            .samples
            .iter()
            .filter_map(|recorded| self.handle(recorded.input_type, &recorded.sample))
            .collect()
    }

    fn dispatch(&mut self, input: &ComputedInput) {
        let Self {
            config,
            recognizers,
            session,
            handlers,
            ..
        } = self;

        if session.is_stopped() {
            tracing::trace!("Session stopped, skipping recognizers");
            return;
        }

        let previous_owner = session.owner();
        let mut owner = previous_owner.filter(|id| {
            match recognizers.as_slice().state_of(*id) {
                Some(RecognizerState::Recognized) | None => false,
                Some(RecognizerState::Cancelled) => !config.release_owner_on_cancel,
                Some(_) => true,
            }
        });

        let stop = session.stop_cell();
        let mut dispatcher = Dispatcher { handlers, stop };

        for index in 0..recognizers.len() {
            let (before, rest) = recognizers.split_at_mut(index);
            let Some((recognizer, after)) = rest.split_first_mut() else {
                break;
            };

            let eligible = stop.get() != StopLevel::ForceStopped
                && owner.map_or(true, |owner| {
                    owner == recognizer.id() || recognizer.can_recognize_with(owner)
                });

            if eligible {
                recognizer.recognize(input, &Peers { before, after }, &mut dispatcher);
            } else {
                recognizer.reset();
            }

            if owner.is_none() && recognizer.state().is_active() {
                owner = Some(recognizer.id());
            }
        }

        if owner != previous_owner {
            let name = owner
                .and_then(|id| recognizers.iter().find(|r| r.id() == id))
                .map_or("none", Recognizer::event_name);
            tracing::debug!("Interaction owner is now '{}'", name);
        }
        session.set_owner(owner);
    }
}
