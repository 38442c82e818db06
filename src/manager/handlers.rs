//! Handler registry
//!
//! Application code subscribes to gesture notifications by event name.
//! Handlers run synchronously inside `Manager::handle`; a panicking handler
//! unwinds out of the dispatch loop.

use crate::processing::compute::ComputedInput;
use crate::processing::session::StopLevel;
use crate::recognizer::{Notification, NotificationSink, RecognizerId, RecognizerState};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Identity of a registered handler, returned by `Manager::on`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// Notification payload handed to handlers
pub struct GestureEvent<'a> {
    /// Full event name, e.g. "panstart"
    pub name: &'a str,
    /// Bare event name of the emitting recognizer
    pub event_name: &'a str,
    pub recognizer: RecognizerId,
    pub state: RecognizerState,
    pub input: &'a ComputedInput,
    stop_level: &'a Cell<StopLevel>,
}

impl GestureEvent<'_> {
    /// Stop recognition for the rest of the interaction
    ///
    /// With `force`, recognizers later in the current cycle are skipped too.
    pub fn stop(&self, force: bool) {
        let level = StopLevel::from_force(force);
        tracing::debug!("Handler for '{}' stopped the session ({:?})", self.name, level);
        self.stop_level.set(level);
    }
}

type Handler = Rc<RefCell<dyn FnMut(&GestureEvent<'_>)>>;

#[derive(Default)]
pub struct HandlerRegistry {
    next_id: u64,
    handlers: HashMap<String, Vec<(HandlerId, Handler)>>,
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<&str, usize> = self
            .handlers
            .iter()
            .map(|(name, list)| (name.as_str(), list.len()))
            .collect();
        f.debug_struct("HandlerRegistry")
            .field("handlers", &counts)
            .finish()
    }
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under every whitespace-separated name in `names`
    pub fn on(&mut self, names: &str, handler: impl FnMut(&GestureEvent<'_>) + 'static) -> HandlerId {
        self.next_id += 1;
        let id = HandlerId(self.next_id);
        let handler: Handler = Rc::new(RefCell::new(handler));

        for name in names.split_whitespace() {
            self.handlers
                .entry(name.to_string())
                .or_default()
                .push((id, Rc::clone(&handler)));
        }
        id
    }

    /// Remove one handler, or every handler when `id` is `None`, from each name
    ///
    /// Returns the number of registrations removed.
    pub fn off(&mut self, names: &str, id: Option<HandlerId>) -> usize {
        let mut removed = 0;
        for name in names.split_whitespace() {
            let Some(list) = self.handlers.get_mut(name) else {
                continue;
            };
            let before = list.len();
            match id {
                Some(id) => list.retain(|(handler_id, _)| *handler_id != id),
                None => list.clear(),
            }
            removed += before - list.len();
            if list.is_empty() {
                self.handlers.remove(name);
            }
        }
        removed
    }

    pub fn count(&self, name: &str) -> usize {
        self.handlers.get(name).map_or(0, Vec::len)
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Invoke every handler registered under `event.name`, in registration order
    pub fn emit(&self, event: &GestureEvent<'_>) {
        let Some(list) = self.handlers.get(event.name) else {
            return;
        };
        for (_, handler) in list {
            (&mut *handler.borrow_mut())(event);
        }
    }
}

/// Routes recognizer notifications to the registry for one cycle
pub(crate) struct Dispatcher<'a> {
    pub handlers: &'a HandlerRegistry,
    pub stop: &'a Cell<StopLevel>,
}

impl NotificationSink for Dispatcher<'_> {
    fn notify(&mut self, notification: &Notification<'_>) {
        tracing::trace!("Emitting '{}'", notification.name);
        self.handlers.emit(&GestureEvent {
            name: notification.name,
            event_name: notification.event_name,
            recognizer: notification.recognizer,
            state: notification.state,
            input: notification.input,
            stop_level: self.stop,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::testing::sample_input;

    fn fire(registry: &HandlerRegistry, name: &str, stop: &Cell<StopLevel>) {
        let input = sample_input();
        let mut dispatcher = Dispatcher {
            handlers: registry,
            stop,
        };
        dispatcher.notify(&Notification {
            name,
            event_name: name,
            recognizer: RecognizerId::new(),
            state: RecognizerState::Recognized,
            input: &input,
        });
    }

    fn counter() -> (Rc<Cell<usize>>, impl FnMut(&GestureEvent<'_>) + 'static) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        (count, move |_: &GestureEvent<'_>| inner.set(inner.get() + 1))
    }

    #[test]
    fn test_handler_registered_under_several_names() {
        let mut registry = HandlerRegistry::new();
        let stop = Cell::new(StopLevel::None);
        let (count, handler) = counter();
        registry.on("tap  press", handler);

        fire(&registry, "tap", &stop);
        fire(&registry, "press", &stop);
        fire(&registry, "swipe", &stop);

        assert_eq!(count.get(), 2);
        assert_eq!(registry.count("tap"), 1);
        assert_eq!(registry.count("press"), 1);
    }

    #[test]
    fn test_off_by_id_and_by_name() {
        let mut registry = HandlerRegistry::new();
        let (first_count, first) = counter();
        let (second_count, second) = counter();
        let first_id = registry.on("pan", first);
        registry.on("pan", second);

        assert_eq!(registry.off("pan", Some(first_id)), 1);
        let stop = Cell::new(StopLevel::None);
        fire(&registry, "pan", &stop);
        assert_eq!(first_count.get(), 0);
        assert_eq!(second_count.get(), 1);

        assert_eq!(registry.off("pan pinch", None), 1);
        assert_eq!(registry.count("pan"), 0);
    }

    #[test]
    fn test_handler_can_stop_session() {
        let mut registry = HandlerRegistry::new();
        registry.on("pan", |event: &GestureEvent<'_>| event.stop(true));

        let stop = Cell::new(StopLevel::None);
        fire(&registry, "pan", &stop);
        assert_eq!(stop.get(), StopLevel::ForceStopped);
    }
}
