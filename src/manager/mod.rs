//! Manager module
//!
//! The dispatch loop that feeds computed inputs to recognizers, plus the
//! handler registry, configuration and touch-action aggregation around it.

pub mod config;
pub mod handlers;
#[allow(clippy::module_inception)]
pub mod manager;
pub mod touch_action;

pub use config::ManagerConfig;
pub use handlers::{GestureEvent, HandlerId, HandlerRegistry};
pub use manager::Manager;
pub use touch_action::clean_touch_actions;
