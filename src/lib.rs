//! Gesture Engine - touch gesture recognition.
//!
//! Turns a stream of raw touch samples into named gestures. The crate covers
//! the machinery that drives gesture classifiers: touch identifier tracking,
//! input normalization, the recognizer state machine, recognizer coordination
//! and the per-sample dispatch loop. Concrete classifiers (pan, tap, ...)
//! plug in through `GestureClassifier`.

pub mod commands;
pub mod error;
pub mod input;
pub mod manager;
pub mod processing;
pub mod recognizer;
pub mod recorder;

pub use error::{GestureError, GestureResult};
pub use input::{InputType, RawSample, TouchPoint};
pub use manager::{GestureEvent, Manager, ManagerConfig};
pub use processing::ComputedInput;
pub use recognizer::{GestureClassifier, Recognizer, RecognizerId, RecognizerState, TouchAction};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if result.is_ok() {
        tracing::debug!("Gesture engine v{}", env!("CARGO_PKG_VERSION"));
    }
}
