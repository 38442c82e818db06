//! Recorder module
//!
//! Captures emitted gestures to JSON and loads raw sample recordings for
//! replay.

pub mod gesture_log;
pub mod recording;

pub use gesture_log::{GestureLog, GestureRecord};
pub use recording::{RecordedSample, SampleRecording};
