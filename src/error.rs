//! Error types
//!
//! Recognition itself never fails: rejected or blocked gestures surface as the
//! `Failed` recognizer state. These errors cover registry misuse and the
//! recorder/replay I/O surface.

use thiserror::Error;

/// Errors that can occur while configuring or driving the engine
#[derive(Error, Debug)]
pub enum GestureError {
    #[error("Unknown recognizer: {0}")]
    UnknownRecognizer(String),

    #[error("Recognizer cannot coordinate with itself: {0}")]
    SelfReference(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for engine operations
pub type GestureResult<T> = Result<T, GestureError>;
