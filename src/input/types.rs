use crate::processing::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of a raw input sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputType {
    Start,
    Move,
    End,
    Cancel,
}

impl InputType {
    /// Bit flag encoding (start=1, move=2, end=4, cancel=8)
    pub const fn flag(self) -> u8 {
        match self {
            InputType::Start => 1,
            InputType::Move => 2,
            InputType::End => 4,
            InputType::Cancel => 8,
        }
    }

    /// Start or move
    pub const fn is_ongoing(self) -> bool {
        matches!(self, InputType::Start | InputType::Move)
    }

    /// End or cancel
    pub const fn is_terminal(self) -> bool {
        matches!(self, InputType::End | InputType::Cancel)
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputType::Start => write!(f, "START"),
            InputType::Move => write!(f, "MOVE"),
            InputType::End => write!(f, "END"),
            InputType::Cancel => write!(f, "CANCEL"),
        }
    }
}

/// Identifier of the element a touch originated on, as reported by the platform adapter
pub type TargetId = u64;

/// A single contact point in a raw sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchPoint {
    /// Stable per-contact token
    pub identifier: u64,
    pub x: f64,
    pub y: f64,
    /// Originating element, if the adapter knows it
    #[serde(default)]
    pub target: Option<TargetId>,
}

impl TouchPoint {
    pub fn new(identifier: u64, x: f64, y: f64) -> Self {
        Self {
            identifier,
            x,
            y,
            target: None,
        }
    }

    pub fn with_target(mut self, target: TargetId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Raw sample delivered by the platform adapter
///
/// `touches` holds every point still in contact, `changed_touches` the points
/// that started, moved or lifted in this sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSample {
    /// Milliseconds on the adapter's monotonic clock
    pub timestamp_ms: f64,
    pub touches: Vec<TouchPoint>,
    pub changed_touches: Vec<TouchPoint>,
}

impl RawSample {
    pub fn new(timestamp_ms: f64, touches: Vec<TouchPoint>, changed_touches: Vec<TouchPoint>) -> Self {
        Self {
            timestamp_ms,
            touches,
            changed_touches,
        }
    }
}
