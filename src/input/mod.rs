//! Raw touch input
//!
//! Defines the samples a platform adapter delivers and the identifier
//! tracking that decides which touch points belong to the current
//! interaction.

pub mod tracker;
pub mod types;

pub use tracker::{AnyTarget, TargetScope, TargetSubtree, TouchTracker, TrackedTouches};
pub use types::{InputType, RawSample, TargetId, TouchPoint};
