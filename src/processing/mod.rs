//! Processing module for raw-sample normalization
//!
//! This module contains the geometry primitives, direction classification,
//! computed-input construction and the per-interaction session used to derive
//! movement and velocity between samples.

pub mod compute;
pub mod direction;
pub mod geometry;
pub mod session;

pub use compute::{compute_center, compute_input, ComputedInput};
pub use direction::{classify_direction, Direction};
pub use geometry::{Point, Vector2};
pub use session::{Session, StopLevel};
