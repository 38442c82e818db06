//! Computed input construction
//!
//! Turns the resolved touch points of one raw sample into the single
//! `ComputedInput` every recognizer sees on that cycle.

use crate::input::{InputType, TouchPoint, TrackedTouches};
use crate::processing::direction::{classify_direction, Direction};
use crate::processing::geometry::{Point, Vector2};
use crate::processing::session::Session;
use serde::{Deserialize, Serialize};

/// Normalized sample passed to every recognizer for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedInput {
    pub input_type: InputType,
    /// Number of touch points belonging to the interaction
    pub touches_len: usize,
    /// Adapter timestamp in milliseconds
    pub timestamp_ms: f64,
    pub center: Option<Point>,
    /// Center delta from the previous input of this interaction
    pub movement: Option<Vector2>,
    /// Milliseconds since the interaction started
    pub elapsed_ms: f64,
    /// Length of `movement`, 0 when absent
    pub distance: f64,
    pub direction: Direction,
    pub scale: f64,
    /// Degrees
    pub rotation: f64,
    /// Px per ms
    pub velocity: Option<Vector2>,
    /// First sample of a new interaction
    pub is_first: bool,
    /// Last sample of the interaction
    pub is_final: bool,
}

/// Center of a set of points
///
/// One point is its own center; several are averaged and rounded per axis,
/// with halves rounding toward positive infinity.
pub fn compute_center(points: &[TouchPoint]) -> Option<Point> {
    match points {
        [] => None,
        [only] => Some(only.location()),
        _ => {
            let count = points.len() as f64;
            let (sum_x, sum_y) = points
                .iter()
                .fold((0.0, 0.0), |(x, y), p| (x + p.x, y + p.y));
            Some(Point::new(round_half_up(sum_x / count), round_half_up(sum_y / count)))
        }
    }
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Build the computed input for a resolved sample
///
/// Resets `session` first when the sample opens a new interaction.
pub fn compute_input(
    session: &mut Session,
    input_type: InputType,
    touches: &TrackedTouches,
    timestamp_ms: f64,
) -> ComputedInput {
    let is_first = input_type == InputType::Start && touches.only_changed();
    let is_final = input_type.is_terminal() && touches.only_changed();

    if is_first {
        session.reset(timestamp_ms);
    }

    let center = compute_center(&touches.all);
    let movement = session.compute_movement(center);
    let elapsed_ms = timestamp_ms - session.start_ms();

    let distance = movement.map_or(0.0, Vector2::norm);
    let direction = classify_direction(movement);

    let locations: Vec<Point> = touches.all.iter().map(TouchPoint::location).collect();
    session.update_multiple(&locations);
    let (scale, rotation) = session.scale_and_rotation(&locations);

    let velocity = session.compute_velocity(center, elapsed_ms);

    ComputedInput {
        input_type,
        touches_len: touches.all.len(),
        timestamp_ms,
        center,
        movement,
        elapsed_ms,
        distance,
        direction,
        scale,
        rotation,
        velocity,
        is_first,
        is_final,
    }
}
