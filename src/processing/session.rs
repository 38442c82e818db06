//! Per-interaction session state
//!
//! A session lives from the first touch-down to the last touch-up or cancel.
//! It keeps the history of computed inputs so each new sample can be compared
//! with the previous one, and remembers which recognizer owns the interaction.

use crate::processing::compute::ComputedInput;
use crate::processing::geometry::{Point, Vector2};
use crate::recognizer::RecognizerId;
use std::cell::Cell;
use std::collections::VecDeque;

/// How far recognition has been stopped for the current interaction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopLevel {
    #[default]
    None,
    /// Future samples are discarded
    Stopped,
    /// Future samples are discarded and no recognizer runs for the rest of the current cycle
    ForceStopped,
}

impl StopLevel {
    pub fn from_force(force: bool) -> Self {
        if force {
            StopLevel::ForceStopped
        } else {
            StopLevel::Stopped
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    start_ms: f64,
    stopped: Cell<StopLevel>,
    owner: Option<RecognizerId>,
    history: VecDeque<ComputedInput>,
    max_history: Option<usize>,
    first_multiple: Option<[Point; 2]>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session that keeps at most `max_history` computed inputs
    pub fn with_max_history(max_history: Option<usize>) -> Self {
        Self {
            max_history,
            ..Self::default()
        }
    }

    /// Begin a new interaction at `now_ms`
    pub fn reset(&mut self, now_ms: f64) {
        self.start_ms = now_ms;
        self.stopped.set(StopLevel::None);
        self.owner = None;
        self.history.clear();
        self.first_multiple = None;
        tracing::trace!("Session reset at {}ms", now_ms);
    }

    /// Append a dispatched input to the history
    pub fn push(&mut self, input: ComputedInput) {
        self.history.push_back(input);
        if let Some(limit) = self.max_history {
            while self.history.len() > limit {
                self.history.pop_front();
            }
        }
    }

    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    pub fn last(&self) -> Option<&ComputedInput> {
        self.history.back()
    }

    pub fn history(&self) -> impl Iterator<Item = &ComputedInput> {
        self.history.iter()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Movement of `center` since the last pushed input
    pub fn compute_movement(&self, center: Option<Point>) -> Option<Vector2> {
        let center = center?;
        let prev = self.last()?.center?;
        Some(center - prev)
    }

    /// Velocity of `center` since the last pushed input, in px per ms
    ///
    /// A zero time delta yields zero velocity.
    pub fn compute_velocity(&self, center: Option<Point>, elapsed_ms: f64) -> Option<Vector2> {
        let center = center?;
        let prev = self.last()?;
        let movement = center - prev.center?;
        let delta = elapsed_ms - prev.elapsed_ms;
        if delta == 0.0 {
            return Some(Vector2::ZERO);
        }
        Some(movement / delta)
    }

    /// Track the first multi-point snapshot used for scale and rotation
    pub fn update_multiple(&mut self, points: &[Point]) {
        match points.len() {
            1 => self.first_multiple = None,
            n if n > 1 && self.first_multiple.is_none() => {
                self.first_multiple = Some([points[0], points[1]]);
            }
            _ => {}
        }
    }

    /// Scale and rotation (degrees) of `points` relative to the first multi-point snapshot
    pub fn scale_and_rotation(&self, points: &[Point]) -> (f64, f64) {
        let (Some([s0, s1]), [p0, p1, ..]) = (self.first_multiple, points) else {
            return (1.0, 0.0);
        };

        let start_distance = s0.distance_to(s1);
        let scale = if start_distance == 0.0 {
            1.0
        } else {
            p0.distance_to(*p1) / start_distance
        };
        let rotation = p1.angle_to(*p0) - s1.angle_to(s0);
        (scale, rotation)
    }

    pub fn stop(&self, force: bool) {
        let level = StopLevel::from_force(force);
        tracing::debug!("Session stopped ({:?})", level);
        self.stopped.set(level);
    }

    pub fn stop_level(&self) -> StopLevel {
        self.stopped.get()
    }

    pub fn is_stopped(&self) -> bool {
        self.stop_level() != StopLevel::None
    }

    pub fn is_force_stopped(&self) -> bool {
        self.stop_level() == StopLevel::ForceStopped
    }

    pub(crate) fn stop_cell(&self) -> &Cell<StopLevel> {
        &self.stopped
    }

    pub fn owner(&self) -> Option<RecognizerId> {
        self.owner
    }

    pub fn set_owner(&mut self, owner: Option<RecognizerId>) {
        self.owner = owner;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputType;
    use crate::processing::direction::Direction;

    fn input_at(center: Option<Point>, elapsed_ms: f64) -> ComputedInput {
        ComputedInput {
            input_type: InputType::Move,
            touches_len: 1,
            timestamp_ms: elapsed_ms,
            center,
            movement: None,
            elapsed_ms,
            distance: 0.0,
            direction: Direction::UNDEFINED,
            scale: 1.0,
            rotation: 0.0,
            velocity: None,
            is_first: false,
            is_final: false,
        }
    }

    #[test]
    fn test_no_history_means_no_movement() {
        let session = Session::new();
        assert!(session.compute_movement(Some(Point::new(1.0, 1.0))).is_none());
        assert!(session.compute_velocity(Some(Point::new(1.0, 1.0)), 10.0).is_none());
    }

    #[test]
    fn test_no_center_means_no_movement() {
        let mut session = Session::new();
        session.push(input_at(Some(Point::new(0.0, 0.0)), 0.0));
        assert!(session.compute_movement(None).is_none());
        assert!(session.compute_velocity(None, 10.0).is_none());
    }

    #[test]
    fn test_movement_and_velocity_against_last_input() {
        let mut session = Session::new();
        session.push(input_at(Some(Point::new(0.0, 0.0)), 0.0));
        session.push(input_at(Some(Point::new(10.0, 0.0)), 10.0));

        let movement = session.compute_movement(Some(Point::new(30.0, 10.0))).unwrap();
        assert_eq!(movement, Vector2::new(20.0, 10.0));

        let velocity = session.compute_velocity(Some(Point::new(30.0, 10.0)), 20.0).unwrap();
        assert_eq!(velocity, Vector2::new(2.0, 1.0));
    }

    #[test]
    fn test_identical_samples_have_zero_velocity() {
        let mut session = Session::new();
        session.push(input_at(Some(Point::new(4.0, 4.0)), 5.0));

        let center = Some(Point::new(4.0, 4.0));
        assert_eq!(session.compute_movement(center), Some(Vector2::ZERO));
        assert_eq!(session.compute_velocity(center, 16.0), Some(Vector2::ZERO));
    }

    #[test]
    fn test_zero_time_delta_yields_zero_velocity() {
        let mut session = Session::new();
        session.push(input_at(Some(Point::new(0.0, 0.0)), 8.0));
        let velocity = session.compute_velocity(Some(Point::new(50.0, 0.0)), 8.0).unwrap();
        assert_eq!(velocity, Vector2::ZERO);
    }

    #[test]
    fn test_reset_clears_history_owner_and_stop() {
        let mut session = Session::new();
        session.push(input_at(Some(Point::new(0.0, 0.0)), 0.0));
        session.set_owner(Some(RecognizerId::new()));
        session.stop(true);

        session.reset(1234.0);

        assert!(session.is_empty());
        assert!(session.owner().is_none());
        assert_eq!(session.stop_level(), StopLevel::None);
        assert_eq!(session.start_ms(), 1234.0);
    }

    #[test]
    fn test_history_limit_drops_oldest() {
        let mut session = Session::with_max_history(Some(2));
        for i in 0..5 {
            session.push(input_at(Some(Point::new(i as f64, 0.0)), i as f64));
        }
        assert_eq!(session.len(), 2);
        assert_eq!(session.last().unwrap().center, Some(Point::new(4.0, 0.0)));
    }

    #[test]
    fn test_stop_levels() {
        let session = Session::new();
        assert!(!session.is_stopped());
        session.stop(false);
        assert!(session.is_stopped());
        assert!(!session.is_force_stopped());
        session.stop(true);
        assert!(session.is_force_stopped());
    }

    #[test]
    fn test_scale_and_rotation_from_first_multiple() {
        let mut session = Session::new();
        let start = [Point::new(10.0, 0.0), Point::new(0.0, 0.0)];
        session.update_multiple(&start);

        // Same snapshot is kept while more than one point is down
        let spread = [Point::new(0.0, 20.0), Point::new(0.0, 0.0)];
        session.update_multiple(&spread);

        let (scale, rotation) = session.scale_and_rotation(&spread);
        assert!((scale - 2.0).abs() < 1e-9, "scale {} should be 2", scale);
        assert!((rotation - 90.0).abs() < 1e-9, "rotation {} should be 90", rotation);

        session.update_multiple(&[Point::new(0.0, 20.0)]);
        assert_eq!(session.scale_and_rotation(&spread), (1.0, 0.0));
    }
}
