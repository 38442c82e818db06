//! Screen-space geometry primitives
//!
//! `Vector2` is an immutable displacement, `Point` a location that can be
//! moved in place. Subtracting two points yields the vector between them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Sub};

/// 2D displacement (movement, velocity)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Squared length
    pub fn quadrance(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length
    pub fn norm(self) -> f64 {
        self.quadrance().sqrt()
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Unit vector in the same direction, or `None` for the zero vector
    pub fn normalized(self) -> Option<Vector2> {
        let norm = self.norm();
        if norm == 0.0 || !norm.is_finite() {
            return None;
        }
        Some(self / norm)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;

    fn div(self, divisor: f64) -> Vector2 {
        Vector2::new(self.x / divisor, self.y / divisor)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({}, {})", self.x, self.y)
    }
}

/// Screen-space location
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move this location in place
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Distance to another location
    pub fn distance_to(self, other: Point) -> f64 {
        (other - self).norm()
    }

    /// Angle of the line from `self` to `other`, in degrees
    pub fn angle_to(self, other: Point) -> f64 {
        let v = other - self;
        v.y.atan2(v.x).to_degrees()
    }
}

impl Sub for Point {
    type Output = Vector2;

    fn sub(self, other: Point) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector2::new(3.0, 4.0);
        let b = Vector2::new(1.0, -2.0);

        assert_eq!(a + b, Vector2::new(4.0, 2.0));
        assert_eq!(a - b, Vector2::new(2.0, 6.0));
        assert_eq!(a / 2.0, Vector2::new(1.5, 2.0));
        assert_eq!(a.dot(b), -5.0);
        assert_eq!(a.norm(), 5.0);
    }

    #[test]
    fn test_zero_vector_has_no_unit() {
        assert!(Vector2::ZERO.normalized().is_none());
        let unit = Vector2::new(0.0, -7.0).normalized().unwrap();
        assert_eq!(unit, Vector2::new(0.0, -1.0));
    }

    #[test]
    fn test_point_move_and_subtract() {
        let mut p = Point::new(10.0, 10.0);
        p.move_to(13.0, 14.0);

        let v = p - Point::new(10.0, 10.0);
        assert_eq!(v, Vector2::new(3.0, 4.0));
        assert_eq!(Point::new(10.0, 10.0).distance_to(p), 5.0);
    }

    #[test]
    fn test_point_angle() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(origin.angle_to(Point::new(1.0, 0.0)), 0.0);
        assert!((origin.angle_to(Point::new(0.0, 1.0)) - 90.0).abs() < 1e-9);
    }
}
