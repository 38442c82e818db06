//! Movement direction classification
//!
//! A direction is a set of cardinal bits. Each cardinal matches when the dot
//! product of the unit movement with it exceeds cos(7π/16), so a diagonal
//! sets two bits.

use crate::processing::geometry::Vector2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Set of cardinal directions (screen space, y grows downwards)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Direction(u8);

impl Direction {
    pub const UNDEFINED: Direction = Direction(0);
    pub const LEFT: Direction = Direction(1);
    pub const RIGHT: Direction = Direction(2);
    pub const UP: Direction = Direction(4);
    pub const DOWN: Direction = Direction(8);

    pub const HORIZONTAL: Direction = Direction(1 | 2);
    pub const VERTICAL: Direction = Direction(4 | 8);
    pub const ALL: Direction = Direction(1 | 2 | 4 | 8);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn from_bits(bits: u8) -> Self {
        Direction(bits & Self::ALL.0)
    }

    pub const fn is_undefined(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is set in `self`
    pub const fn contains(self, other: Direction) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any bit of `other` is set in `self`
    pub const fn intersects(self, other: Direction) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Direction {
    type Output = Direction;

    fn bitor(self, other: Direction) -> Direction {
        Direction(self.0 | other.0)
    }
}

impl BitOrAssign for Direction {
    fn bitor_assign(&mut self, other: Direction) {
        self.0 |= other.0;
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Direction::DOWN, "down"),
            (Direction::UP, "up"),
            (Direction::LEFT, "left"),
            (Direction::RIGHT, "right"),
        ];
        let parts: Vec<&str> = names
            .iter()
            .filter(|(bit, _)| self.contains(*bit))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Minimum cosine between the unit movement and a cardinal for that cardinal to match
pub fn cosine_threshold() -> f64 {
    (7.0 * PI / 16.0).cos()
}

/// Classify a movement vector into cardinal direction bits
///
/// Absent or zero movement is `UNDEFINED`.
pub fn classify_direction(movement: Option<Vector2>) -> Direction {
    let Some(unit) = movement.and_then(Vector2::normalized) else {
        return Direction::UNDEFINED;
    };

    let threshold = cosine_threshold();
    let cardinals = [
        (Vector2::new(0.0, -1.0), Direction::UP),
        (Vector2::new(0.0, 1.0), Direction::DOWN),
        (Vector2::new(1.0, 0.0), Direction::RIGHT),
        (Vector2::new(-1.0, 0.0), Direction::LEFT),
    ];

    let mut direction = Direction::UNDEFINED;
    for (axis, bit) in cardinals {
        if unit.dot(axis) > threshold {
            direction |= bit;
        }
    }
    direction
}
