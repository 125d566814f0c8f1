//! Fundamental geometric types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in world space (x = East, y = North).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in world space (world units per tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.offset_to(other).length()
    }

    /// Bearing to another position in radians (0 = North, clockwise).
    pub fn bearing_to(&self, other: &Position) -> f64 {
        let d = self.offset_to(other);
        d.x.atan2(d.y).rem_euclid(std::f64::consts::TAU)
    }

    /// Displacement vector from this position to another.
    pub fn offset_to(&self, other: &Position) -> DVec2 {
        DVec2::new(other.x - self.x, other.y - self.y)
    }

    /// This position displaced by a world-frame vector.
    pub fn translated(&self, d: DVec2) -> Position {
        Position::new(self.x + d.x, self.y + d.y)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Heading in radians (0 = North, clockwise).
    pub fn heading(&self) -> f64 {
        self.x.atan2(self.y).rem_euclid(std::f64::consts::TAU)
    }

    /// Velocity of `self` relative to `other`, as a vector.
    pub fn delta(&self, other: &Velocity) -> DVec2 {
        DVec2::new(self.x - other.x, self.y - other.y)
    }
}

/// Unit vector pointing along a bearing (radians, 0 = North, clockwise).
pub fn bearing_unit(bearing: f64) -> DVec2 {
    DVec2::new(bearing.sin(), bearing.cos())
}

/// Map a hull-frame hardpoint offset (x = starboard, y = forward) into a
/// world-frame displacement for a hull facing the given bearing.
pub fn mount_to_world(offset: DVec2, facing: f64) -> DVec2 {
    let (sin, cos) = facing.sin_cos();
    DVec2::new(offset.x * cos + offset.y * sin, offset.y * cos - offset.x * sin)
}
