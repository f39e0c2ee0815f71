// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Planar vector used for both points and offsets.
///
/// * Components are `f64` in the caller's units; nothing is normalised or
///   validated.
/// * Arithmetic is component-wise without FMA, so `a.scale(2.0).sub(&b)` is
///   exactly `(2*ax - bx, 2*ay - by)`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    data: [f64; 2],
}

impl Vec2 {
    /// Origin / zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f64 {
        self.data[1]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f64; 2] {
        self.data
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x() + other.x(), self.y() + other.y())
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar)
    }

    /// Shifts only the X component; Y keeps its exact bits (including `-0.0`).
    pub fn offset_x(&self, dx: f64) -> Self {
        Self::new(self.x() + dx, self.y())
    }

    /// Shifts only the Y component; X keeps its exact bits (including `-0.0`).
    pub fn offset_y(&self, dy: f64) -> Self {
        Self::new(self.x(), self.y() + dy)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f64 {
        (self.x() * self.x() + self.y() * self.y()).sqrt()
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Self) -> f64 {
        self.sub(other).length()
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(value: [f64; 2]) -> Self {
        Self { data: value }
    }
}

impl From<Vec2> for (f64, f64) {
    fn from(value: Vec2) -> Self {
        (value.x(), value.y())
    }
}
