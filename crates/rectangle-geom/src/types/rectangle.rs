// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use rectangle_math::Vec2;
use tracing::trace;

use crate::pretty::pretty_point;
use crate::types::params::RectangleParams;

/// Rectangle inscribed in a circle, described by five scalars.
///
/// Conventions:
/// - `p1` sits at `alpha_angle` and `p2` at `beta_angle`, both `radius` away
///   from the center. `p3` and `p4` are their reflections through the center.
/// - Angles are radians and are stored verbatim; nothing is wrapped into
///   `[0, 2π)`.
///
/// Invariants:
/// - `p3 == 2 * center - p1` and `p4 == 2 * center - p2`.
/// - Every vertex is `radius` away from the center.
/// - `radius >= 0`; negative inputs are stored as their absolute value.
/// - `area == |p1 - p2| * |p2 - p3|`.
#[derive(Copy, Clone)]
pub struct Rectangle {
    center: Vec2,
    radius: f64,
    alpha_angle: f64,
    beta_angle: f64,
    p1: Vec2,
    p2: Vec2,
    p3: Vec2,
    p4: Vec2,
    area: f64,
}

impl Rectangle {
    /// Builds a rectangle and derives its vertices and area.
    ///
    /// Never fails: zero radius and equal angles give a degenerate shape.
    pub fn new(
        x_center: f64,
        y_center: f64,
        radius: f64,
        alpha_angle: f64,
        beta_angle: f64,
    ) -> Self {
        let mut rect = Self {
            center: Vec2::new(x_center, y_center),
            radius: radius.abs(),
            alpha_angle,
            beta_angle,
            p1: Vec2::ZERO,
            p2: Vec2::ZERO,
            p3: Vec2::ZERO,
            p4: Vec2::ZERO,
            area: 0.0,
        };
        rect.p1 = rect.vertex_at(alpha_angle);
        rect.p2 = rect.vertex_at(beta_angle);
        rect.p3 = rect.opposite(rect.p1);
        rect.p4 = rect.opposite(rect.p2);
        rect.area = rect.compute_area();
        trace!(
            x_center,
            y_center,
            radius = rect.radius,
            alpha_angle,
            beta_angle,
            area = rect.area,
            "rectangle constructed"
        );
        rect
    }

    /// Builds a rectangle from its parameter set.
    pub fn from_params(params: RectangleParams) -> Self {
        Self::new(
            params.x_center,
            params.y_center,
            params.radius,
            params.alpha_angle,
            params.beta_angle,
        )
    }

    /// Returns the five construction parameters (radius already normalised).
    pub fn params(&self) -> RectangleParams {
        RectangleParams {
            x_center: self.x_center(),
            y_center: self.y_center(),
            radius: self.radius,
            alpha_angle: self.alpha_angle,
            beta_angle: self.beta_angle,
        }
    }

    /// Point at `angle` on the circumcircle.
    pub fn vertex_at(&self, angle: f64) -> Vec2 {
        Vec2::new(
            self.radius * angle.cos() + self.center.x(),
            self.radius * angle.sin() + self.center.y(),
        )
    }

    /// Reflection of `point` through the center.
    pub fn opposite(&self, point: Vec2) -> Vec2 {
        self.center.scale(2.0).sub(&point)
    }

    /// Recomputes the area from the current vertices.
    ///
    /// This is the product of the two side lengths adjacent to `p2`; it does
    /// not read the cached value returned by [`Rectangle::area`].
    pub fn compute_area(&self) -> f64 {
        self.p1.distance(&self.p2) * self.p2.distance(&self.p3)
    }

    /// Moves the center along X, dragging every vertex by the same delta.
    pub fn set_x_center(&mut self, new_x_center: f64) {
        let delta = new_x_center - self.center.x();
        self.center = Vec2::new(new_x_center, self.center.y());
        self.p1 = self.p1.offset_x(delta);
        self.p2 = self.p2.offset_x(delta);
        self.p3 = self.p3.offset_x(delta);
        self.p4 = self.p4.offset_x(delta);
        trace!(x_center = new_x_center, delta, "rectangle translated on x");
    }

    /// Moves the center along Y, dragging every vertex by the same delta.
    pub fn set_y_center(&mut self, new_y_center: f64) {
        let delta = new_y_center - self.center.y();
        self.center = Vec2::new(self.center.x(), new_y_center);
        self.p1 = self.p1.offset_y(delta);
        self.p2 = self.p2.offset_y(delta);
        self.p3 = self.p3.offset_y(delta);
        self.p4 = self.p4.offset_y(delta);
        trace!(y_center = new_y_center, delta, "rectangle translated on y");
    }

    /// Replaces the radius and rebuilds all four vertices from the stored
    /// angles.
    ///
    /// The vertices are recomputed rather than scaled about the center so the
    /// result is bit-identical to constructing with the new radius.
    pub fn set_radius(&mut self, new_radius: f64) {
        self.radius = new_radius.abs();
        self.p1 = self.vertex_at(self.alpha_angle);
        self.p2 = self.vertex_at(self.beta_angle);
        self.p3 = self.opposite(self.p1);
        self.p4 = self.opposite(self.p2);
        self.area = self.compute_area();
        trace!(radius = self.radius, area = self.area, "rectangle radius changed");
    }

    /// Rotates the first diagonal; `p2` and `p4` are left untouched.
    pub fn set_alpha_angle(&mut self, new_alpha_angle: f64) {
        self.alpha_angle = new_alpha_angle;
        self.p1 = self.vertex_at(new_alpha_angle);
        self.p3 = self.opposite(self.p1);
        self.area = self.compute_area();
        trace!(
            alpha_angle = new_alpha_angle,
            area = self.area,
            "rectangle alpha angle changed"
        );
    }

    /// Rotates the second diagonal; `p1` and `p3` are left untouched.
    pub fn set_beta_angle(&mut self, new_beta_angle: f64) {
        self.beta_angle = new_beta_angle;
        self.p2 = self.vertex_at(new_beta_angle);
        self.p4 = self.opposite(self.p2);
        self.area = self.compute_area();
        trace!(
            beta_angle = new_beta_angle,
            area = self.area,
            "rectangle beta angle changed"
        );
    }

    /// Vertices in construction order `[p1, p2, p3, p4]`.
    ///
    /// The order is fixed, not sorted; it only traces the outline when the
    /// angles happen to produce a convex traversal.
    pub fn vertices(&self) -> [Vec2; 4] {
        [self.p1, self.p2, self.p3, self.p4]
    }

    /// Center point.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Center X coordinate.
    pub fn x_center(&self) -> f64 {
        self.center.x()
    }

    /// Center Y coordinate.
    pub fn y_center(&self) -> f64 {
        self.center.y()
    }

    /// Circumradius (always non-negative).
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Orientation of the first diagonal, in radians.
    pub fn alpha_angle(&self) -> f64 {
        self.alpha_angle
    }

    /// Orientation of the second diagonal, in radians.
    pub fn beta_angle(&self) -> f64 {
        self.beta_angle
    }

    /// Area as of the last mutation.
    pub fn area(&self) -> f64 {
        self.area
    }
}

impl From<RectangleParams> for Rectangle {
    fn from(params: RectangleParams) -> Self {
        Self::from_params(params)
    }
}

/// Exact comparison of center and radius; the two angles match as an
/// unordered pair.
///
/// Angles that differ numerically but point the same way (e.g. by `2π`) are
/// not equal.
impl PartialEq for Rectangle {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        let same_angles = (self.alpha_angle == other.alpha_angle
            && self.beta_angle == other.beta_angle)
            || (self.alpha_angle == other.beta_angle && self.beta_angle == other.alpha_angle);
        self.center == other.center && self.radius == other.radius && same_angles
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.vertices().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&pretty_point(&format!("P{}", i + 1), *vertex))?;
        }
        Ok(())
    }
}

/// Renders a constructor-like expression that [`str::parse`] accepts back.
impl fmt::Debug for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Rectangle(x_center={:?}, y_center={:?}, radius={:?}, alpha_angle={:?}, beta_angle={:?})",
            self.x_center(),
            self.y_center(),
            self.radius,
            self.alpha_angle,
            self.beta_angle
        )
    }
}
