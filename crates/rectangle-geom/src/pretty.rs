// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use rectangle_math::{round_to_decimals, Vec2};

/// Decimal places kept by [`pretty_point`].
pub const PRETTY_DECIMALS: usize = 3;

/// Renders `point` as `"<name> (<x>;<y>)"` with coordinates rounded to
/// [`PRETTY_DECIMALS`] places.
///
/// Rounded values print in shortest round-trip form, so whole numbers keep a
/// trailing `.0` and no zero padding is added.
///
/// # Examples
/// ```
/// use rectangle_geom::{pretty_point, Vec2};
/// assert_eq!(pretty_point("P1", Vec2::new(1.0005, 2.0)), "P1 (1.0;2.0)");
/// assert_eq!(pretty_point("P2", Vec2::new(0.70710678, -0.5)), "P2 (0.707;-0.5)");
/// ```
pub fn pretty_point(name: &str, point: Vec2) -> String {
    format!(
        "{name} ({:?};{:?})",
        round_to_decimals(point.x(), PRETTY_DECIMALS),
        round_to_decimals(point.y(), PRETTY_DECIMALS)
    )
}
