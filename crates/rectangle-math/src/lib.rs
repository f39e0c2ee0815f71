// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Planar math helpers for the rectangle model.

This crate provides:
- A 2D point/vector type (`Vec2`) over `f64`.
- Tolerance helpers (`EPSILON`, `approx_eq`).
- Decimal rounding that matches the formatter (`round_to_decimals`).

Design notes:
- No fused multiply-add anywhere; every product and sum rounds separately so
  results match the written formulas bit for bit on all targets.
- Non-finite inputs are never rejected; NaN and infinities flow through the
  arithmetic unchanged.
"]

mod vec2;

pub use vec2::Vec2;

/// Relative tolerance used by [`approx_eq`].
pub const EPSILON: f64 = 1e-9;

/// Returns `true` when `a` and `b` agree within [`EPSILON`], scaled by the
/// larger magnitude once it exceeds one.
pub fn approx_eq(a: f64, b: f64) -> bool {
    let scale = 1.0_f64.max(a.abs()).max(b.abs());
    (a - b).abs() <= EPSILON * scale
}

/// Rounds `value` to `decimals` places using exact decimal rounding of the
/// stored binary value (ties to even).
///
/// Scaling by a power of ten and calling [`f64::round`] double-rounds: `1.0005`
/// is stored just below the tie but `1.0005 * 1000.0` lands on `1000.5`. The
/// formatter works from the exact binary expansion instead.
///
/// # Examples
/// ```
/// use rectangle_math::round_to_decimals;
/// assert_eq!(round_to_decimals(1.0005, 3), 1.0);
/// assert_eq!(round_to_decimals(0.70710678, 3), 0.707);
/// ```
pub fn round_to_decimals(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
