// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Rectangle model built from five scalars.

A rectangle is described by its center, its circumradius (center-to-vertex
distance), and the orientations of two of its vertices. The other two
vertices are point reflections of the first two through the center.

This crate provides:
- The value type (`Rectangle`) with per-parameter mutators.
- Its construction parameters as plain data (`RectangleParams`).
- Readable (`Display`) and reconstructible (`Debug`, `FromStr`) text forms.

Design notes:
- Every operation is total. Degenerate shapes (coincident or opposite
  angles, zero radius) are accepted and simply collapse the area.
- Mutators recompute only what the changed parameter touches, then the area.
- `f64` throughout; vertex math never fuses multiply-add.
"]

/// Text parsing of the reconstructible form.
pub mod parse;
/// Point formatting shared by the text forms.
pub mod pretty;
/// Core rectangle types.
pub mod types;

pub use parse::ParseRectangleError;
pub use pretty::pretty_point;
pub use rectangle_math::Vec2;
#[cfg(feature = "serde")]
pub use types::params::ParamsError;
pub use types::params::RectangleParams;
pub use types::rectangle::Rectangle;
