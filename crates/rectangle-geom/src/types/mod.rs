// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rectangle value type and its construction parameters.
//!
//! Parity notes:
//! - Vertices are produced from `radius * cos(angle) + center` with separate
//!   rounding of each operation; no FMA.
//! - Translation adds the same delta to every vertex rather than rebuilding
//!   them from the angles, so it never perturbs the area.

#[doc = "Five-scalar construction parameters."]
pub mod params;
#[doc = "The rectangle model."]
pub mod rectangle;
