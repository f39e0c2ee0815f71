// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use thiserror::Error;

/// The five scalars a [`crate::Rectangle`] is built from.
///
/// Plain data with no invariants of its own; normalisation (e.g. the radius
/// sign) happens when the rectangle is built.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RectangleParams {
    /// Center on the X axis.
    pub x_center: f64,
    /// Center on the Y axis.
    pub y_center: f64,
    /// Center-to-vertex distance.
    pub radius: f64,
    /// Orientation of the first diagonal (radians).
    pub alpha_angle: f64,
    /// Orientation of the second diagonal (radians).
    pub beta_angle: f64,
}

/// Error type for parameter (de)serialization.
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ParamsError {
    /// JSON encoding or decoding failed.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[cfg(feature = "serde")]
impl RectangleParams {
    /// Decodes parameters from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, ParamsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encodes parameters as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ParamsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
