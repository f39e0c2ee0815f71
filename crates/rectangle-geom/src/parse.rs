// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::num::ParseFloatError;
use core::str::FromStr;

use thiserror::Error;

use crate::types::params::RectangleParams;
use crate::types::rectangle::Rectangle;

const FIELDS: [&str; 5] = ["x_center", "y_center", "radius", "alpha_angle", "beta_angle"];

/// Error type for parsing the `Debug` form of a [`Rectangle`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRectangleError {
    /// Input is not wrapped in `Rectangle(` ... `)`.
    #[error("expected `Rectangle(...)`")]
    MissingWrapper,
    /// A field is not written as `name=value`.
    #[error("malformed field `{0}`")]
    MalformedField(String),
    /// A field name outside the five construction parameters.
    #[error("unknown field `{0}`")]
    UnknownField(String),
    /// The same field appears twice.
    #[error("duplicate field `{0}`")]
    DuplicateField(&'static str),
    /// A required field is absent.
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    /// A field value is not a float.
    #[error("invalid value for `{field}`: {source}")]
    InvalidNumber {
        /// Field whose value failed to parse.
        field: &'static str,
        /// Underlying float parse failure.
        source: ParseFloatError,
    },
}

impl FromStr for RectangleParams {
    type Err = ParseRectangleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .trim()
            .strip_prefix("Rectangle(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or(ParseRectangleError::MissingWrapper)?;

        let mut values: [Option<f64>; 5] = [None; 5];
        for raw in body.split(',') {
            let raw = raw.trim();
            let (name, value) = raw
                .split_once('=')
                .ok_or_else(|| ParseRectangleError::MalformedField(raw.to_owned()))?;
            let name = name.trim();
            let idx = FIELDS
                .iter()
                .position(|f| *f == name)
                .ok_or_else(|| ParseRectangleError::UnknownField(name.to_owned()))?;
            let field = FIELDS[idx];
            if values[idx].is_some() {
                return Err(ParseRectangleError::DuplicateField(field));
            }
            let parsed = value
                .trim()
                .parse::<f64>()
                .map_err(|source| ParseRectangleError::InvalidNumber { field, source })?;
            values[idx] = Some(parsed);
        }

        let mut take = |idx: usize| {
            values[idx]
                .take()
                .ok_or(ParseRectangleError::MissingField(FIELDS[idx]))
        };
        Ok(Self {
            x_center: take(0)?,
            y_center: take(1)?,
            radius: take(2)?,
            alpha_angle: take(3)?,
            beta_angle: take(4)?,
        })
    }
}

/// Parses the constructor-like `Debug` form, e.g.
/// `Rectangle(x_center=0.0, y_center=0.0, radius=1.0, alpha_angle=0.0, beta_angle=1.5)`.
///
/// Fields may appear in any order; surrounding whitespace (including the
/// trailing newline `Debug` emits) is ignored.
impl FromStr for Rectangle {
    type Err = ParseRectangleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<RectangleParams>().map(Self::from_params)
    }
}
