//! Position canonicalization for the x/y/w/h box model.

use regex::Regex;
use std::sync::LazyLock;

use crate::errors::{NormalizeError, Result};
use crate::models::common::{Frame, FrameDefaults, FrameInput, Position};

/// Whole percentages only: digits then a single `%`. No sign, no decimals.
static PERCENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+%$").expect("percent pattern is valid"));

/// Canonicalizes one coordinate.
///
/// - numbers pass through unchanged
/// - strings must be a whole percentage (`"50%"`) and pass through unchanged
/// - an absent value becomes `default`
///
/// Percentages are resolved against the slide size by the backend, not here.
///
/// # Errors
/// `NormalizeError::InvalidPosition` for any other string.
pub fn normalize_coordinate(input: Option<&Position>, default: f64) -> Result<Position> {
    match input {
        None => Ok(Position::Absolute(default)),
        Some(Position::Absolute(value)) => Ok(Position::Absolute(*value)),
        Some(Position::Percent(text)) if PERCENT_REGEX.is_match(text) => {
            Ok(Position::Percent(text.clone()))
        }
        Some(Position::Percent(text)) => Err(NormalizeError::InvalidPosition(text.clone())),
    }
}

/// Resolves all four box coordinates, filling gaps from `defaults`.
pub fn normalize_frame(input: &FrameInput, defaults: &FrameDefaults) -> Result<Frame> {
    Ok(Frame {
        x: normalize_coordinate(input.x.as_ref(), defaults.x)?,
        y: normalize_coordinate(input.y.as_ref(), defaults.y)?,
        w: normalize_coordinate(input.w.as_ref(), defaults.w)?,
        h: normalize_coordinate(input.h.as_ref(), defaults.h)?,
    })
}
