use serde::{Deserialize, Serialize};

/// A position or extent on a slide.
///
/// Canonically this is either an absolute number (backend units) or a whole
/// percentage string such as `"50%"`. On input the string form is unchecked;
/// `normalize_coordinate` rejects anything that is not `<digits>%`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Position {
    /// An absolute coordinate or size.
    Absolute(f64),
    /// A percentage of the slide dimension, e.g. `"25%"`.
    Percent(String),
}

impl From<f64> for Position {
    fn from(value: f64) -> Self {
        Position::Absolute(value)
    }
}

impl From<&str> for Position {
    fn from(value: &str) -> Self {
        Position::Percent(value.to_string())
    }
}

/// The box-model coordinates as they arrive on a visual node's `style` prop.
/// Every field may be absent and is defaulted during normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<Position>,
}

/// Resolved box-model coordinates. Always carries all four values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub x: Position,
    pub y: Position,
    pub w: Position,
    pub h: Position,
}

impl Frame {
    /// The frame used for bare-string table cells: every coordinate is zero.
    pub fn zero() -> Self {
        Frame {
            x: Position::Absolute(0.0),
            y: Position::Absolute(0.0),
            w: Position::Absolute(0.0),
            h: Position::Absolute(0.0),
        }
    }
}

/// Fallback values substituted for absent box coordinates.
///
/// `w`/`h` default to 1, which the backend reads as "natural size", not
/// "full slide".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameDefaults {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Default for FrameDefaults {
    fn default() -> Self {
        FrameDefaults {
            x: 0.0,
            y: 0.0,
            w: 1.0,
            h: 1.0,
        }
    }
}

/// Inner padding of a text box or table cell, in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Margin {
    /// Same margin on every side.
    Uniform(f64),
    /// Left, right, bottom, top (the backend's ordering).
    Sides([f64; 4]),
}

/// One of the slide size presets understood by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutPreset {
    /// 10 x 5.625 inches.
    #[default]
    #[serde(rename = "16x9")]
    Ratio16x9,
    /// 10 x 6.25 inches.
    #[serde(rename = "16x10")]
    Ratio16x10,
    /// 10 x 7.5 inches.
    #[serde(rename = "4x3")]
    Ratio4x3,
    /// 13.33 x 7.5 inches.
    #[serde(rename = "wide")]
    Wide,
}

/// A custom slide size, in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomLayout {
    pub width: f64,
    pub height: f64,
}

/// The slide size of a presentation: a named preset or explicit dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Layout {
    Preset(LayoutPreset),
    Custom(CustomLayout),
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Preset(LayoutPreset::default())
    }
}
