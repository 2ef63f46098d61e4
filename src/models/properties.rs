// src/models/properties.rs

use serde::{Deserialize, Serialize};

use crate::models::colors::{CanonicalColor, ColorInput};
use crate::models::common::{Frame, FrameInput, Margin};

/// Horizontal alignment of paragraphs in a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
    Justify,
}

/// Vertical anchoring of the text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

/// Character-level styling as written on a text link or bullet marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRunStyle {
    pub color: Option<String>,
    /// Background highlight behind the characters.
    pub highlight: Option<String>,
    pub font_face: Option<String>,
    pub font_size: Option<f64>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub strike: Option<bool>,
    pub subscript: Option<bool>,
    pub superscript: Option<bool>,
    /// Extra spacing between characters, in points.
    pub char_spacing: Option<f64>,
}

/// The resolved styling of a single text run.
///
/// This is deliberately partial: unset fields are inherited from the
/// enclosing text object's style by the backend at render time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<CanonicalColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<CanonicalColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_face: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscript: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superscript: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_spacing: Option<f64>,
}

impl RunStyle {
    /// True when no field is set, i.e. the run inherits everything.
    pub fn is_empty(&self) -> bool {
        *self == RunStyle::default()
    }
}

/// Style prop of a `text` or `table-cell` element, as authored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(flatten)]
    pub frame: FrameInput,
    pub color: Option<String>,
    pub font_face: Option<String>,
    pub font_size: Option<f64>,
    /// Fill behind the text box. Accepts a complex color.
    pub background_color: Option<ColorInput>,
    pub align: Option<HorizontalAlign>,
    pub vertical_align: Option<VerticalAlign>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub strike: Option<bool>,
    pub subscript: Option<bool>,
    pub superscript: Option<bool>,
    pub char_spacing: Option<f64>,
    /// Line spacing in points.
    pub line_spacing: Option<f64>,
    pub para_space_before: Option<f64>,
    pub para_space_after: Option<f64>,
    pub margin: Option<Margin>,
    /// Rotation in degrees, clockwise.
    pub rotate: Option<f64>,
}

/// Resolved style of a text object (and of table cells, which reuse it).
///
/// `font_face`/`font_size` are always filled for `text` elements; bare-string
/// table cells leave them unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextObjectStyle {
    #[serde(flatten)]
    pub frame: Frame,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<CanonicalColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_face: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<CanonicalColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<HorizontalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<VerticalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscript: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superscript: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub para_space_before: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub para_space_after: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
}

impl TextObjectStyle {
    /// A style carrying only a frame; every other field unset.
    pub fn with_frame(frame: Frame) -> Self {
        TextObjectStyle {
            frame,
            color: None,
            font_face: None,
            font_size: None,
            background_color: None,
            align: None,
            vertical_align: None,
            bold: None,
            italic: None,
            underline: None,
            strike: None,
            subscript: None,
            superscript: None,
            char_spacing: None,
            line_spacing: None,
            para_space_before: None,
            para_space_after: None,
            margin: None,
            rotate: None,
        }
    }
}
