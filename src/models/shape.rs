use serde::{Deserialize, Serialize};

use crate::models::colors::{CanonicalColor, ColorInput};
use crate::models::common::{Frame, FrameInput};
use crate::models::properties::{HorizontalAlign, VerticalAlign};
use crate::models::text_element::TextRun;

/// Shape name used when a `shape` element does not name one.
pub const DEFAULT_SHAPE_TYPE: &str = "rect";

/// Style prop of a `shape` element, as authored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeStyle {
    #[serde(flatten)]
    pub frame: FrameInput,
    /// Fill of the shape. Accepts a complex color.
    pub background_color: Option<ColorInput>,
    /// Outline color. Plain color strings only.
    pub border_color: Option<String>,
    /// Outline thickness in points.
    pub border_width: Option<f64>,
    /// Corner radius for rounded rectangles, in inches.
    pub rect_radius: Option<f64>,
    // Appearance of the text inside the shape.
    pub color: Option<String>,
    pub font_face: Option<String>,
    pub font_size: Option<f64>,
    pub align: Option<HorizontalAlign>,
    pub vertical_align: Option<VerticalAlign>,
}

/// Resolved style of a shape object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeObjectStyle {
    #[serde(flatten)]
    pub frame: Frame,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<CanonicalColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<CanonicalColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rect_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<CanonicalColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_face: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<HorizontalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<VerticalAlign>,
}

/// Canonical shape object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeObject {
    /// Backend shape name, e.g. `"rect"`, `"ellipse"`, `"roundRect"`.
    #[serde(rename = "type")]
    pub shape_type: String,

    /// Text inside the shape. `None` (serialized as `null`) means the shape
    /// has no text region at all, which differs from an empty run list.
    pub text: Option<Vec<TextRun>>,

    pub style: ShapeObjectStyle,
}
