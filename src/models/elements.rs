// src/models/elements.rs

use serde::{Deserialize, Serialize};

use crate::models::image::ImageObject;
use crate::models::line::LineObject;
use crate::models::properties::TextObjectStyle;
use crate::models::shape::ShapeObject;
use crate::models::table::TableObject;
use crate::models::text_element::TextRun;

/// Canonical text object. Also the payload of table cells, which may carry spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextObject {
    /// The runs of the text box, in reading order.
    pub text: Vec<TextRun>,

    pub style: TextObjectStyle,

    /// Number of grid columns a table cell covers. Only set on table cells.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col_span: Option<u32>,

    /// Number of grid rows a table cell covers. Only set on table cells.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_span: Option<u32>,
}

/// A visual object placed on a slide or master slide.
/// The JSON representation carries the variant in a `kind` field
/// (e.g. `{"kind": "shape", ...}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VisualObject {
    /// A text box.
    Text(TextObject),
    /// A picture.
    Image(ImageObject),
    /// A geometric shape, optionally holding text.
    Shape(ShapeObject),
    /// A grid of text cells.
    Table(TableObject),
    /// A straight line between two points.
    Line(LineObject),
}

impl VisualObject {
    /// The `kind` tag this object serializes with.
    pub fn kind(&self) -> &'static str {
        match self {
            VisualObject::Text(_) => "text",
            VisualObject::Image(_) => "image",
            VisualObject::Shape(_) => "shape",
            VisualObject::Table(_) => "table",
            VisualObject::Line(_) => "line",
        }
    }
}
