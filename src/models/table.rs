use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::colors::CanonicalColor;
use crate::models::common::{Frame, FrameInput, Margin};
use crate::models::elements::TextObject;
use crate::models::tree::{parse_element, Element, ParsedElement, UnknownElement};

/// A table cell as authored: a bare string, or a `table-cell` (or `text`) element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TableCellInput {
    Text(String),
    Element(Box<Element>),
    Unknown(UnknownElement),
}

impl From<&str> for TableCellInput {
    fn from(value: &str) -> Self {
        TableCellInput::Text(value.to_string())
    }
}

impl<'de> Deserialize<'de> for TableCellInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Dispatch on the JSON shape so errors inside a cell element surface
        // instead of being swallowed by untagged matching.
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(TableCellInput::Text(s)),
            Value::Object(map) => match parse_element(map) {
                Ok(ParsedElement::Known(element)) => Ok(TableCellInput::Element(Box::new(element))),
                Ok(ParsedElement::Unknown(unknown)) => Ok(TableCellInput::Unknown(unknown)),
                Err(e) => Err(de::Error::custom(e)),
            },
            other => Err(de::Error::custom(format!(
                "a table cell is a string or an element, found `{}`",
                other
            ))),
        }
    }
}

/// Style prop of a `table` element, as authored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableStyle {
    #[serde(flatten)]
    pub frame: FrameInput,
    pub border_color: Option<String>,
    pub border_width: Option<f64>,
    /// Cell padding applied to every cell.
    pub margin: Option<Margin>,
}

/// Resolved table-level style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableObjectStyle {
    #[serde(flatten)]
    pub frame: Frame,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<CanonicalColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
}

/// A canonical table cell. Cells reuse the text object shape and serialize
/// with `"kind": "text"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TableCell {
    Text(TextObject),
}

impl TableCell {
    pub fn as_text(&self) -> &TextObject {
        match self {
            TableCell::Text(text) => text,
        }
    }
}

/// Canonical table object. `rows` is the rendering grid: row order and cell
/// order within a row are exactly as authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableObject {
    pub rows: Vec<Vec<TableCell>>,
    pub style: TableObjectStyle,
    /// Explicit column widths, in inches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_widths: Option<Vec<f64>>,
}
