// src/models/text_element.rs

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::bullet::BulletMarker;
use crate::models::link::Link;
use crate::models::properties::RunStyle;
use crate::models::tree::{parse_element, Element, ParsedElement};

/// A contiguous span of text sharing one style, link and bullet state.
/// Runs are kept in reading order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    /// The text content of this run.
    pub text: String,

    /// Styling specific to this run. Unset fields are inherited from the text object.
    pub style: RunStyle,

    /// The hyperlink destination of the run, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,

    /// Present only on the first run of a bullet paragraph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet: Option<BulletMarker>,

    /// Whether a paragraph break follows this run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_line: Option<bool>,

    /// Right-to-left rendering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtl_mode: Option<bool>,

    /// Language tag of the text, e.g. `"he-IL"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl TextRun {
    /// A run with the given text and no styling of its own.
    pub fn plain(text: impl Into<String>) -> Self {
        TextRun {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Rich-text content of a text-bearing element, as authored.
///
/// Objects carrying a `type` key are parsed as elements (and deserialization
/// errors inside them propagate); every other shape the tree can hold is kept
/// as `Invalid` so normalization can report it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TextChild {
    Text(String),
    Number(serde_json::Number),
    List(Vec<TextChild>),
    Element(Box<Element>),
    Invalid(Value),
}

impl From<&str> for TextChild {
    fn from(value: &str) -> Self {
        TextChild::Text(value.to_string())
    }
}

impl TryFrom<Value> for TextChild {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(TextChild::Text(s)),
            Value::Number(n) => Ok(TextChild::Number(n)),
            Value::Array(items) => items
                .into_iter()
                .map(TextChild::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(TextChild::List),
            Value::Object(map) if map.contains_key("type") => match parse_element(map)? {
                ParsedElement::Known(element) => Ok(TextChild::Element(Box::new(element))),
                ParsedElement::Unknown(unknown) => Ok(TextChild::Invalid(unknown.into_value())),
            },
            other => Ok(TextChild::Invalid(other)),
        }
    }
}

impl<'de> Deserialize<'de> for TextChild {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        TextChild::try_from(value).map_err(de::Error::custom)
    }
}
