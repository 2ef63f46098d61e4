//! The element tree produced by the declarative composition layer.
//!
//! Every node is `{"type": "<tag>", "props": {...}}`. The tag set is closed;
//! props are typed per tag. Fields the normalizer must validate (`style` on
//! visual elements, `name` on master slides) are optional here so their
//! absence is reported as a normalization error rather than a parse error.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::errors::NormalizeError;
use crate::models::bullet::BulletOptions;
use crate::models::colors::ColorInput;
use crate::models::common::Layout;
use crate::models::image::{ImageSizing, ImageSourceInput, ImageStyle};
use crate::models::line::LineStyle;
use crate::models::properties::{TextRunStyle, TextStyle};
use crate::models::shape::ShapeStyle;
use crate::models::table::{TableCellInput, TableStyle};
use crate::models::text_element::TextChild;

/// The type tag of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementType {
    Presentation,
    Slide,
    MasterSlide,
    Text,
    Image,
    Shape,
    Table,
    TableCell,
    Line,
    TextLink,
    TextBullet,
}

impl ElementType {
    pub const ALL: [ElementType; 11] = [
        ElementType::Presentation,
        ElementType::Slide,
        ElementType::MasterSlide,
        ElementType::Text,
        ElementType::Image,
        ElementType::Shape,
        ElementType::Table,
        ElementType::TableCell,
        ElementType::Line,
        ElementType::TextLink,
        ElementType::TextBullet,
    ];

    /// Looks up a tag as written in the tree, e.g. `"master-slide"`.
    pub fn from_tag(tag: &str) -> Option<ElementType> {
        ElementType::ALL.into_iter().find(|ty| ty.as_str() == tag)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Presentation => "presentation",
            ElementType::Slide => "slide",
            ElementType::MasterSlide => "master-slide",
            ElementType::Text => "text",
            ElementType::Image => "image",
            ElementType::Shape => "shape",
            ElementType::Table => "table",
            ElementType::TableCell => "table-cell",
            ElementType::Line => "line",
            ElementType::TextLink => "text-link",
            ElementType::TextBullet => "text-bullet",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the input tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "props", rename_all = "kebab-case")]
pub enum Element {
    Presentation(PresentationProps),
    Slide(SlideProps),
    MasterSlide(MasterSlideProps),
    Text(TextProps),
    Image(ImageProps),
    Shape(ShapeProps),
    Table(TableProps),
    TableCell(TableCellProps),
    Line(LineProps),
    TextLink(TextLinkProps),
    TextBullet(TextBulletProps),
}

impl Element {
    /// Reads a whole element tree from JSON.
    ///
    /// # Errors
    /// `NormalizeError::UnknownNodeKind` when the root's `type` tag is not a
    /// known element tag; `NormalizeError::Json` for any other malformed input.
    /// Unknown tags deeper in the tree are kept and reported by the normalizer.
    pub fn from_json(input: &str) -> crate::errors::Result<Element> {
        match serde_json::from_str::<Value>(input)? {
            Value::Object(map) => match parse_element(map)? {
                ParsedElement::Known(element) => Ok(element),
                ParsedElement::Unknown(unknown) => {
                    Err(NormalizeError::UnknownNodeKind(unknown.tag().to_string()))
                }
            },
            other => Ok(serde_json::from_value(other)?),
        }
    }

    /// The type tag this element was declared with.
    pub fn element_type(&self) -> ElementType {
        match self {
            Element::Presentation(_) => ElementType::Presentation,
            Element::Slide(_) => ElementType::Slide,
            Element::MasterSlide(_) => ElementType::MasterSlide,
            Element::Text(_) => ElementType::Text,
            Element::Image(_) => ElementType::Image,
            Element::Shape(_) => ElementType::Shape,
            Element::Table(_) => ElementType::Table,
            Element::TableCell(_) => ElementType::TableCell,
            Element::Line(_) => ElementType::Line,
            Element::TextLink(_) => ElementType::TextLink,
            Element::TextBullet(_) => ElementType::TextBullet,
        }
    }
}

// --- Props ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresentationProps {
    pub layout: Option<Layout>,
    pub author: Option<String>,
    pub company: Option<String>,
    pub revision: Option<String>,
    pub subject: Option<String>,
    pub title: Option<String>,
    pub children: Option<ChildNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlideProps {
    pub master_name: Option<String>,
    pub hidden: Option<bool>,
    /// Accepts a complex color.
    pub background_color: Option<ColorInput>,
    pub background_image: Option<ImageSourceInput>,
    pub notes: Option<String>,
    pub children: Option<ChildNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasterSlideProps {
    /// Required. Slides refer to the master by this name.
    pub name: Option<String>,
    pub background_color: Option<ColorInput>,
    pub background_image: Option<ImageSourceInput>,
    pub children: Option<ChildNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextProps {
    pub style: Option<TextStyle>,
    pub children: Option<TextChild>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableCellProps {
    pub style: Option<TextStyle>,
    pub children: Option<TextChild>,
    pub col_span: Option<u32>,
    pub row_span: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProps {
    pub src: ImageSourceInput,
    pub style: Option<ImageStyle>,
    pub sizing: Option<ImageSizing>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeProps {
    /// Backend shape name; `"rect"` when absent.
    #[serde(rename = "type")]
    pub shape_type: Option<String>,
    pub style: Option<ShapeStyle>,
    pub children: Option<TextChild>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableProps {
    pub rows: Vec<Vec<TableCellInput>>,
    pub style: Option<TableStyle>,
    pub column_widths: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineProps {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub style: Option<LineStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextLinkProps {
    /// The linked text. Strings, numbers, or arrays of those.
    pub children: Option<TextChild>,
    pub url: Option<String>,
    /// Zero-based index of the target slide.
    pub slide: Option<u32>,
    pub tooltip: Option<String>,
    pub style: Option<TextRunStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBulletProps {
    #[serde(default)]
    pub children: Option<TextChild>,
    #[serde(default)]
    pub style: Option<TextRunStyle>,
    #[serde(default)]
    pub rtl_mode: Option<bool>,
    #[serde(default)]
    pub lang: Option<String>,
    /// Everything else on the marker is a bullet rendering option.
    #[serde(flatten)]
    pub options: BulletOptions,
}

// --- Children ---

/// An element-shaped object whose `type` tag is outside the known tag set.
/// Kept as authored so the normalizer can name the tag in its error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UnknownElement(Map<String, Value>);

impl UnknownElement {
    /// The unrecognized tag.
    pub fn tag(&self) -> &str {
        self.0.get("type").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

pub(crate) enum ParsedElement {
    Known(Element),
    Unknown(UnknownElement),
}

/// Reads an object carrying a `type` key.
///
/// A string tag outside the known set yields `Unknown`. A known tag with
/// malformed props (or a non-string tag) is a parse error.
pub(crate) fn parse_element(map: Map<String, Value>) -> Result<ParsedElement, serde_json::Error> {
    match map.get("type").and_then(Value::as_str) {
        Some(tag) if ElementType::from_tag(tag).is_none() => {
            Ok(ParsedElement::Unknown(UnknownElement(map)))
        }
        _ => serde_json::from_value(Value::Object(map)).map(ParsedElement::Known),
    }
}

/// The `children` value of a container element.
///
/// Authors may nest arrays freely and leave `null`/boolean placeholders
/// (conditional children); those are kept as `Noise` and dropped by
/// [`flatten_children`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChildNode {
    Element(Box<Element>),
    Unknown(UnknownElement),
    List(Vec<ChildNode>),
    Noise(Value),
}

impl From<Element> for ChildNode {
    fn from(element: Element) -> Self {
        ChildNode::Element(Box::new(element))
    }
}

impl TryFrom<Value> for ChildNode {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(ChildNode::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(ChildNode::List),
            Value::Object(map) if map.contains_key("type") => match parse_element(map)? {
                ParsedElement::Known(element) => Ok(ChildNode::Element(Box::new(element))),
                ParsedElement::Unknown(unknown) => Ok(ChildNode::Unknown(unknown)),
            },
            other => Ok(ChildNode::Noise(other)),
        }
    }
}

impl<'de> Deserialize<'de> for ChildNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        ChildNode::try_from(value).map_err(de::Error::custom)
    }
}

/// Flattens a heterogeneous child value into the real elements it contains,
/// depth-first and in document order. Noise entries are discarded.
///
/// # Errors
/// `NormalizeError::UnknownNodeKind` for the first child with an unknown tag.
pub fn flatten_children(children: Option<&ChildNode>) -> crate::errors::Result<Vec<&Element>> {
    fn walk<'a>(node: &'a ChildNode, out: &mut Vec<&'a Element>) -> crate::errors::Result<()> {
        match node {
            ChildNode::Element(element) => out.push(element.as_ref()),
            ChildNode::Unknown(unknown) => {
                return Err(NormalizeError::UnknownNodeKind(unknown.tag().to_string()))
            }
            ChildNode::List(items) => {
                for item in items {
                    walk(item, out)?;
                }
            }
            ChildNode::Noise(_) => {}
        }
        Ok(())
    }

    let mut out = Vec::new();
    if let Some(node) = children {
        walk(node, &mut out)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_element_tags_are_kebab_case() {
        let element: Element = serde_json::from_value(json!({
            "type": "master-slide",
            "props": {"name": "Title"}
        }))
        .unwrap();
        assert_eq!(element.element_type(), ElementType::MasterSlide);
        assert_eq!(element.element_type().to_string(), "master-slide");

        assert!(serde_json::from_value::<Element>(json!({"type": "video", "props": {}})).is_err());
    }

    #[test]
    fn test_flatten_children_drops_noise_and_keeps_order() {
        let children: ChildNode = serde_json::from_value(json!([
            {"type": "slide", "props": {"notes": "one"}},
            null,
            false,
            [
                {"type": "slide", "props": {"notes": "two"}},
                [{"type": "master-slide", "props": {"name": "M"}}],
                "stray text"
            ],
            {"notAnElement": 1}
        ]))
        .unwrap();

        let flat = flatten_children(Some(&children)).unwrap();
        let types: Vec<ElementType> = flat.iter().map(|e| e.element_type()).collect();
        assert_eq!(
            types,
            vec![ElementType::Slide, ElementType::Slide, ElementType::MasterSlide]
        );
        match flat[1] {
            Element::Slide(props) => assert_eq!(props.notes.as_deref(), Some("two")),
            other => panic!("expected slide, got {}", other.element_type()),
        }
    }

    #[test]
    fn test_single_child_and_absent_children() {
        let single: ChildNode =
            serde_json::from_value(json!({"type": "line", "props": {"x1": 0, "y1": 0, "x2": 1, "y2": 1}}))
                .unwrap();
        assert_eq!(flatten_children(Some(&single)).unwrap().len(), 1);
        assert!(flatten_children(None).unwrap().is_empty());
    }

    #[test]
    fn test_tag_lookup_covers_every_type() {
        for ty in ElementType::ALL {
            assert_eq!(ElementType::from_tag(ty.as_str()), Some(ty));
        }
        assert_eq!(ElementType::from_tag("video"), None);
        assert_eq!(ElementType::from_tag("Slide"), None);
    }

    #[test]
    fn test_unknown_tag_is_kept_and_reported() {
        let children: ChildNode = serde_json::from_value(json!([
            {"type": "slide", "props": {}},
            {"type": "video", "props": {"style": {}}}
        ]))
        .unwrap();
        let ChildNode::List(items) = &children else {
            panic!("expected a list");
        };
        match &items[1] {
            ChildNode::Unknown(unknown) => assert_eq!(unknown.tag(), "video"),
            other => panic!("expected an unknown element, got {other:?}"),
        }
        assert!(matches!(
            flatten_children(Some(&children)),
            Err(NormalizeError::UnknownNodeKind(tag)) if tag == "video"
        ));
    }

    #[test]
    fn test_known_tag_with_bad_props_still_fails_to_parse() {
        let result = serde_json::from_value::<ChildNode>(json!({
            "type": "line",
            "props": {"x1": "left"}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_root_from_json() {
        let root = Element::from_json(r#"{"type": "presentation", "props": {}}"#).unwrap();
        assert_eq!(root.element_type(), ElementType::Presentation);

        assert!(matches!(
            Element::from_json(r#"{"type": "deck", "props": {}}"#),
            Err(NormalizeError::UnknownNodeKind(tag)) if tag == "deck"
        ));
        assert!(matches!(Element::from_json("[1, 2]"), Err(NormalizeError::Json(_))));
        assert!(matches!(Element::from_json("{"), Err(NormalizeError::Json(_))));
    }

    #[test]
    fn test_bullet_props_split_options_from_passthrough() {
        let element: Element = serde_json::from_value(json!({
            "type": "text-bullet",
            "props": {
                "children": "item",
                "rtlMode": true,
                "lang": "he-IL",
                "indent": 20,
                "characterCode": "25BA"
            }
        }))
        .unwrap();
        let Element::TextBullet(props) = element else {
            panic!("expected a bullet");
        };
        assert_eq!(props.rtl_mode, Some(true));
        assert_eq!(props.lang.as_deref(), Some("he-IL"));
        assert_eq!(props.options.indent, Some(20.0));
        assert_eq!(props.options.character_code.as_deref(), Some("25BA"));
        assert!(props.options.kind.is_none());
        assert!(props.options.extra.is_empty());
    }
}
