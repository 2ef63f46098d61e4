use serde::{Deserialize, Serialize};

/// Where a hyperlink on a text run points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkTarget {
    /// An external web page.
    Url(String),
    /// A slide of this presentation, addressed by its position in the slide list.
    /// There may not be a slide at this index.
    SlideIndex(u32),
}

/// A hypertext link attached to a text run.
///
/// Serializes as `{"url": ..., "tooltip"?}` or `{"slideIndex": ..., "tooltip"?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// The destination of the link. Uses flatten so the variant name becomes the JSON key.
    #[serde(flatten)]
    pub target: LinkTarget,

    /// Text shown when hovering the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}
