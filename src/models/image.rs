use serde::{Deserialize, Serialize};

use crate::models::common::{Frame, FrameInput};

/// Where the bytes of an image come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ImageSource {
    /// A file path or URL the backend loads.
    Path { path: String },
    /// Inline image data as a base64 data URI.
    Data { data: String },
}

/// An image source as authored: a bare path string, or a structured source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageSourceInput {
    Bare(String),
    Structured(ImageSource),
}

impl From<&str> for ImageSourceInput {
    fn from(value: &str) -> Self {
        ImageSourceInput::Bare(value.to_string())
    }
}

/// How an image is scaled into its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    Contain,
    Cover,
    Crop,
}

/// Sizing policy of an image. Absent means natural sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSizing {
    pub fit: ImageFit,
    /// Pixel width of the source image, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_width: Option<f64>,
    /// Pixel height of the source image, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_height: Option<f64>,
}

/// Style prop of an `image` element. Images only carry a box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStyle {
    #[serde(flatten)]
    pub frame: FrameInput,
}

/// Canonical image object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageObject {
    pub src: ImageSource,
    pub style: Frame,
    /// Serialized as `null` when the image uses its natural size.
    pub sizing: Option<ImageSizing>,
}
