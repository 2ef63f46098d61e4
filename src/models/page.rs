// src/models/page.rs

use serde::{Deserialize, Serialize};

use crate::models::colors::CanonicalColor;
use crate::models::elements::VisualObject;
use crate::models::image::ImageSourceInput;

/// A canonical slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Name of the master slide this slide is based on. Serialized as `null`
    /// when the slide has no master.
    pub master_name: Option<String>,

    /// The visual objects of the slide, in paint order.
    pub objects: Vec<VisualObject>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<CanonicalColor>,

    /// Passed through exactly as authored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<ImageSourceInput>,

    /// Hidden slides are kept in the file but skipped during a slide show.
    pub hidden: bool,

    /// Speaker notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A canonical master slide. Slides reference it by `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterSlide {
    pub name: String,

    pub objects: Vec<VisualObject>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<CanonicalColor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<ImageSourceInput>,
}
