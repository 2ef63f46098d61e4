//! Normalizes an element tree into the canonical presentation record.
//!
//! The walk is a single synchronous depth-first pass with no shared state:
//! colors ([`color`]), coordinates ([`coordinate`]) and text runs ([`text`])
//! are leaf utilities; visual objects compose them; slides compose visual
//! objects; the presentation composes slides.
//!
//! # Current Features & Limitations:
//! *   Every error is fatal; there is no partial result.
//! *   Percent positions are validated but never resolved against the slide size.
//! *   No layout or auto-sizing: absent sizes take the configured defaults.

pub mod color;
pub mod coordinate;
mod elements;
mod presentation;
mod slide;
pub mod text;

pub use color::{normalize_color, normalize_color_input};
pub use coordinate::{normalize_coordinate, normalize_frame};
pub use text::{merge_style_fallback, normalize_text};

use crate::errors::Result;
use crate::models::common::{FrameDefaults, Layout};
use crate::models::elements::VisualObject;
use crate::models::page::{MasterSlide, Slide};
use crate::models::presentation::Presentation;
use crate::models::tree::{Element, MasterSlideProps, SlideProps};

/// Font face given to text objects that do not set one.
pub const DEFAULT_FONT_FACE: &str = "Arial";
/// Font size (points) given to text objects that do not set one.
pub const DEFAULT_FONT_SIZE: f64 = 18.0;

/// What to do when two master slides share a name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateMasterPolicy {
    /// The later master replaces the earlier one (keeping the earlier position).
    #[default]
    Overwrite,
    /// Fail with `DuplicateMasterName`.
    Reject,
}

/// What to do with presentation children that are neither slides nor masters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownChildPolicy {
    /// Skip them (a warning is logged).
    #[default]
    Ignore,
    /// Fail with `UnexpectedChild`.
    Reject,
}

/// Defaults and policies applied during normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizerOptions {
    pub default_font_face: String,
    pub default_font_size: f64,
    pub default_layout: Layout,
    pub default_frame: FrameDefaults,
    pub duplicate_masters: DuplicateMasterPolicy,
    pub unknown_children: UnknownChildPolicy,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        NormalizerOptions {
            default_font_face: DEFAULT_FONT_FACE.to_string(),
            default_font_size: DEFAULT_FONT_SIZE,
            default_layout: Layout::default(),
            default_frame: FrameDefaults::default(),
            duplicate_masters: DuplicateMasterPolicy::default(),
            unknown_children: UnknownChildPolicy::default(),
        }
    }
}

/// Builder for creating a `Normalizer`.
#[derive(Default)]
pub struct NormalizerBuilder {
    options: NormalizerOptions,
}

impl NormalizerBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the font face used when a text object does not name one.
    pub fn set_default_font_face(mut self, font_face: impl Into<String>) -> Self {
        self.options.default_font_face = font_face.into();
        self
    }

    /// Sets the font size used when a text object does not set one.
    pub fn set_default_font_size(mut self, font_size: f64) -> Self {
        self.options.default_font_size = font_size;
        self
    }

    /// Sets the layout used when the presentation does not declare one.
    pub fn set_default_layout(mut self, layout: Layout) -> Self {
        self.options.default_layout = layout;
        self
    }

    /// Sets the coordinates substituted for absent x/y/w/h values.
    pub fn set_default_frame(mut self, frame: FrameDefaults) -> Self {
        self.options.default_frame = frame;
        self
    }

    pub fn set_duplicate_masters(mut self, policy: DuplicateMasterPolicy) -> Self {
        self.options.duplicate_masters = policy;
        self
    }

    pub fn set_unknown_children(mut self, policy: UnknownChildPolicy) -> Self {
        self.options.unknown_children = policy;
        self
    }

    pub fn build(self) -> Normalizer {
        Normalizer {
            options: self.options,
        }
    }
}

/// Runs the normalization pass with a fixed set of options.
///
/// Holds no state between calls; one instance can normalize any number of trees.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: NormalizerOptions,
}

impl Normalizer {
    pub fn new(options: NormalizerOptions) -> Self {
        Normalizer { options }
    }

    pub fn options(&self) -> &NormalizerOptions {
        &self.options
    }
}

// --- Default-option entry points ---

/// Normalizes one visual element with the default options.
/// See [`Normalizer::visual_node`].
pub fn normalize_visual_node(node: &Element) -> Result<VisualObject> {
    Normalizer::default().visual_node(node)
}

/// Normalizes a slide with the default options. See [`Normalizer::slide`].
pub fn normalize_slide(props: &SlideProps) -> Result<Slide> {
    Normalizer::default().slide(props)
}

/// Normalizes a master slide with the default options.
/// See [`Normalizer::master_slide`].
pub fn normalize_master_slide(props: &MasterSlideProps) -> Result<MasterSlide> {
    Normalizer::default().master_slide(props)
}

/// Normalizes a whole presentation tree with the default options.
/// See [`Normalizer::presentation`].
pub fn normalize_presentation(root: &Element) -> Result<Presentation> {
    Normalizer::default().presentation(root)
}

/// Parses a JSON element tree and returns the canonical presentation as JSON,
/// using the default options. See [`Normalizer::presentation_json`].
pub fn normalize_presentation_json(input: &str) -> Result<String> {
    Normalizer::default().presentation_json(input)
}
