use log::debug;

use crate::errors::{NormalizeError, Result};
use crate::models::elements::VisualObject;
use crate::models::page::{MasterSlide, Slide};
use crate::models::tree::{flatten_children, ChildNode, MasterSlideProps, SlideProps};
use crate::normalize::color::normalize_optional_color_input;
use crate::normalize::Normalizer;

impl Normalizer {
    /// Normalizes a slide's props.
    ///
    /// Children are flattened in document order (noise such as `null` or
    /// `false` is dropped) and each remaining element must be a visual object.
    /// `hidden` defaults to `false`; `masterName` is kept as given, without
    /// checking that a master with that name exists.
    pub fn slide(&self, props: &SlideProps) -> Result<Slide> {
        let objects = self.objects(props.children.as_ref())?;
        debug!("slide normalized with {} object(s)", objects.len());

        Ok(Slide {
            master_name: props.master_name.clone(),
            objects,
            background_color: normalize_optional_color_input(props.background_color.as_ref())?,
            background_image: props.background_image.clone(),
            hidden: props.hidden.unwrap_or(false),
            notes: props.notes.clone(),
        })
    }

    /// Normalizes a master slide's props. Same child handling as [`Self::slide`].
    ///
    /// # Errors
    /// `NormalizeError::MissingName` when the master has no `name`.
    pub fn master_slide(&self, props: &MasterSlideProps) -> Result<MasterSlide> {
        let name = props.name.clone().ok_or(NormalizeError::MissingName)?;

        Ok(MasterSlide {
            objects: self.objects(props.children.as_ref())?,
            background_color: normalize_optional_color_input(props.background_color.as_ref())?,
            background_image: props.background_image.clone(),
            name,
        })
    }

    fn objects(&self, children: Option<&ChildNode>) -> Result<Vec<VisualObject>> {
        flatten_children(children)?
            .into_iter()
            .map(|element| self.visual_node(element))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::colors::{CanonicalColor, ComplexColor};
    use crate::models::image::{ImageSource, ImageSourceInput};
    use crate::models::tree::ElementType;
    use crate::normalize::{normalize_master_slide, normalize_slide};
    use serde_json::json;

    fn slide_props(value: serde_json::Value) -> SlideProps {
        serde_json::from_value(value).unwrap()
    }

    fn master_props(value: serde_json::Value) -> MasterSlideProps {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_slide() {
        let slide = normalize_slide(&SlideProps::default()).unwrap();
        assert!(slide.objects.is_empty());
        assert!(!slide.hidden);
        assert_eq!(
            serde_json::to_value(&slide).unwrap(),
            json!({"masterName": null, "objects": [], "hidden": false})
        );
    }

    #[test]
    fn test_children_are_flattened_in_order() {
        let props = slide_props(json!({
            "masterName": "TITLE",
            "children": [
                null,
                {"type": "text", "props": {"style": {}, "children": "one"}},
                [false, {"type": "line", "props": {"x1": 0, "y1": 0, "x2": 1, "y2": 0}}],
                {"type": "shape", "props": {"style": {}}}
            ]
        }));
        let slide = normalize_slide(&props).unwrap();

        let kinds: Vec<_> = slide.objects.iter().map(VisualObject::kind).collect();
        assert_eq!(kinds, vec!["text", "line", "shape"]);
        assert_eq!(slide.master_name.as_deref(), Some("TITLE"));
    }

    #[test]
    fn test_slide_passthrough_fields() {
        let props = slide_props(json!({
            "hidden": true,
            "backgroundColor": "rgba(0, 0, 0, 0.5)",
            "backgroundImage": "bg.png",
            "notes": "Speak slowly"
        }));
        let slide = normalize_slide(&props).unwrap();
        assert!(slide.hidden);
        assert_eq!(
            slide.background_color,
            Some(CanonicalColor::Complex(ComplexColor::Solid {
                color: "000000".to_string(),
                alpha: 50
            }))
        );
        assert_eq!(slide.background_image, Some(ImageSourceInput::from("bg.png")));
        assert_eq!(slide.notes.as_deref(), Some("Speak slowly"));
    }

    #[test]
    fn test_child_errors_propagate() {
        let props = slide_props(json!({
            "children": {"type": "text", "props": {"children": "no style"}}
        }));
        assert!(matches!(
            normalize_slide(&props),
            Err(NormalizeError::MissingStyle(ElementType::Text))
        ));

        let nested = slide_props(json!({
            "children": {"type": "slide", "props": {}}
        }));
        assert!(matches!(
            normalize_slide(&nested),
            Err(NormalizeError::UnknownNodeKind(kind)) if kind == "slide"
        ));
    }

    #[test]
    fn test_unknown_element_tag_is_named() {
        let props = slide_props(json!({
            "children": [
                {"type": "text", "props": {"style": {}, "children": "before"}},
                {"type": "video", "props": {"style": {}}}
            ]
        }));
        match normalize_slide(&props) {
            Err(NormalizeError::UnknownNodeKind(kind)) => assert_eq!(kind, "video"),
            other => panic!("expected UnknownNodeKind, got {other:?}"),
        }

        let master = master_props(json!({
            "name": "M",
            "children": [[{"type": "video", "props": {}}]]
        }));
        assert!(matches!(
            normalize_master_slide(&master),
            Err(NormalizeError::UnknownNodeKind(kind)) if kind == "video"
        ));
    }

    #[test]
    fn test_master_slide_requires_name() {
        let props = master_props(json!({"backgroundColor": "white"}));
        assert!(matches!(
            normalize_master_slide(&props),
            Err(NormalizeError::MissingName)
        ));
    }

    #[test]
    fn test_master_slide() {
        let props = master_props(json!({
            "name": "BRAND",
            "backgroundColor": "#f0f0f0",
            "backgroundImage": {"kind": "path", "path": "brand.png"},
            "children": [{"type": "image", "props": {"src": "logo.png", "style": {"x": "90%"}}}]
        }));
        let master = normalize_master_slide(&props).unwrap();
        assert_eq!(master.name, "BRAND");
        assert_eq!(master.objects.len(), 1);
        assert_eq!(
            master.background_color,
            Some(CanonicalColor::Hex("F0F0F0".to_string()))
        );
        assert_eq!(
            master.background_image,
            Some(ImageSourceInput::Structured(ImageSource::Path {
                path: "brand.png".to_string()
            }))
        );
    }
}
