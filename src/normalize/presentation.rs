use indexmap::IndexMap;
use log::{debug, warn};

use crate::errors::{NormalizeError, Result};
use crate::models::page::MasterSlide;
use crate::models::presentation::Presentation;
use crate::models::tree::{
    flatten_children, Element, MasterSlideProps, PresentationProps, SlideProps,
};
use crate::normalize::{DuplicateMasterPolicy, Normalizer, UnknownChildPolicy};

impl Normalizer {
    /// Normalizes a full element tree rooted at a `presentation` element.
    ///
    /// # Errors
    /// `NormalizeError::UnknownNodeKind` if the root is any other element,
    /// plus every error raised while normalizing its slides and masters.
    pub fn presentation(&self, root: &Element) -> Result<Presentation> {
        match root {
            Element::Presentation(props) => self.presentation_props(props),
            other => Err(NormalizeError::UnknownNodeKind(other.element_type().to_string())),
        }
    }

    /// Normalizes the props of a `presentation` element.
    ///
    /// Direct children are split by type: `slide` elements become the slide
    /// list (in order) and `master-slide` elements are keyed by name. Anything
    /// else is handled per [`UnknownChildPolicy`].
    pub fn presentation_props(&self, props: &PresentationProps) -> Result<Presentation> {
        let mut slide_props: Vec<&SlideProps> = Vec::new();
        let mut master_props: Vec<&MasterSlideProps> = Vec::new();

        for child in flatten_children(props.children.as_ref())? {
            match child {
                Element::Slide(slide) => slide_props.push(slide),
                Element::MasterSlide(master) => master_props.push(master),
                other => match self.options.unknown_children {
                    UnknownChildPolicy::Ignore => warn!(
                        "Ignoring `{}` element under presentation",
                        other.element_type()
                    ),
                    UnknownChildPolicy::Reject => {
                        return Err(NormalizeError::UnexpectedChild(other.element_type()))
                    }
                },
            }
        }

        let slides = slide_props
            .into_iter()
            .map(|slide| self.slide(slide))
            .collect::<Result<Vec<_>>>()?;

        let mut master_slides: IndexMap<String, MasterSlide> = IndexMap::new();
        for props in master_props {
            let master = self.master_slide(props)?;
            if master_slides.contains_key(&master.name) {
                match self.options.duplicate_masters {
                    DuplicateMasterPolicy::Overwrite => warn!(
                        "Master slide `{}` is declared more than once; keeping the last one",
                        master.name
                    ),
                    DuplicateMasterPolicy::Reject => {
                        return Err(NormalizeError::DuplicateMasterName(master.name))
                    }
                }
            }
            // `insert` on an existing key replaces the value in place.
            master_slides.insert(master.name.clone(), master);
        }

        debug!(
            "presentation normalized: {} slide(s), {} master slide(s)",
            slides.len(),
            master_slides.len()
        );

        Ok(Presentation {
            slides,
            master_slides,
            layout: props
                .layout
                .clone()
                .unwrap_or_else(|| self.options.default_layout.clone()),
            author: props.author.clone(),
            company: props.company.clone(),
            revision: props.revision.clone(),
            subject: props.subject.clone(),
            title: props.title.clone(),
        })
    }

    /// Reads an element tree from JSON, normalizes it and writes the canonical
    /// presentation back as JSON.
    pub fn presentation_json(&self, input: &str) -> Result<String> {
        let root = Element::from_json(input)?;
        let presentation = self.presentation(&root)?;
        Ok(serde_json::to_string(&presentation)?)
    }
}
