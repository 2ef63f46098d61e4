use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::common::Layout;
use crate::models::page::{MasterSlide, Slide};

/// The canonical presentation handed to the file-generation backend.
///
/// Owns every slide and master slide; nothing is shared between slides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    /// The slides, in presentation order.
    pub slides: Vec<Slide>,

    /// Master slides keyed by name. Keeps the order in which names were first
    /// declared; a later master with the same name replaces the earlier value.
    pub master_slides: IndexMap<String, MasterSlide>,

    /// The slide size.
    pub layout: Layout,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Revision number of the document, as a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
