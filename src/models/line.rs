use serde::{Deserialize, Serialize};

use crate::models::colors::CanonicalColor;

/// Style prop of a `line` element, as authored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub color: Option<String>,
    /// Stroke width in points.
    pub width: Option<f64>,
    /// Backend dash style name, e.g. `"dash"`, `"sysDot"`.
    pub dash_type: Option<String>,
    /// Arrow head at the start point, e.g. `"triangle"`.
    pub begin_arrow_type: Option<String>,
    /// Arrow head at the end point.
    pub end_arrow_type: Option<String>,
}

/// Resolved style of a line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineObjectStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<CanonicalColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_arrow_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_arrow_type: Option<String>,
}

/// Canonical line object. Lines are positioned by their two endpoints rather
/// than by the x/y/w/h box every other object uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineObject {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub style: LineObjectStyle,
}
