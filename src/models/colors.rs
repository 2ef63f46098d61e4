use serde::{Deserialize, Serialize};

/// A color carrying an explicit transparency.
///
/// On input `color` may be any color string the color parser accepts; in
/// canonical form it is always six uppercase hex digits without a prefix.
/// `alpha` is percent *transparency*: 0 is fully opaque, 100 fully clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ComplexColor {
    /// A solid fill.
    Solid { color: String, alpha: u8 },
}

/// A color as written by the tree author: a plain color string, or a complex
/// color record. Only fields documented as "color-or-complex-color" accept
/// the record form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    Plain(String),
    Complex(ComplexColor),
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        ColorInput::Plain(value.to_string())
    }
}

/// The only color shapes the backend accepts: a bare `RRGGBB` hex string, or
/// a solid record when transparency is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CanonicalColor {
    Hex(String),
    Complex(ComplexColor),
}

impl CanonicalColor {
    /// The six-digit hex part of the color.
    pub fn hex(&self) -> &str {
        match self {
            CanonicalColor::Hex(hex) => hex,
            CanonicalColor::Complex(ComplexColor::Solid { color, .. }) => color,
        }
    }

    /// Percent transparency; 0 for opaque hex colors.
    pub fn alpha(&self) -> u8 {
        match self {
            CanonicalColor::Hex(_) => 0,
            CanonicalColor::Complex(ComplexColor::Solid { alpha, .. }) => *alpha,
        }
    }
}
