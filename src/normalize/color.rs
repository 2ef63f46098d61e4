//! Color canonicalization.
//!
//! Parsing is delegated to `csscolorparser`, which accepts named colors, hex
//! (with or without `#`, 3/4/6/8 digits), `rgb()/rgba()`, `hsl()/hsla()` and
//! friends. This module only decides the canonical shape.

use log::trace;

use crate::errors::{NormalizeError, Result};
use crate::models::colors::{CanonicalColor, ColorInput, ComplexColor};

/// Converts a color string into its canonical form.
///
/// Opaque colors become a bare six-digit uppercase hex string (`"FF0000"`).
/// Colors with an alpha channel become
/// `{kind: solid, color: hex, alpha: transparency}` where `transparency` is
/// `round(100 * (1 - opacity))`.
///
/// # Errors
/// `NormalizeError::InvalidColor` if the string is not a color.
pub fn normalize_color(input: &str) -> Result<CanonicalColor> {
    let parsed = csscolorparser::parse(input).map_err(|e| NormalizeError::InvalidColor {
        value: input.to_string(),
        reason: e.to_string(),
    })?;

    let [r, g, b, _] = parsed.to_rgba8();
    let hex = format!("{:02X}{:02X}{:02X}", r, g, b);

    let opacity = f64::from(parsed.a);
    if opacity >= 1.0 {
        return Ok(CanonicalColor::Hex(hex));
    }

    let alpha = (100.0 * (1.0 - opacity)).round().clamp(0.0, 100.0) as u8;
    trace!("color `{}` -> {} at {}% transparency", input, hex, alpha);
    Ok(CanonicalColor::Complex(ComplexColor::Solid { color: hex, alpha }))
}

/// Canonicalizes a color-or-complex-color value.
///
/// A complex color keeps its authored transparency; its inner color is
/// reduced to opaque hex. Any alpha channel on the inner color string is
/// ignored in favour of the explicit `alpha`.
pub fn normalize_color_input(input: &ColorInput) -> Result<CanonicalColor> {
    match input {
        ColorInput::Plain(color) => normalize_color(color),
        ColorInput::Complex(ComplexColor::Solid { color, alpha }) => {
            if *alpha > 100 {
                return Err(NormalizeError::InvalidColor {
                    value: color.clone(),
                    reason: format!("alpha {} is outside 0..=100", alpha),
                });
            }
            let hex = normalize_color(color)?.hex().to_string();
            Ok(CanonicalColor::Complex(ComplexColor::Solid {
                color: hex,
                alpha: *alpha,
            }))
        }
    }
}

/// `normalize_color` lifted over an optional value.
pub(crate) fn normalize_optional_color(input: Option<&String>) -> Result<Option<CanonicalColor>> {
    input.map(|color| normalize_color(color)).transpose()
}

/// `normalize_color_input` lifted over an optional value.
pub(crate) fn normalize_optional_color_input(
    input: Option<&ColorInput>,
) -> Result<Option<CanonicalColor>> {
    input.map(normalize_color_input).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn solid(color: &str, alpha: u8) -> CanonicalColor {
        CanonicalColor::Complex(ComplexColor::Solid {
            color: color.to_string(),
            alpha,
        })
    }

    #[rstest]
    #[case("red", "FF0000")]
    #[case("#00ff00", "00FF00")]
    #[case("#abc", "AABBCC")]
    #[case("rgb(0, 0, 255)", "0000FF")]
    #[case("hsl(0, 100%, 50%)", "FF0000")]
    #[case("rebeccapurple", "663399")]
    fn test_opaque_colors_become_bare_hex(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(
            normalize_color(input).unwrap(),
            CanonicalColor::Hex(expected.to_string())
        );
    }

    #[test]
    fn test_alpha_is_inverted_into_transparency() {
        assert_eq!(normalize_color("rgba(0,0,0,0.25)").unwrap(), solid("000000", 75));
        assert_eq!(normalize_color("rgba(255,255,255,0)").unwrap(), solid("FFFFFF", 100));
        assert_eq!(normalize_color("hsla(0, 100%, 50%, 0.5)").unwrap(), solid("FF0000", 50));
    }

    #[test]
    fn test_canonical_hex_is_stable() {
        let first = normalize_color("#1a2b3c").unwrap();
        assert_eq!(first, CanonicalColor::Hex("1A2B3C".to_string()));
        // Feeding the canonical form back in yields the same value.
        assert_eq!(normalize_color(first.hex()).unwrap(), first);
    }

    #[test]
    fn test_canonical_solid_is_stable() {
        let first = normalize_color("rgba(16, 32, 48, 0.6)").unwrap();
        let again = normalize_color_input(&ColorInput::Complex(ComplexColor::Solid {
            color: first.hex().to_string(),
            alpha: first.alpha(),
        }))
        .unwrap();
        assert_eq!(again, first);
        assert_eq!(first.alpha(), 40);
    }

    #[test]
    fn test_invalid_color_names_the_value() {
        let err = normalize_color("not-a-color").unwrap_err();
        match err {
            NormalizeError::InvalidColor { value, .. } => assert_eq!(value, "not-a-color"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_complex_input() {
        let input = ColorInput::Complex(ComplexColor::Solid {
            color: "blue".to_string(),
            alpha: 30,
        });
        assert_eq!(normalize_color_input(&input).unwrap(), solid("0000FF", 30));

        let too_clear = ColorInput::Complex(ComplexColor::Solid {
            color: "blue".to_string(),
            alpha: 130,
        });
        assert!(matches!(
            normalize_color_input(&too_clear),
            Err(NormalizeError::InvalidColor { .. })
        ));

        let plain = ColorInput::from("white");
        assert_eq!(
            normalize_color_input(&plain).unwrap(),
            CanonicalColor::Hex("FFFFFF".to_string())
        );
    }
}
