//! Flattening of rich-text content into ordered text runs.
//!
//! Text content is recursive (strings, numbers, arrays, link and bullet
//! markers wrapping more content). The output is always a single flat list of
//! runs in reading order.

use log::trace;

use crate::errors::{NormalizeError, Result};
use crate::models::bullet::BulletMarker;
use crate::models::link::{Link, LinkTarget};
use crate::models::properties::{RunStyle, TextRunStyle};
use crate::models::text_element::{TextChild, TextRun};
use crate::models::tree::{Element, TextBulletProps, TextLinkProps, TextProps};
use crate::normalize::color::normalize_optional_color;

/// Flattens text content into canonical runs, preserving source order.
///
/// Pure and deterministic: the same input always yields the same runs.
///
/// # Errors
/// - `InvalidTextChild` for booleans, nulls, non-element objects, or elements
///   other than `text`/`text-link`/`text-bullet` inside the content.
/// - `InvalidColor` from a marker's style.
pub fn normalize_text(input: &TextChild) -> Result<Vec<TextRun>> {
    let mut runs = Vec::new();
    collect_runs(input, &mut runs)?;
    Ok(runs)
}

fn collect_runs(input: &TextChild, out: &mut Vec<TextRun>) -> Result<()> {
    match input {
        TextChild::Text(text) => out.push(TextRun::plain(text.as_str())),
        TextChild::Number(number) => out.push(TextRun::plain(number_to_text(number))),
        TextChild::List(items) => {
            for item in items {
                collect_runs(item, out)?;
            }
        }
        TextChild::Element(element) => match element.as_ref() {
            Element::TextLink(props) => out.push(normalize_link(props)?),
            Element::TextBullet(props) => out.extend(normalize_bullet(props)?),
            Element::Text(props) => out.extend(normalize_span(props)?),
            other => {
                return Err(NormalizeError::InvalidTextChild(format!(
                    "`{}` element cannot appear inside text content",
                    other.element_type()
                )))
            }
        },
        TextChild::Invalid(value) => {
            return Err(NormalizeError::InvalidTextChild(format!(
                "unsupported text content `{}`",
                value
            )))
        }
    }
    Ok(())
}

/// Combines two run styles: every field set on `child` wins, and `parent`
/// fills the fields `child` leaves unset.
pub fn merge_style_fallback(child: &RunStyle, parent: &RunStyle) -> RunStyle {
    RunStyle {
        color: child.color.clone().or_else(|| parent.color.clone()),
        highlight: child.highlight.clone().or_else(|| parent.highlight.clone()),
        font_face: child.font_face.clone().or_else(|| parent.font_face.clone()),
        font_size: child.font_size.or(parent.font_size),
        bold: child.bold.or(parent.bold),
        italic: child.italic.or(parent.italic),
        underline: child.underline.or(parent.underline),
        strike: child.strike.or(parent.strike),
        subscript: child.subscript.or(parent.subscript),
        superscript: child.superscript.or(parent.superscript),
        char_spacing: child.char_spacing.or(parent.char_spacing),
    }
}

/// Canonicalizes the colors of an authored run style; other fields are copied.
pub fn normalize_run_style(style: Option<&TextRunStyle>) -> Result<RunStyle> {
    let Some(style) = style else {
        return Ok(RunStyle::default());
    };
    Ok(RunStyle {
        color: normalize_optional_color(style.color.as_ref())?,
        highlight: normalize_optional_color(style.highlight.as_ref())?,
        font_face: style.font_face.clone(),
        font_size: style.font_size,
        bold: style.bold,
        italic: style.italic,
        underline: style.underline,
        strike: style.strike,
        subscript: style.subscript,
        superscript: style.superscript,
        char_spacing: style.char_spacing,
    })
}

fn normalize_link(props: &TextLinkProps) -> Result<TextRun> {
    let target = match (&props.url, props.slide) {
        (Some(url), _) => LinkTarget::Url(url.clone()),
        (None, Some(index)) => LinkTarget::SlideIndex(index),
        (None, None) => {
            return Err(NormalizeError::InvalidTextChild(
                "`text-link` element has neither a `url` nor a `slide` target".to_string(),
            ))
        }
    };

    let text = match &props.children {
        Some(children) => plain_text(children)?,
        None => String::new(),
    };

    Ok(TextRun {
        text,
        style: normalize_run_style(props.style.as_ref())?,
        link: Some(Link {
            target,
            tooltip: props.tooltip.clone(),
        }),
        ..Default::default()
    })
}

/// A `text` element inside text content is a styled span. Its character
/// styling is a fallback for its runs; box and paragraph fields are ignored.
fn normalize_span(props: &TextProps) -> Result<Vec<TextRun>> {
    let span_style = match &props.style {
        Some(style) => RunStyle {
            color: normalize_optional_color(style.color.as_ref())?,
            highlight: None,
            font_face: style.font_face.clone(),
            font_size: style.font_size,
            bold: style.bold,
            italic: style.italic,
            underline: style.underline,
            strike: style.strike,
            subscript: style.subscript,
            superscript: style.superscript,
            char_spacing: style.char_spacing,
        },
        None => RunStyle::default(),
    };
    let nested = match &props.children {
        Some(children) => normalize_text(children)?,
        None => Vec::new(),
    };
    Ok(nested
        .into_iter()
        .map(|run| TextRun {
            style: merge_style_fallback(&run.style, &span_style),
            ..run
        })
        .collect())
}

fn normalize_bullet(props: &TextBulletProps) -> Result<Vec<TextRun>> {
    let nested = match &props.children {
        Some(children) => normalize_text(children)?,
        None => Vec::new(),
    };

    let marker = if props.options.is_empty() {
        BulletMarker::Default
    } else {
        BulletMarker::Options(props.options.clone())
    };
    let bullet_style = normalize_run_style(props.style.as_ref())?;

    trace!("bullet wraps {} run(s)", nested.len());

    let last = nested.len().saturating_sub(1);
    let runs = nested
        .into_iter()
        .enumerate()
        .map(|(index, run)| TextRun {
            style: merge_style_fallback(&run.style, &bullet_style),
            // One marker per paragraph; later runs keep whatever nested bullet they carried.
            bullet: if index == 0 { Some(marker.clone()) } else { run.bullet },
            // The whole bullet renders as one paragraph.
            break_line: Some(index == last),
            rtl_mode: run.rtl_mode.or(props.rtl_mode),
            lang: run.lang.or_else(|| props.lang.clone()),
            text: run.text,
            link: run.link,
        })
        .collect();
    Ok(runs)
}

/// Text of a link: strings and numbers, possibly in (nested) arrays, concatenated.
fn plain_text(input: &TextChild) -> Result<String> {
    match input {
        TextChild::Text(text) => Ok(text.clone()),
        TextChild::Number(number) => Ok(number_to_text(number)),
        TextChild::List(items) => items.iter().map(plain_text).collect(),
        TextChild::Element(element) => Err(NormalizeError::InvalidTextChild(format!(
            "`{}` element cannot appear inside a text link",
            element.element_type()
        ))),
        TextChild::Invalid(value) => Err(NormalizeError::InvalidTextChild(format!(
            "unsupported text content `{}`",
            value
        ))),
    }
}

/// Magnitude from which the authoring layer prints numbers in exponent form.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Prints a number the way the authoring layer does: integral values have no
/// fractional part (`5.0` prints as `5`, `1e20` in full), and magnitudes of
/// 1e21 and up use a signed exponent (`1e+21`).
fn number_to_text(number: &serde_json::Number) -> String {
    let Some(value) = number.as_f64().filter(|_| number.is_f64()) else {
        return number.to_string();
    };
    if value.abs() >= EXPONENT_THRESHOLD {
        format!("{:e}", value).replacen('e', "e+", 1)
    } else if value.fract() == 0.0 {
        integral_to_text(value)
    } else {
        number.to_string()
    }
}

/// Writes the shortest round-trip digits of an integral value without an
/// exponent, padding with zeros (`1.2345e20` -> `123450000000000000000`).
fn integral_to_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{:.0}", value);
    };
    let Ok(exponent) = exponent.parse::<usize>() else {
        return format!("{:.0}", value);
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(unsigned) => ("-", unsigned),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let width = exponent + 1;
    format!("{sign}{digits:0<width$}")
}
