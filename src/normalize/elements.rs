//! Dispatch of visual elements to their canonical object variants.

use log::debug;

use crate::errors::{NormalizeError, Result};
use crate::models::common::Frame;
use crate::models::elements::{TextObject, VisualObject};
use crate::models::image::{ImageObject, ImageSource, ImageSourceInput};
use crate::models::line::{LineObject, LineObjectStyle};
use crate::models::properties::{TextObjectStyle, TextStyle};
use crate::models::shape::{ShapeObject, ShapeObjectStyle, DEFAULT_SHAPE_TYPE};
use crate::models::table::{TableCell, TableCellInput, TableObject, TableObjectStyle};
use crate::models::text_element::{TextChild, TextRun};
use crate::models::tree::{
    Element, ElementType, ImageProps, LineProps, ShapeProps, TableCellProps, TableProps,
    TextProps,
};
use crate::normalize::color::{normalize_optional_color, normalize_optional_color_input};
use crate::normalize::coordinate::normalize_frame;
use crate::normalize::text::normalize_text;
use crate::normalize::Normalizer;

impl Normalizer {
    /// Normalizes a single visual element into its canonical object.
    ///
    /// `line` elements keep their raw endpoints; every other kind requires a
    /// `style` prop and gets a fully resolved x/y/w/h box.
    ///
    /// # Errors
    /// - `MissingStyle` when a non-line element has no `style`.
    /// - `UnknownNodeKind` for elements that are not visual objects
    ///   (`slide`, `text-link`, a stray `table-cell`, ...).
    /// - Any color, position or text error from the element's content.
    pub fn visual_node(&self, node: &Element) -> Result<VisualObject> {
        debug!("normalizing `{}` element", node.element_type());
        match node {
            Element::Text(props) => self.text_object(props).map(VisualObject::Text),
            Element::Image(props) => self.image_object(props).map(VisualObject::Image),
            Element::Shape(props) => self.shape_object(props).map(VisualObject::Shape),
            Element::Table(props) => self.table_object(props).map(VisualObject::Table),
            Element::Line(props) => Ok(VisualObject::Line(line_object(props)?)),
            Element::Presentation(_)
            | Element::Slide(_)
            | Element::MasterSlide(_)
            | Element::TableCell(_)
            | Element::TextLink(_)
            | Element::TextBullet(_) => Err(NormalizeError::UnknownNodeKind(
                node.element_type().to_string(),
            )),
        }
    }

    fn text_object(&self, props: &TextProps) -> Result<TextObject> {
        let style = props
            .style
            .as_ref()
            .ok_or(NormalizeError::MissingStyle(ElementType::Text))?;
        Ok(TextObject {
            text: runs_or_empty(props.children.as_ref())?,
            style: self.text_object_style(style)?,
            col_span: None,
            row_span: None,
        })
    }

    /// Same as a text object, plus the cell's spans.
    fn table_cell_object(&self, props: &TableCellProps) -> Result<TextObject> {
        let style = props
            .style
            .as_ref()
            .ok_or(NormalizeError::MissingStyle(ElementType::TableCell))?;
        Ok(TextObject {
            text: runs_or_empty(props.children.as_ref())?,
            style: self.text_object_style(style)?,
            col_span: props.col_span,
            row_span: props.row_span,
        })
    }

    fn text_object_style(&self, style: &TextStyle) -> Result<TextObjectStyle> {
        Ok(TextObjectStyle {
            frame: normalize_frame(&style.frame, &self.options.default_frame)?,
            color: normalize_optional_color(style.color.as_ref())?,
            font_face: Some(
                style
                    .font_face
                    .clone()
                    .unwrap_or_else(|| self.options.default_font_face.clone()),
            ),
            font_size: Some(style.font_size.unwrap_or(self.options.default_font_size)),
            background_color: normalize_optional_color_input(style.background_color.as_ref())?,
            align: style.align,
            vertical_align: style.vertical_align,
            bold: style.bold,
            italic: style.italic,
            underline: style.underline,
            strike: style.strike,
            subscript: style.subscript,
            superscript: style.superscript,
            char_spacing: style.char_spacing,
            line_spacing: style.line_spacing,
            para_space_before: style.para_space_before,
            para_space_after: style.para_space_after,
            margin: style.margin.clone(),
            rotate: style.rotate,
        })
    }

    fn image_object(&self, props: &ImageProps) -> Result<ImageObject> {
        let style = props
            .style
            .as_ref()
            .ok_or(NormalizeError::MissingStyle(ElementType::Image))?;
        let src = match &props.src {
            ImageSourceInput::Bare(path) => ImageSource::Path { path: path.clone() },
            ImageSourceInput::Structured(source) => source.clone(),
        };
        Ok(ImageObject {
            src,
            style: normalize_frame(&style.frame, &self.options.default_frame)?,
            sizing: props.sizing.clone(),
        })
    }

    fn shape_object(&self, props: &ShapeProps) -> Result<ShapeObject> {
        let style = props
            .style
            .as_ref()
            .ok_or(NormalizeError::MissingStyle(ElementType::Shape))?;

        // Absent children means no text region, not an empty one.
        let text = props.children.as_ref().map(normalize_text).transpose()?;

        Ok(ShapeObject {
            shape_type: props
                .shape_type
                .clone()
                .unwrap_or_else(|| DEFAULT_SHAPE_TYPE.to_string()),
            text,
            style: ShapeObjectStyle {
                frame: normalize_frame(&style.frame, &self.options.default_frame)?,
                background_color: normalize_optional_color_input(
                    style.background_color.as_ref(),
                )?,
                border_color: normalize_optional_color(style.border_color.as_ref())?,
                border_width: style.border_width,
                rect_radius: style.rect_radius,
                color: normalize_optional_color(style.color.as_ref())?,
                font_face: style.font_face.clone(),
                font_size: style.font_size,
                align: style.align,
                vertical_align: style.vertical_align,
            },
        })
    }

    fn table_object(&self, props: &TableProps) -> Result<TableObject> {
        let style = props
            .style
            .as_ref()
            .ok_or(NormalizeError::MissingStyle(ElementType::Table))?;

        let rows = props
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| self.table_cell(cell).map(TableCell::Text))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TableObject {
            rows,
            style: TableObjectStyle {
                frame: normalize_frame(&style.frame, &self.options.default_frame)?,
                border_color: normalize_optional_color(style.border_color.as_ref())?,
                border_width: style.border_width,
                margin: style.margin.clone(),
            },
            column_widths: props.column_widths.clone(),
        })
    }

    fn table_cell(&self, cell: &TableCellInput) -> Result<TextObject> {
        match cell {
            // Shorthand cell: zeroed box, one unstyled run, no font defaults.
            TableCellInput::Text(text) => Ok(TextObject {
                text: vec![TextRun::plain(text.as_str())],
                style: TextObjectStyle::with_frame(Frame::zero()),
                col_span: None,
                row_span: None,
            }),
            TableCellInput::Element(element) => match element.as_ref() {
                Element::TableCell(props) => self.table_cell_object(props),
                Element::Text(props) => self.text_object(props),
                other => Err(NormalizeError::UnknownNodeKind(
                    other.element_type().to_string(),
                )),
            },
            TableCellInput::Unknown(unknown) => {
                Err(NormalizeError::UnknownNodeKind(unknown.tag().to_string()))
            }
        }
    }
}

fn line_object(props: &LineProps) -> Result<LineObject> {
    let style = match &props.style {
        Some(style) => LineObjectStyle {
            color: normalize_optional_color(style.color.as_ref())?,
            width: style.width,
            dash_type: style.dash_type.clone(),
            begin_arrow_type: style.begin_arrow_type.clone(),
            end_arrow_type: style.end_arrow_type.clone(),
        },
        None => LineObjectStyle::default(),
    };
    Ok(LineObject {
        x1: props.x1,
        y1: props.y1,
        x2: props.x2,
        y2: props.y2,
        style,
    })
}

fn runs_or_empty(children: Option<&TextChild>) -> Result<Vec<TextRun>> {
    match children {
        Some(children) => normalize_text(children),
        None => Ok(Vec::new()),
    }
}
