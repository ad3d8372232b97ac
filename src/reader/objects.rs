//! Object node codecs: markup elements to label objects

use crate::error::{FormatError, LabelError};
use crate::model::{
    Affine, FontWeight, HAlign, ImageObject, LabelObject, LineStyle, ObjectKind, Shadow,
    ShapeStyle, TextObject, VAlign,
};
use crate::xml::names;
use crate::xml::Element;

use super::{expect_no_children, unexpected_element};

const SHADOW_ATTRS: &[&str] = &[
    "shadow_x",
    "shadow_y",
    "shadow_color",
    "shadow_color_field",
    "shadow_opacity",
];

/// Read every object element under `parent`, in order
pub fn parse_objects(parent: &Element) -> Result<Vec<LabelObject>, LabelError> {
    parent
        .children
        .iter()
        .enumerate()
        .map(|(index, node)| parse_object(parent, node, index))
        .collect()
}

/// Read one object element
///
/// `index` is the object's position under `parent` and only appears in errors.
pub fn parse_object(parent: &Element, node: &Element, index: usize) -> Result<LabelObject, LabelError> {
    let kind = match node.name.as_str() {
        names::OBJECT_BOX => ObjectKind::Box(parse_shape_style(node)?),
        names::OBJECT_ELLIPSE => ObjectKind::Ellipse(parse_shape_style(node)?),
        names::OBJECT_LINE => ObjectKind::Line(parse_line_style(node)?),
        names::OBJECT_IMAGE => ObjectKind::Image(parse_image(node)?),
        names::OBJECT_TEXT => ObjectKind::Text(parse_text(node)?),
        names::OBJECT_BARCODE => {
            return Err(LabelError::UnsupportedVariant {
                kind: "barcode",
                index,
            })
        }
        _ => return Err(unexpected_element(parent, node).into()),
    };

    if !matches!(kind, ObjectKind::Text(_)) {
        expect_no_children(node)?;
    }

    let (w_name, h_name) = match kind {
        ObjectKind::Line(_) => ("dx", "dy"),
        _ => ("w", "h"),
    };

    Ok(LabelObject {
        x0: node.length("x")?,
        y0: node.length("y")?,
        w: node.length(w_name)?,
        h: node.length(h_name)?,
        matrix: parse_affine(node)?,
        shadow: parse_shadow(node)?,
        kind,
    })
}

fn parse_shape_style(node: &Element) -> Result<ShapeStyle, FormatError> {
    Ok(ShapeStyle {
        line_width: node.length("line_width")?,
        line_color: node.color_or_field("line_color")?,
        fill_color: node.color_or_field("fill_color")?,
    })
}

fn parse_line_style(node: &Element) -> Result<LineStyle, FormatError> {
    Ok(LineStyle {
        line_width: node.length("line_width")?,
        line_color: node.color_or_field("line_color")?,
    })
}

fn parse_image(node: &Element) -> Result<ImageObject, FormatError> {
    Ok(ImageObject {
        line_width: node.opt_length("line_width")?.unwrap_or_default(),
        filename: node.literal_or_field("src", "a file name", |s| Some(s.to_string()))?,
    })
}

fn parse_text(node: &Element) -> Result<TextObject, FormatError> {
    let mut paragraphs = Vec::new();
    for child in &node.children {
        if child.name != names::PARAGRAPH {
            return Err(unexpected_element(node, child));
        }
        expect_no_children(child)?;
        paragraphs.push(child.text.as_deref().unwrap_or_default());
    }

    Ok(TextObject {
        color: node.color_or_field("color")?,
        font_family: node.string("font_family")?.to_string(),
        font_size: node.double("font_size")?,
        font_weight: node.keyword("font_weight", "'normal' or 'bold'", FontWeight::parse)?,
        italic: node.bool("font_italic")?,
        underline: node.bool("font_underline")?,
        line_spacing: node.double("line_spacing")?,
        h_align: node.keyword("align", "'left', 'center' or 'right'", HAlign::parse)?,
        v_align: node.keyword("valign", "'top', 'middle' or 'bottom'", VAlign::parse)?,
        text: paragraphs.join("\n"),
    })
}

/// Missing coefficients fall back to the identity matrix's
fn parse_affine(node: &Element) -> Result<Affine, FormatError> {
    let mut a = Affine::IDENTITY.coefficients();
    for (i, slot) in a.iter_mut().enumerate() {
        if let Some(value) = node.opt_double(&format!("a{}", i))? {
            *slot = value;
        }
    }
    Ok(Affine::from_coefficients(a))
}

/// The shadow block is all or nothing
fn parse_shadow(node: &Element) -> Result<Option<Shadow>, FormatError> {
    if node.opt_bool("shadow")?.unwrap_or(false) {
        return Ok(Some(Shadow {
            x: node.length("shadow_x")?,
            y: node.length("shadow_y")?,
            color: node.color_or_field("shadow_color")?,
            opacity: node.double("shadow_opacity")?,
        }));
    }

    match SHADOW_ATTRS.iter().find(|name| node.has_attr(name)) {
        Some(stray) => Err(node.violation(format!(
            "'{}' is set but the shadow is not enabled",
            stray
        ))),
        None => Ok(None),
    }
}
