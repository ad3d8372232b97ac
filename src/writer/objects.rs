//! Object node codecs: label objects to markup elements

use crate::error::LabelError;
use crate::model::{
    FilenameOrField, ImageObject, LabelObject, LineStyle, ObjectKind, ShapeStyle, TextObject,
};
use crate::units::Units;
use crate::xml::names;
use crate::xml::Element;

/// Build the element for one object
///
/// `index` is the object's position in its list and only appears in errors.
pub fn object_element(
    object: &LabelObject,
    index: usize,
    units: Units,
) -> Result<Element, LabelError> {
    match &object.kind {
        ObjectKind::Box(style) => shape_element(names::OBJECT_BOX, object, style, units),
        ObjectKind::Ellipse(style) => shape_element(names::OBJECT_ELLIPSE, object, style, units),
        ObjectKind::Line(style) => line_element(object, style, units),
        ObjectKind::Image(image) => image_element(object, image, units),
        ObjectKind::Text(text) => text_element(object, text, units),
        ObjectKind::Barcode(_) => Err(LabelError::UnsupportedVariant {
            kind: object.kind.name(),
            index,
        }),
    }
}

fn shape_element(
    name: &str,
    object: &LabelObject,
    style: &ShapeStyle,
    units: Units,
) -> Result<Element, LabelError> {
    let mut node = Element::new(name);

    set_position_attrs(&mut node, object, units)?;
    node.set_length("w", object.w, units)?;
    node.set_length("h", object.h, units)?;

    node.set_length("line_width", style.line_width, units)?;
    node.set_color_or_field("line_color", &style.line_color);
    node.set_color_or_field("fill_color", &style.fill_color);

    set_affine_attrs(&mut node, object);
    set_shadow_attrs(&mut node, object, units)?;
    Ok(node)
}

fn line_element(
    object: &LabelObject,
    style: &LineStyle,
    units: Units,
) -> Result<Element, LabelError> {
    let mut node = Element::new(names::OBJECT_LINE);

    set_position_attrs(&mut node, object, units)?;
    // Lines store their end point as a delta
    node.set_length("dx", object.w, units)?;
    node.set_length("dy", object.h, units)?;

    node.set_length("line_width", style.line_width, units)?;
    node.set_color_or_field("line_color", &style.line_color);

    set_affine_attrs(&mut node, object);
    set_shadow_attrs(&mut node, object, units)?;
    Ok(node)
}

fn image_element(
    object: &LabelObject,
    image: &ImageObject,
    units: Units,
) -> Result<Element, LabelError> {
    let mut node = Element::new(names::OBJECT_IMAGE);

    set_position_attrs(&mut node, object, units)?;
    node.set_length("w", object.w, units)?;
    node.set_length("h", object.h, units)?;

    node.set_length("line_width", image.line_width, units)?;
    set_filename_attrs(&mut node, &image.filename);

    set_affine_attrs(&mut node, object);
    set_shadow_attrs(&mut node, object, units)?;
    Ok(node)
}

fn text_element(
    object: &LabelObject,
    text: &TextObject,
    units: Units,
) -> Result<Element, LabelError> {
    let mut node = Element::new(names::OBJECT_TEXT);

    set_position_attrs(&mut node, object, units)?;
    node.set_length("w", object.w, units)?;
    node.set_length("h", object.h, units)?;

    node.set_color_or_field("color", &text.color);

    node.set_string("font_family", &text.font_family);
    node.set_double("font_size", text.font_size);
    node.set_string("font_weight", text.font_weight.as_str());
    node.set_bool("font_italic", text.italic);
    node.set_bool("font_underline", text.underline);

    node.set_double("line_spacing", text.line_spacing);
    node.set_string("align", text.h_align.as_str());
    node.set_string("valign", text.v_align.as_str());

    set_affine_attrs(&mut node, object);
    set_shadow_attrs(&mut node, object, units)?;

    for paragraph in text.paragraphs() {
        node.append_child(Element::new(names::PARAGRAPH))
            .set_text(paragraph);
    }
    Ok(node)
}

fn set_position_attrs(
    node: &mut Element,
    object: &LabelObject,
    units: Units,
) -> Result<(), LabelError> {
    node.set_length("x", object.x0, units)?;
    node.set_length("y", object.y0, units)
}

fn set_filename_attrs(node: &mut Element, filename: &FilenameOrField) {
    node.set_literal_or_field("src", filename, |path| path.clone());
}

/// The six matrix coefficients, always written
fn set_affine_attrs(node: &mut Element, object: &LabelObject) {
    for (i, value) in object.matrix.coefficients().into_iter().enumerate() {
        node.set_double(&format!("a{}", i), value);
    }
}

/// All shadow attributes or none of them
fn set_shadow_attrs(
    node: &mut Element,
    object: &LabelObject,
    units: Units,
) -> Result<(), LabelError> {
    if let Some(shadow) = &object.shadow {
        node.set_bool("shadow", true);
        node.set_length("shadow_x", shadow.x, units)?;
        node.set_length("shadow_y", shadow.y, units)?;
        node.set_color_or_field("shadow_color", &shadow.color);
        node.set_double("shadow_opacity", shadow.opacity);
    }
    Ok(())
}
