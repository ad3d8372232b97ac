//! Template subtree output

use crate::error::LabelError;
use crate::model::{Frame, FrameShape, Layout, Markup, Template};
use crate::units::Units;
use crate::xml::names;
use crate::xml::Element;

/// Build the `Template` element for a document
pub fn template_element(template: &Template, units: Units) -> Result<Element, LabelError> {
    let mut node = Element::new(names::TEMPLATE);

    node.set_string("brand", &template.brand);
    node.set_string("part", &template.part);
    node.set_string("size", &template.paper_id);
    node.set_length("width", template.page_width, units)?;
    node.set_length("height", template.page_height, units)?;
    node.set_string("description", &template.description);

    for category in &template.categories {
        node.append_child(Element::new(names::META))
            .set_string("category", category);
    }

    node.append_child(frame_element(&template.frame, units)?);
    Ok(node)
}

fn frame_element(frame: &Frame, units: Units) -> Result<Element, LabelError> {
    let mut node = match &frame.shape {
        FrameShape::Rect {
            w,
            h,
            r,
            x_waste,
            y_waste,
        } => {
            let mut node = Element::new(names::LABEL_RECTANGLE);
            node.set_string("id", &frame.id);
            node.set_length("width", *w, units)?;
            node.set_length("height", *h, units)?;
            node.set_length("round", *r, units)?;
            node.set_length("x_waste", *x_waste, units)?;
            node.set_length("y_waste", *y_waste, units)?;
            node
        }
        FrameShape::Round { r, waste } => {
            let mut node = Element::new(names::LABEL_ROUND);
            node.set_string("id", &frame.id);
            node.set_length("radius", *r, units)?;
            node.set_length("waste", *waste, units)?;
            node
        }
        FrameShape::Ellipse { w, h, waste } => {
            let mut node = Element::new(names::LABEL_ELLIPSE);
            node.set_string("id", &frame.id);
            node.set_length("width", *w, units)?;
            node.set_length("height", *h, units)?;
            node.set_length("waste", *waste, units)?;
            node
        }
    };

    for markup in &frame.markups {
        node.append_child(markup_element(markup, units)?);
    }
    for layout in &frame.layouts {
        node.append_child(layout_element(layout, units)?);
    }
    Ok(node)
}

fn markup_element(markup: &Markup, units: Units) -> Result<Element, LabelError> {
    let node = match markup {
        Markup::Margin { size } => {
            let mut node = Element::new(names::MARKUP_MARGIN);
            node.set_length("size", *size, units)?;
            node
        }
        Markup::Line { x1, y1, x2, y2 } => {
            let mut node = Element::new(names::MARKUP_LINE);
            node.set_length("x1", *x1, units)?;
            node.set_length("y1", *y1, units)?;
            node.set_length("x2", *x2, units)?;
            node.set_length("y2", *y2, units)?;
            node
        }
        Markup::Circle { x0, y0, r } => {
            let mut node = Element::new(names::MARKUP_CIRCLE);
            node.set_length("x0", *x0, units)?;
            node.set_length("y0", *y0, units)?;
            node.set_length("radius", *r, units)?;
            node
        }
        Markup::Rect { x1, y1, w, h, r } => {
            let mut node = Element::new(names::MARKUP_RECT);
            node.set_length("x1", *x1, units)?;
            node.set_length("y1", *y1, units)?;
            node.set_length("w", *w, units)?;
            node.set_length("h", *h, units)?;
            node.set_length("r", *r, units)?;
            node
        }
    };
    Ok(node)
}

fn layout_element(layout: &Layout, units: Units) -> Result<Element, LabelError> {
    let mut node = Element::new(names::LAYOUT);
    node.set_uint("nx", layout.nx);
    node.set_uint("ny", layout.ny);
    node.set_length("x0", layout.x0, units)?;
    node.set_length("y0", layout.y0, units)?;
    node.set_length("dx", layout.dx, units)?;
    node.set_length("dy", layout.dy, units)?;
    Ok(node)
}
