//! Template subtree input

use crate::error::FormatError;
use crate::model::{Frame, FrameShape, Layout, Markup, Template};
use crate::xml::names;
use crate::xml::Element;

use super::{expect_no_children, missing_element, set_once, unexpected_element};

/// Read a `Template` element
///
/// Exactly one frame element is required; `Meta` children supply categories.
pub fn parse_template(node: &Element) -> Result<Template, FormatError> {
    let mut categories = Vec::new();
    let mut frame = None;

    for child in &node.children {
        match child.name.as_str() {
            names::META => {
                expect_no_children(child)?;
                if let Some(category) = child.attr("category") {
                    categories.push(category.to_string());
                }
            }
            names::LABEL_RECTANGLE | names::LABEL_ROUND | names::LABEL_ELLIPSE => {
                set_once(&mut frame, child, node)?
            }
            _ => return Err(unexpected_element(node, child)),
        }
    }

    let frame = frame.ok_or_else(|| missing_element(node, names::LABEL_RECTANGLE))?;

    Ok(Template {
        brand: node.string("brand")?.to_string(),
        part: node.string("part")?.to_string(),
        description: node.attr("description").unwrap_or_default().to_string(),
        paper_id: node.string("size")?.to_string(),
        page_width: node.length("width")?,
        page_height: node.length("height")?,
        categories,
        frame: parse_frame(frame)?,
    })
}

fn parse_frame(node: &Element) -> Result<Frame, FormatError> {
    let shape = match node.name.as_str() {
        names::LABEL_ROUND => FrameShape::Round {
            r: node.length("radius")?,
            waste: node.opt_length("waste")?.unwrap_or_default(),
        },
        names::LABEL_ELLIPSE => FrameShape::Ellipse {
            w: node.length("width")?,
            h: node.length("height")?,
            waste: node.opt_length("waste")?.unwrap_or_default(),
        },
        _ => FrameShape::Rect {
            w: node.length("width")?,
            h: node.length("height")?,
            r: node.opt_length("round")?.unwrap_or_default(),
            x_waste: node.opt_length("x_waste")?.unwrap_or_default(),
            y_waste: node.opt_length("y_waste")?.unwrap_or_default(),
        },
    };

    let mut markups = Vec::new();
    let mut layouts = Vec::new();
    for child in &node.children {
        expect_no_children(child)?;
        match child.name.as_str() {
            names::LAYOUT => layouts.push(parse_layout(child)?),
            names::MARKUP_MARGIN => markups.push(Markup::Margin {
                size: child.length("size")?,
            }),
            names::MARKUP_LINE => markups.push(Markup::Line {
                x1: child.length("x1")?,
                y1: child.length("y1")?,
                x2: child.length("x2")?,
                y2: child.length("y2")?,
            }),
            names::MARKUP_CIRCLE => markups.push(Markup::Circle {
                x0: child.length("x0")?,
                y0: child.length("y0")?,
                r: child.length("radius")?,
            }),
            names::MARKUP_RECT => markups.push(Markup::Rect {
                x1: child.length("x1")?,
                y1: child.length("y1")?,
                w: child.length("w")?,
                h: child.length("h")?,
                r: child.opt_length("r")?.unwrap_or_default(),
            }),
            _ => return Err(unexpected_element(node, child)),
        }
    }

    Ok(Frame {
        id: node.attr("id").unwrap_or("0").to_string(),
        shape,
        markups,
        layouts,
    })
}

fn parse_layout(node: &Element) -> Result<Layout, FormatError> {
    Ok(Layout {
        nx: node.uint("nx")?,
        ny: node.uint("ny")?,
        x0: node.length("x0")?,
        y0: node.length("y0")?,
        dx: node.length("dx")?,
        dy: node.length("dy")?,
    })
}
