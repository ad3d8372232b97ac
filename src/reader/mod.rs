//! Document reader: gLabels markup to label model
//!
//! Reading is the exact inverse of writing. Any malformed, ambiguous or
//! missing markup aborts the whole load; there is no partial document.

pub mod document;
pub mod objects;
pub mod template;

pub use document::{deserialize_objects, read_buffer, read_file, read_str};

use crate::error::FormatError;
use crate::xml::Element;

fn unexpected_element(parent: &Element, child: &Element) -> FormatError {
    FormatError::UnexpectedElement {
        parent: parent.name.clone(),
        element: child.name.clone(),
        span: child.span.clone(),
    }
}

fn missing_element(parent: &Element, element: &'static str) -> FormatError {
    FormatError::MissingElement {
        parent: parent.name.clone(),
        element,
        span: parent.span.clone(),
    }
}

/// Record a child that may appear at most once
fn set_once<'a>(
    slot: &mut Option<&'a Element>,
    child: &'a Element,
    parent: &Element,
) -> Result<(), FormatError> {
    if slot.is_some() {
        return Err(FormatError::DuplicateElement {
            parent: parent.name.clone(),
            element: child.name.clone(),
            span: child.span.clone(),
        });
    }
    *slot = Some(child);
    Ok(())
}

/// Fail on the first child element, for elements that must be leaves
fn expect_no_children(node: &Element) -> Result<(), FormatError> {
    match node.children.first() {
        Some(child) => Err(unexpected_element(node, child)),
        None => Ok(()),
    }
}
