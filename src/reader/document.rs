//! Whole-document and fragment input

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::{FormatError, LabelError};
use crate::model::{LabelDocument, LabelObject, MergeSource};
use crate::xml::names;
use crate::xml::Element;

use super::objects::parse_objects;
use super::template::parse_template;
use super::{missing_element, set_once, unexpected_element};

/// Read a document from bytes
pub fn read_buffer(buffer: &[u8]) -> Result<LabelDocument, LabelError> {
    read_str(decode(buffer)?)
}

/// Read a document from text
///
/// Error spans are byte offsets into `source`.
pub fn read_str(source: &str) -> Result<LabelDocument, LabelError> {
    let root = Element::parse_document(source)?;
    parse_document_root(&root)
}

/// Read a document from a file
pub fn read_file(path: &Path) -> Result<LabelDocument, LabelError> {
    let buffer = fs::read(path).map_err(|e| LabelError::io(path, e))?;
    let document = read_buffer(&buffer)?;
    log::debug!(
        "read {} ({} objects, {} bytes)",
        path.display(),
        document.objects.len(),
        buffer.len()
    );
    Ok(document)
}

/// Read an object fragment produced by `serialize_objects`
pub fn deserialize_objects(buffer: &[u8]) -> Result<Vec<LabelObject>, LabelError> {
    let root = Element::parse_document(decode(buffer)?)?;
    expect_root(&root, names::FRAGMENT_ROOT)?;
    parse_objects(&root)
}

fn decode(buffer: &[u8]) -> Result<&str, FormatError> {
    std::str::from_utf8(buffer).map_err(|e| {
        let at = e.valid_up_to();
        FormatError::Syntax {
            message: format!("document is not valid UTF-8: {}", e),
            span: at..at,
        }
    })
}

fn expect_root(root: &Element, expected: &'static str) -> Result<(), FormatError> {
    if root.name != expected {
        return Err(FormatError::UnexpectedRoot {
            expected,
            found: root.name.clone(),
            span: root.span.clone(),
        });
    }
    Ok(())
}

fn parse_document_root(root: &Element) -> Result<LabelDocument, LabelError> {
    expect_root(root, names::DOCUMENT_ROOT)?;

    let version = root.string("version")?;
    if version != names::DOCUMENT_VERSION {
        return Err(FormatError::UnsupportedVersion {
            expected: names::DOCUMENT_VERSION,
            found: version.to_string(),
            span: root.span.clone(),
        }
        .into());
    }

    let mut template = None;
    let mut objects = None;
    let mut merge = None;
    let mut data = None;
    for child in &root.children {
        match child.name.as_str() {
            names::TEMPLATE => set_once(&mut template, child, root)?,
            names::OBJECTS => set_once(&mut objects, child, root)?,
            names::MERGE => set_once(&mut merge, child, root)?,
            // Embedded image data; nothing reads it yet
            names::DATA => set_once(&mut data, child, root)?,
            _ => return Err(unexpected_element(root, child).into()),
        }
    }

    let template = template.ok_or_else(|| missing_element(root, names::TEMPLATE))?;
    let objects = objects.ok_or_else(|| missing_element(root, names::OBJECTS))?;

    Ok(LabelDocument {
        template: Arc::new(parse_template(template)?),
        rotate: objects.opt_bool("rotate")?.unwrap_or(false),
        merge: match merge {
            Some(node) => parse_merge(node)?,
            None => MergeSource::None,
        },
        objects: parse_objects(objects)?,
    })
}

fn parse_merge(node: &Element) -> Result<MergeSource, FormatError> {
    let id = node.string("type")?;
    // `type="None"` reads as no merge
    let merge = MergeSource::external(id, node.attr("src").unwrap_or_default());
    if !merge.is_known() {
        log::warn!("unknown merge source type '{}'", id);
    }
    Ok(merge)
}
