//! Whole-document and fragment output

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::LabelError;
use crate::model::merge::NONE_ID;
use crate::model::{LabelDocument, LabelObject, MergeSource};
use crate::xml::names;
use crate::xml::Element;

use super::objects::object_element;
use super::template::template_element;
use super::WriterConfig;

/// Serializes label documents with a fixed configuration
///
/// The writer holds no state between calls; every call builds and drops its
/// own element tree.
#[derive(Debug, Clone, Default)]
pub struct LabelWriter {
    config: WriterConfig,
}

impl LabelWriter {
    pub fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Serialize a document to bytes
    pub fn write_buffer(&self, document: &LabelDocument) -> Result<Vec<u8>, LabelError> {
        let root = self.document_element(document)?;
        root.to_document_bytes(self.config.indent)
    }

    /// Serialize a document to a file
    ///
    /// Failures to create or write the file are logged and returned.
    pub fn write_file(&self, document: &LabelDocument, path: &Path) -> Result<(), LabelError> {
        let buffer = self.write_buffer(document)?;
        let result = if self.config.atomic {
            write_atomic(path, &buffer)
        } else {
            fs::write(path, &buffer).map_err(|e| LabelError::io(path, e))
        };
        if let Err(e) = &result {
            log::warn!("Cannot write file {}: {}", path.display(), e);
        } else {
            log::debug!(
                "wrote {} ({} objects, {} bytes)",
                path.display(),
                document.objects.len(),
                buffer.len()
            );
        }
        result
    }

    /// Serialize objects alone, for transfer between documents
    ///
    /// The result has a `Glabels-objects` root with no template, merge or
    /// data sections.
    pub fn serialize_objects(&self, objects: &[LabelObject]) -> Result<Vec<u8>, LabelError> {
        let mut root = Element::new(names::FRAGMENT_ROOT);
        self.add_objects(&mut root, objects)?;
        root.to_document_bytes(self.config.indent)
    }

    fn document_element(&self, document: &LabelDocument) -> Result<Element, LabelError> {
        let mut root = Element::new(names::DOCUMENT_ROOT);
        root.set_string("version", names::DOCUMENT_VERSION);

        root.append_child(template_element(&document.template, self.config.units)?);

        let objects = root.append_child(Element::new(names::OBJECTS));
        objects.set_string("id", "0");
        objects.set_bool("rotate", document.rotate);
        self.add_objects(objects, &document.objects)?;

        if let Some(merge) = merge_element(&document.merge)? {
            root.append_child(merge);
        }

        add_data(&mut root, document);
        Ok(root)
    }

    fn add_objects(&self, parent: &mut Element, objects: &[LabelObject]) -> Result<(), LabelError> {
        for (index, object) in objects.iter().enumerate() {
            match object_element(object, index, self.config.units) {
                Ok(node) => {
                    parent.append_child(node);
                }
                Err(LabelError::UnsupportedVariant { kind, index }) if self.config.skip_unsupported => {
                    log::warn!("skipping object {} ({}): no serializer for this kind", index, kind);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

/// The `Merge` element, or None when the document is not merged
///
/// An external source named `None` would read back as no merge, so it is refused.
fn merge_element(merge: &MergeSource) -> Result<Option<Element>, LabelError> {
    match merge {
        MergeSource::None => Ok(None),
        MergeSource::External { id, .. } if id == NONE_ID => Err(LabelError::Encode(format!(
            "merge source id '{}' is reserved for documents without a merge source",
            id
        ))),
        MergeSource::External { id, source } => {
            let mut node = Element::new(names::MERGE);
            node.set_string("type", id);
            node.set_string("src", source);
            Ok(Some(node))
        }
    }
}

/// Embedded images would be written here; nothing is embedded yet
fn add_data(_root: &mut Element, _document: &LabelDocument) {}

/// Write next to `path` and rename over it, so readers never see a partial file
fn write_atomic(path: &Path, buffer: &[u8]) -> Result<(), LabelError> {
    let temp = temp_path(path);
    let written = fs::File::create(&temp)
        .and_then(|mut file| {
            file.write_all(buffer)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&temp, path));
    written.map_err(|e| {
        let _ = fs::remove_file(&temp);
        LabelError::io(path, e)
    })
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
