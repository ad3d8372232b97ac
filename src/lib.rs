//! glabels-xml - Reader and writer for gLabels 4.0 label documents
//!
//! This library converts between an in-memory label design ([`LabelDocument`])
//! and the gLabels XML document format, and serializes bare object lists for
//! clipboard transfer between documents.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use glabels_xml::model::{Frame, FrameShape, LabelDocument, LabelObject, ShapeStyle, Template};
//! use glabels_xml::units::Length;
//!
//! let template = Template {
//!     brand: "Avery".to_string(),
//!     part: "5160".to_string(),
//!     description: "Address Labels".to_string(),
//!     paper_id: "US-Letter".to_string(),
//!     page_width: Length::inches(8.5),
//!     page_height: Length::inches(11.0),
//!     categories: vec![],
//!     frame: Frame {
//!         id: "0".to_string(),
//!         shape: FrameShape::Rect {
//!             w: Length::inches(2.625),
//!             h: Length::inches(1.0),
//!             r: Length::pt(5.0),
//!             x_waste: Length::zero(),
//!             y_waste: Length::zero(),
//!         },
//!         markups: vec![],
//!         layouts: vec![],
//!     },
//! };
//!
//! let document = LabelDocument::new(Arc::new(template)).with_object(LabelObject::new_box(
//!     Length::mm(10.0),
//!     Length::mm(10.0),
//!     Length::mm(50.0),
//!     Length::mm(20.0),
//!     ShapeStyle::default(),
//! ));
//!
//! let bytes = glabels_xml::write_buffer(&document).unwrap();
//! let text = String::from_utf8(bytes.clone()).unwrap();
//! assert!(text.contains("<Glabels-document version=\"4.0\">"));
//!
//! let back = glabels_xml::read_buffer(&bytes).unwrap();
//! assert_eq!(back.objects.len(), 1);
//! ```

pub mod error;
pub mod model;
pub mod reader;
pub mod units;
pub mod writer;
pub mod xml;

use std::path::Path;

pub use error::{FormatError, LabelError};
pub use model::{LabelDocument, LabelObject, MergeSource};
pub use units::{Length, Units};
pub use writer::{ConfigError, LabelWriter, WriterConfig};

/// Serialize a document to bytes with the default configuration
pub fn write_buffer(document: &LabelDocument) -> Result<Vec<u8>, LabelError> {
    LabelWriter::default().write_buffer(document)
}

/// Serialize a document to a file with the default configuration
pub fn write_file(document: &LabelDocument, path: impl AsRef<Path>) -> Result<(), LabelError> {
    LabelWriter::default().write_file(document, path.as_ref())
}

/// Serialize objects to a `Glabels-objects` fragment
pub fn serialize_objects(objects: &[LabelObject]) -> Result<Vec<u8>, LabelError> {
    LabelWriter::default().serialize_objects(objects)
}

/// Parse a document from bytes
pub fn read_buffer(buffer: &[u8]) -> Result<LabelDocument, LabelError> {
    reader::read_buffer(buffer)
}

/// Parse a document from a file
pub fn read_file(path: impl AsRef<Path>) -> Result<LabelDocument, LabelError> {
    reader::read_file(path.as_ref())
}

/// Parse a `Glabels-objects` fragment
pub fn deserialize_objects(buffer: &[u8]) -> Result<Vec<LabelObject>, LabelError> {
    reader::deserialize_objects(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, ColorOrField, LineStyle, ShapeStyle};

    #[test]
    fn test_serialize_empty_fragment() {
        let bytes = serialize_objects(&[]).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains("<Glabels-objects/>"));
        assert!(deserialize_objects(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_fragment_preserves_order() {
        let l = Length::pt(1.0);
        let objects = vec![
            LabelObject::new_line(l, l, l, l, LineStyle::default()),
            LabelObject::new_box(
                l,
                l,
                l,
                l,
                ShapeStyle {
                    fill_color: ColorOrField::Literal(Color::WHITE),
                    ..Default::default()
                },
            ),
            LabelObject::new_ellipse(l, l, l, l, ShapeStyle::default()),
        ];
        let back = deserialize_objects(&serialize_objects(&objects).unwrap()).unwrap();
        assert_eq!(back, objects);
    }

    #[test]
    fn test_garbage_is_syntax_error() {
        let err = read_buffer(b"<Glabels-document version=\"4.0\"><Template").unwrap_err();
        assert!(matches!(err.as_format(), Some(FormatError::Syntax { .. })));
    }
}
