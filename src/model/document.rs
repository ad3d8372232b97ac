//! The label document root

use std::sync::Arc;

use super::{LabelObject, MergeSource, ObjectKind, Template};

/// One label design
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDocument {
    /// Shared with the template database; never copied into the document
    pub template: Arc<Template>,
    /// Lay objects out rotated relative to the template
    pub rotate: bool,
    pub merge: MergeSource,
    /// Objects in z-order, bottom first
    pub objects: Vec<LabelObject>,
}

impl LabelDocument {
    pub fn new(template: Arc<Template>) -> Self {
        Self {
            template,
            rotate: false,
            merge: MergeSource::None,
            objects: Vec::new(),
        }
    }

    pub fn with_rotate(mut self, rotate: bool) -> Self {
        self.rotate = rotate;
        self
    }

    pub fn with_merge(mut self, merge: MergeSource) -> Self {
        self.merge = merge;
        self
    }

    pub fn with_object(mut self, object: LabelObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Merge field keys referenced anywhere in the objects, in first-use order
    pub fn field_keys<'a>(&'a self) -> Vec<&'a str> {
        let mut keys: Vec<&'a str> = Vec::new();
        let mut push = |key: Option<&'a str>| {
            if let Some(key) = key {
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
        };
        for object in &self.objects {
            match &object.kind {
                ObjectKind::Box(style) | ObjectKind::Ellipse(style) => {
                    push(style.line_color.key());
                    push(style.fill_color.key());
                }
                ObjectKind::Line(style) => push(style.line_color.key()),
                ObjectKind::Image(image) => push(image.filename.key()),
                ObjectKind::Text(text) => push(text.color.key()),
                ObjectKind::Barcode(barcode) => push(barcode.color.key()),
            }
            if let Some(shadow) = &object.shadow {
                push(shadow.color.key());
            }
        }
        keys
    }
}
