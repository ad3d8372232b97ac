//! In-memory label document model
//!
//! These are the values the writer walks and the reader produces. Nothing in
//! this module knows about markup.

pub mod affine;
pub mod color;
pub mod document;
pub mod merge;
pub mod node;
pub mod object;
pub mod template;

pub use affine::Affine;
pub use color::Color;
pub use document::LabelDocument;
pub use merge::MergeSource;
pub use node::{ColorOrField, FilenameOrField, LiteralOrField};
pub use object::{
    BarcodeObject, FontWeight, HAlign, ImageObject, LabelObject, LineStyle, ObjectKind, Shadow,
    ShapeStyle, TextObject, VAlign,
};
pub use template::{Frame, FrameShape, Layout, Markup, Template};
