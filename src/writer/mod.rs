//! Document writer: label model to gLabels markup
//!
//! The writer walks the document read-only and builds a fresh element tree
//! per call. Object variants are dispatched with an exhaustive match, so a
//! new variant does not compile until it has a codec (or is reported as
//! unsupported).

pub mod config;
pub mod document;
pub mod objects;
pub mod template;

pub use config::{ConfigError, WriterConfig};
pub use document::LabelWriter;
