//! Error types for reading and writing label documents

use std::path::PathBuf;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Malformed, ambiguous or missing markup found while reading
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("malformed XML: {message}")]
    Syntax { message: String, span: Span },

    #[error("expected root element <{expected}>, found <{found}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
        span: Span,
    },

    #[error("unsupported document version '{found}' (expected {expected})")]
    UnsupportedVersion {
        expected: &'static str,
        found: String,
        span: Span,
    },

    #[error("<{parent}> is missing required element <{element}>")]
    MissingElement {
        parent: String,
        element: &'static str,
        span: Span,
    },

    #[error("<{parent}> has more than one <{element}>")]
    DuplicateElement {
        parent: String,
        element: String,
        span: Span,
    },

    #[error("unexpected element <{element}> in <{parent}>")]
    UnexpectedElement {
        parent: String,
        element: String,
        span: Span,
    },

    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        element: String,
        attribute: String,
        span: Span,
    },

    #[error("<{element}> attribute '{attribute}' has invalid value '{value}': expected {expected}")]
    InvalidAttribute {
        element: String,
        attribute: String,
        value: String,
        expected: &'static str,
        span: Span,
    },

    /// Mutually exclusive attributes both present, or a partial attribute block
    #[error("<{element}>: {message}")]
    InvariantViolation {
        element: String,
        message: String,
        span: Span,
    },
}

impl FormatError {
    /// Source span of the offending element
    pub fn span(&self) -> &Span {
        match self {
            Self::Syntax { span, .. }
            | Self::UnexpectedRoot { span, .. }
            | Self::UnsupportedVersion { span, .. }
            | Self::MissingElement { span, .. }
            | Self::DuplicateElement { span, .. }
            | Self::UnexpectedElement { span, .. }
            | Self::MissingAttribute { span, .. }
            | Self::InvalidAttribute { span, .. }
            | Self::InvariantViolation { span, .. } => span,
        }
    }

    /// Name of the element the error is about, if any
    pub fn element(&self) -> Option<&str> {
        match self {
            Self::Syntax { .. } => None,
            Self::UnexpectedRoot { found, .. } => Some(found),
            Self::UnsupportedVersion { .. } => Some(crate::xml::names::DOCUMENT_ROOT),
            Self::MissingElement { element, .. } => Some(element),
            Self::DuplicateElement { element, .. } | Self::UnexpectedElement { element, .. } => {
                Some(element)
            }
            Self::MissingAttribute { element, .. }
            | Self::InvalidAttribute { element, .. }
            | Self::InvariantViolation { element, .. } => Some(element),
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        let span = self.span().clone();
        let message = self.to_string();

        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(&message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("{}: {}", filename, message),
        }
    }
}

/// Errors from the document reader and writer
#[derive(Error, Debug)]
pub enum LabelError {
    /// The file could not be opened, read or written
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Format(#[from] FormatError),

    /// An object variant that has no codec
    #[error("object {index} is a {kind}, which cannot be serialized yet")]
    UnsupportedVariant { kind: &'static str, index: usize },

    /// The markup tree could not be turned into bytes
    #[error("failed to encode document: {0}")]
    Encode(String),
}

impl LabelError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The format error, if this is one
    pub fn as_format(&self) -> Option<&FormatError> {
        match self {
            Self::Format(e) => Some(e),
            _ => None,
        }
    }
}
