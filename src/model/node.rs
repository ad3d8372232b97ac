//! Values that are either literal or bound to a merge field

use super::Color;

/// A literal value, or the key of a merge field that supplies it per record
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralOrField<T> {
    Literal(T),
    Field(String),
}

/// A color or a merge field holding one
pub type ColorOrField = LiteralOrField<Color>;

/// An image file name or a merge field holding one
pub type FilenameOrField = LiteralOrField<String>;

impl<T> LiteralOrField<T> {
    pub fn field(key: impl Into<String>) -> Self {
        Self::Field(key.into())
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(_))
    }

    /// The merge field key, if bound to a field
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Field(key) => Some(key),
            Self::Literal(_) => None,
        }
    }

    /// The literal value, if not bound to a field
    pub fn literal(&self) -> Option<&T> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Field(_) => None,
        }
    }
}

impl From<Color> for ColorOrField {
    fn from(color: Color) -> Self {
        Self::Literal(color)
    }
}

impl Default for ColorOrField {
    fn default() -> Self {
        Self::Literal(Color::BLACK)
    }
}
