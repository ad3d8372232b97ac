//! Markup layer: element tree, typed attribute codec and format names

pub mod attr;
pub mod dom;
pub mod names;

pub use dom::Element;
