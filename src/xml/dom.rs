//! A small element tree built per read or write call
//!
//! Writing builds a tree of [`Element`]s and serializes it with quick-xml;
//! reading parses bytes into the same tree, recording each element's source
//! span so errors can point at it.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::{FormatError, LabelError, Span};

/// One markup element with ordered attributes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub name: String,
    attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    /// Character data; only meaningful for leaf elements such as `p`
    pub text: Option<String>,
    /// Byte range of the start tag in the parsed source (empty for built trees)
    pub span: Span,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set an attribute, replacing an existing one of the same name in place
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Attributes in document order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Append a child and return it for further building
    pub fn append_child(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Children with the given name, in order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Serialize as a standalone document with an XML declaration
    pub fn to_document_bytes(&self, indent: usize) -> Result<Vec<u8>, LabelError> {
        let mut writer = if indent > 0 {
            Writer::new_with_indent(Vec::new(), b' ', indent)
        } else {
            Writer::new(Vec::new())
        };
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", None, None)))
            .map_err(encode_error)?;
        self.write_to(&mut writer)?;
        Ok(writer.into_inner())
    }

    fn write_to(&self, writer: &mut Writer<Vec<u8>>) -> Result<(), LabelError> {
        let mut start = BytesStart::new(self.name.as_str());
        for (name, value) in &self.attributes {
            start.push_attribute((name.as_str(), value.as_str()));
        }

        if self.children.is_empty() && self.text.is_none() {
            return writer.write_event(Event::Empty(start)).map_err(encode_error);
        }

        writer.write_event(Event::Start(start)).map_err(encode_error)?;
        if let Some(text) = &self.text {
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(encode_error)?;
        }
        for child in &self.children {
            child.write_to(writer)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(self.name.as_str())))
            .map_err(encode_error)
    }

    /// Parse a document and return its root element
    pub fn parse_document(source: &str) -> Result<Element, FormatError> {
        let mut reader = Reader::from_str(source);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let start = reader.buffer_position() as usize;
            let event = reader.read_event().map_err(|e| FormatError::Syntax {
                message: e.to_string(),
                span: start..reader.buffer_position() as usize,
            })?;
            let end = reader.buffer_position() as usize;
            let span = start..end;

            match event {
                Event::Start(e) => stack.push(element_from_start(&e, tag_span(source, end))?),
                Event::Empty(e) => {
                    let element = element_from_start(&e, tag_span(source, end))?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or_else(|| FormatError::Syntax {
                        message: "unmatched end tag".to_string(),
                        span: span.clone(),
                    })?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(e) => {
                    let text = e.unescape().map_err(|err| FormatError::Syntax {
                        message: err.to_string(),
                        span: span.clone(),
                    })?;
                    push_text(&mut stack, &text, span)?;
                }
                Event::CData(e) => {
                    let raw = e.into_inner();
                    let text = String::from_utf8_lossy(&raw);
                    push_text(&mut stack, &text, span)?;
                }
                Event::Eof => break,
                // Declaration, comments, processing instructions, doctype
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(FormatError::Syntax {
                message: format!("unclosed element <{}>", open.name),
                span: open.span.clone(),
            });
        }
        root.ok_or_else(|| FormatError::Syntax {
            message: "document has no root element".to_string(),
            span: 0..source.len(),
        })
    }
}

/// Span of the tag that ends at `end`; raw `<` cannot appear inside a tag
fn tag_span(source: &str, end: usize) -> Span {
    let end = end.min(source.len());
    let start = source[..end].rfind('<').unwrap_or(0);
    start..end
}

fn encode_error(e: impl std::fmt::Display) -> LabelError {
    LabelError::Encode(e.to_string())
}

fn element_from_start(start: &BytesStart, span: Span) -> Result<Element, FormatError> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
    element.span = span.clone();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| FormatError::Syntax {
            message: e.to_string(),
            span: span.clone(),
        })?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(|e| FormatError::Syntax {
            message: e.to_string(),
            span: span.clone(),
        })?;
        if element.has_attr(&name) {
            return Err(FormatError::Syntax {
                message: format!("duplicate attribute '{}'", name),
                span,
            });
        }
        element.attributes.push((name, value.into_owned()));
    }
    Ok(element)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), FormatError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(element);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(FormatError::Syntax {
            message: format!("second root element <{}>", element.name),
            span: element.span,
        }),
    }
}

fn push_text(stack: &mut [Element], text: &str, span: Span) -> Result<(), FormatError> {
    match stack.last_mut() {
        Some(element) => {
            element.text.get_or_insert_with(String::new).push_str(text);
            Ok(())
        }
        None if text
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
            .is_empty() =>
        {
            Ok(())
        }
        None => Err(FormatError::Syntax {
            message: "text outside the root element".to_string(),
            span,
        }),
    }
}
