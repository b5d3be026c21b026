//! Owned XML document tree for Enom API responses.
//!
//! The reseller interface answers every command with a small XML document,
//! typically rooted at `<interface-response>`. This module turns the body
//! into an [`XmlElement`] tree that can be navigated by child name or by a
//! slash-separated path such as `errors/Err1`.
//!
//! # Example
//!
//! ```rust
//! use enom_api::xml::XmlElement;
//!
//! let doc = XmlElement::parse(
//!     "<interface-response><ErrCount>1</ErrCount><errors><Err1>Bad</Err1></errors></interface-response>",
//! ).unwrap();
//!
//! assert_eq!(doc.name(), "interface-response");
//! assert_eq!(doc.text_at("ErrCount"), Some("1"));
//! assert_eq!(doc.text_at("errors/Err1"), Some("Bad"));
//! ```

use std::collections::BTreeMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use serde::Serialize;
use thiserror::Error;

/// Error returned when a document cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct XmlError {
    /// Human readable description of the failure.
    pub message: String,
}

impl XmlError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A single element in a parsed document, owning its children.
///
/// Text content is trimmed and entity-unescaped. Name lookups are
/// case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct XmlElement {
    name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Parses a complete document and returns its root element.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] if the input is empty, has no root element,
    /// contains text or a second element outside the root, or is not
    /// well-formed.
    pub fn parse(input: &str) -> Result<Self, XmlError> {
        let mut reader = Reader::from_str(input);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<Self> = Vec::new();
        let mut root: Option<Self> = None;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| XmlError::new(format!("malformed XML: {e}")))?;

            match event {
                Event::Start(start) => {
                    if root.is_some() {
                        return Err(XmlError::new("multiple root elements"));
                    }
                    stack.push(Self::from_start(&start)?);
                }
                Event::Empty(start) => {
                    let element = Self::from_start(&start)?;
                    Self::attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| XmlError::new("unmatched closing tag"))?;
                    Self::attach(&mut stack, &mut root, element)?;
                }
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|e| XmlError::new(format!("invalid text content: {e}")))?;
                    match stack.last_mut() {
                        Some(parent) => parent.text.push_str(&text),
                        None => {
                            return Err(XmlError::new("text content outside of root element"))
                        }
                    }
                }
                Event::CData(data) => match stack.last_mut() {
                    Some(parent) => {
                        parent
                            .text
                            .push_str(&String::from_utf8_lossy(&data.into_inner()));
                    }
                    None => return Err(XmlError::new("CDATA outside of root element")),
                },
                Event::Eof => break,
                // Declarations, comments, processing instructions, doctypes.
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(XmlError::new(format!(
                "unexpected end of document inside <{}>",
                open.name
            )));
        }

        root.ok_or_else(|| XmlError::new("document has no root element"))
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = BTreeMap::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| XmlError::new(format!("invalid attribute: {e}")))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| XmlError::new(format!("invalid attribute value: {e}")))?
                .into_owned();
            attributes.insert(key, value);
        }
        Ok(Self {
            name,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    fn attach(
        stack: &mut [Self],
        root: &mut Option<Self>,
        element: Self,
    ) -> Result<(), XmlError> {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(element);
            return Ok(());
        }
        if root.is_some() {
            return Err(XmlError::new("multiple root elements"));
        }
        *root = Some(element);
        Ok(())
    }

    /// Returns the element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the element's own text content (empty if none).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the value of an attribute.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns all attributes.
    #[must_use]
    pub const fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Returns all child elements in document order.
    #[must_use]
    pub fn elements(&self) -> &[Self] {
        &self.children
    }

    /// Returns the first child with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns every child with the given name.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Follows a `/`-separated path of child names from this element.
    ///
    /// Each step picks the first matching child. An empty path returns
    /// `self`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Self> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |element, segment| element.child(segment))
    }

    /// Returns the text of the element at `path`.
    #[must_use]
    pub fn text_at(&self, path: &str) -> Option<&str> {
        self.get(path).map(Self::text)
    }
}
