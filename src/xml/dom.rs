use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use tracing::trace;

use crate::error::{DesignError, Result};

/// A parsed XML document: prolog comments, processing instructions and the root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlDocument {
    /// Comments that appear before the root element.
    pub comments: Vec<String>,
    /// Processing instructions before the root as `(target, data)` pairs.
    pub processing_instructions: Vec<(String, String)>,
    pub root: XmlElement,
}

/// Child node of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
    Comment(String),
}

/// An element with its qualified name, ordered attributes and children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create an element without attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: append an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Builder: append a text node.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    /// Builder: append a child element.
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// Value of the named attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over child elements, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            _ => None,
        })
    }

    /// First child element with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.child_elements().find(|element| element.name == name)
    }

    /// All child elements with the given name, in document order.
    pub fn children_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.child_elements().filter(move |element| element.name == name)
    }

    /// Concatenated text content of the direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                XmlNode::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Text of the first child element with the given name, empty if absent.
    pub fn child_text(&self, name: &str) -> String {
        self.child(name).map(XmlElement::text).unwrap_or_default()
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut element = XmlElement::new(name);

        for attr in start.attributes() {
            let attr = attr.map_err(|e| DesignError::xml(format!("Invalid attribute: {e}")))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| DesignError::xml(format!("Invalid attribute value: {e}")))?
                .into_owned();
            element.attributes.push((key, value));
        }

        Ok(element)
    }
}

impl XmlDocument {
    /// Create a document around a root element.
    pub fn new(root: XmlElement) -> Self {
        Self {
            comments: Vec::new(),
            processing_instructions: Vec::new(),
            root,
        }
    }

    /// Parse a well-formed XML document.
    ///
    /// Whitespace-only text is dropped and other text is trimmed. The XML
    /// declaration and anything after the root element are discarded.
    pub fn parse(input: &[u8]) -> Result<XmlDocument> {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;
        let mut comments = Vec::new();
        let mut processing_instructions = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    stack.push(XmlElement::from_start(e)?);
                }
                Ok(Event::Empty(ref e)) => {
                    let element = XmlElement::from_start(e)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Ok(Event::End(_)) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| DesignError::xml("Unbalanced end tag"))?;
                    attach(&mut stack, &mut root, element)?;
                }
                Ok(Event::Text(ref e)) => {
                    if let Some(parent) = stack.last_mut() {
                        let text = e
                            .unescape()
                            .map_err(|e| DesignError::xml(format!("Invalid text: {e}")))?;
                        parent.children.push(XmlNode::Text(text.into_owned()));
                    }
                }
                Ok(Event::CData(e)) => {
                    if let Some(parent) = stack.last_mut() {
                        let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                        parent.children.push(XmlNode::Text(text));
                    }
                }
                Ok(Event::Comment(e)) => {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(XmlNode::Comment(text));
                    } else if root.is_none() {
                        comments.push(text);
                    }
                }
                Ok(Event::PI(ref e)) => {
                    if stack.is_empty() && root.is_none() {
                        let target = String::from_utf8_lossy(e.target()).into_owned();
                        let data = String::from_utf8_lossy(e.content()).trim().to_string();
                        processing_instructions.push((target, data));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(DesignError::xml(format!(
                        "XML parse error at position {}: {e}",
                        reader.error_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(DesignError::xml(format!("Unclosed element: {}", open.name)));
        }
        let root = root.ok_or_else(|| DesignError::xml("Document has no root element"))?;

        trace!(
            root = %root.name,
            comments = comments.len(),
            instructions = processing_instructions.len(),
            "parsed XML document"
        );

        Ok(XmlDocument {
            comments,
            processing_instructions,
            root,
        })
    }
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(XmlNode::Element(element));
        Ok(())
    } else if root.is_none() {
        *root = Some(element);
        Ok(())
    } else {
        Err(DesignError::xml(format!(
            "Multiple root elements: {}",
            element.name
        )))
    }
}

/// Write an element tree as XML events, attributes and children in order.
pub fn write_element<W: Write>(writer: &mut Writer<W>, element: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        return write(writer, Event::Empty(start));
    }

    write(writer, Event::Start(start))?;
    for child in &element.children {
        match child {
            XmlNode::Element(child) => write_element(writer, child)?,
            XmlNode::Text(text) => write(writer, Event::Text(BytesText::new(text)))?,
            XmlNode::Comment(comment) => {
                write(writer, Event::Comment(BytesText::from_escaped(comment.as_str())))?
            }
        }
    }
    write(writer, Event::End(BytesEnd::new(element.name.as_str())))
}

fn write<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| DesignError::xml(format!("Write error: {e}")))
}
