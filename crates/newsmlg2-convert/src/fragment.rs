//! Markup fragments
//!
//! A minimal element tree for the HTML/XML snippets embedded in a record
//! (article, infobox, linkbox, notepad). Fragments are parsed with
//! `quick-xml`, transformed in place, and written back as markup strings.
//! Comments, processing instructions and doctype declarations are dropped.

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::{ConvertError, Result};

/// A node of a fragment tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested element
    Element(Element),
    /// Unescaped character data
    Text(String),
}

/// An element with ordered attributes and children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name as written in the source
    pub name: String,

    /// Attributes in source order, values unescaped
    pub attributes: Vec<(String, String)>,

    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Append a text node
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Append a child element
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Value of an attribute
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Child elements, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Mutable access to the first child element
    pub fn first_child_element_mut(&mut self) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Child elements along a path of tag names (`["ul", "li", "a"]`)
    pub fn select_path(&self, path: &[&str]) -> Vec<&Element> {
        let mut current: Vec<&Element> = vec![self];
        for step in path {
            current = current
                .into_iter()
                .flat_map(|el| el.child_elements().filter(move |child| child.name == *step))
                .collect();
        }
        current
    }

    /// Text before the first child element, if any
    pub fn text(&self) -> Option<String> {
        let mut leading = String::new();
        for node in &self.children {
            match node {
                Node::Text(t) => leading.push_str(t),
                Node::Element(_) => break,
            }
        }
        if leading.is_empty() {
            None
        } else {
            Some(leading)
        }
    }

    /// Whether any descendant (not this element) satisfies `predicate`
    pub fn has_descendant<F>(&self, predicate: &F) -> bool
    where
        F: Fn(&Element) -> bool,
    {
        self.child_elements()
            .any(|child| predicate(child) || child.has_descendant(predicate))
    }

    /// Serialize this element (without trailing text) as markup
    pub fn to_markup(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        write_element(&mut writer, self)?;
        String::from_utf8(writer.into_inner()).map_err(|e| ConvertError::Document(e.to_string()))
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &element.children {
        match child {
            Node::Element(el) => write_element(writer, el)?,
            Node::Text(text) => writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

/// Parse a fragment with exactly one root element
///
/// Whitespace around the root is allowed; anything else outside it,
/// unbalanced tags and bad entities fail with a markup error naming
/// `field`.
pub fn parse_fragment(field: &str, markup: &str) -> Result<Element> {
    let mut reader = Reader::from_str(markup);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ConvertError::markup(field, format!("{} at position {}", e, reader.buffer_position())))?;

        match event {
            Event::Start(ref e) => {
                if root.is_some() {
                    return Err(ConvertError::markup(field, "content after root element"));
                }
                stack.push(start_element(field, e)?);
            }
            Event::Empty(ref e) => {
                if root.is_some() {
                    return Err(ConvertError::markup(field, "content after root element"));
                }
                let element = start_element(field, e)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Element(element)),
                    None => root = Some(element),
                }
            }
            Event::End(ref e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let element = match stack.pop() {
                    Some(el) if el.name == name => el,
                    Some(el) => {
                        return Err(ConvertError::markup(
                            field,
                            format!("expected </{}>, found </{}>", el.name, name),
                        ))
                    }
                    None => return Err(ConvertError::markup(field, format!("unexpected </{}>", name))),
                };
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Element(element)),
                    None => root = Some(element),
                }
            }
            Event::Text(ref e) => {
                let text = e.unescape().map_err(|err| ConvertError::markup(field, err))?;
                push_text(field, &mut stack, &text)?;
            }
            Event::CData(ref e) => {
                let text = String::from_utf8_lossy(e).into_owned();
                push_text(field, &mut stack, &text)?;
            }
            Event::Eof => break,
            // comments, declarations, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(ConvertError::markup(field, format!("unclosed element <{}>", open.name)));
    }
    root.ok_or_else(|| ConvertError::markup(field, "no root element"))
}

/// Check that `markup` is well-formed element content
///
/// Unlike [`parse_fragment`] this accepts any number of top-level nodes.
pub fn check_well_formed(field: &str, markup: &str) -> Result<()> {
    parse_fragment(field, &format!("<fragment>{}</fragment>", markup)).map(|_| ())
}

fn start_element(field: &str, start: &BytesStart<'_>) -> Result<Element> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
    for attr in start.attributes() {
        let attr = attr.map_err(|e| ConvertError::markup(field, e))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(|e| ConvertError::markup(field, e))?;
        element.attributes.push((key, value.into_owned()));
    }
    Ok(element)
}

fn push_text(field: &str, stack: &mut [Element], text: &str) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => {
            if let Some(Node::Text(prev)) = parent.children.last_mut() {
                prev.push_str(text);
            } else {
                parent.children.push(Node::Text(text.to_string()));
            }
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(ConvertError::markup(field, "text outside root element")),
    }
}
