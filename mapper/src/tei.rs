//! Minimal TEI document tree.
//!
//! The transcript is read once with `quick_xml::NsReader` into an owned
//! element tree. Only what the mapper needs is kept: resolved namespace,
//! local name, raw attributes, and child element/text nodes in document order.
//! Comments, processing instructions and the prolog are dropped.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use crate::error::MapError;
use crate::vocab::TEI;

/// A child node of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested element.
    Element(Element),
    /// Text or CDATA content, unescaped.
    Text(String),
}

/// An XML element with its attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Local name (e.g. `event`).
    pub name: String,
    /// Resolved namespace IRI; `None` for unqualified elements.
    pub namespace: Option<String>,
    /// Attributes keyed by their qualified name (e.g. `xml:id`, `type`).
    pub attributes: Vec<(String, String)>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Looks up an attribute by qualified name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The `xml:id` attribute.
    #[must_use]
    pub fn xml_id(&self) -> Option<&str> {
        self.attr("xml:id")
    }

    /// Identifier used in diagnostics: `xml:id` if present, otherwise `<name>`.
    #[must_use]
    pub fn display_id(&self) -> String {
        match self.xml_id() {
            Some(id) => id.to_owned(),
            None => format!("<{}>", self.name),
        }
    }

    /// Returns true for TEI-namespaced or unqualified elements named `name`.
    #[must_use]
    pub fn is_tei(&self, name: &str) -> bool {
        self.name == name && matches!(self.namespace.as_deref(), None | Some(TEI))
    }

    /// Direct child elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Direct TEI children named `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.child_elements().filter(move |el| el.is_tei(name))
    }

    /// Every text node below this element, in document order.
    #[must_use]
    pub fn descendant_texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        collect_texts(self, &mut out);
        out
    }

    /// Every TEI element named `name` at or below this element, pre-order.
    #[must_use]
    pub fn descendants_named<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut out = Vec::new();
        collect_named(self, name, &mut out);
        out
    }

    /// Text of all `name` children joined with single spaces.
    ///
    /// Every text node under every matching child contributes, whitespace-only
    /// nodes included. Returns an empty string if there is no such child.
    #[must_use]
    pub fn joined_child_text(&self, name: &str) -> String {
        self.children_named(name)
            .flat_map(Element::descendant_texts)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn collect_texts<'a>(el: &'a Element, out: &mut Vec<&'a str>) {
    for node in &el.children {
        match node {
            Node::Text(text) => out.push(text),
            Node::Element(child) => collect_texts(child, out),
        }
    }
}

fn collect_named<'a>(el: &'a Element, name: &str, out: &mut Vec<&'a Element>) {
    if el.is_tei(name) {
        out.push(el);
    }
    for child in el.child_elements() {
        collect_named(child, name, out);
    }
}

/// A parsed TEI transcript.
#[derive(Debug, Clone)]
pub struct TeiDocument {
    root: Element,
}

impl TeiDocument {
    /// Reads and parses the transcript at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Io`] if the file cannot be read, or any error of
    /// [`TeiDocument::parse`].
    pub fn from_path(path: &Path) -> Result<Self, MapError> {
        let xml = std::fs::read_to_string(path).map_err(|e| MapError::io(path, e))?;
        Self::parse(&xml)
    }

    /// Parses a transcript from a string.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Xml`] for malformed input and
    /// [`MapError::EmptyDocument`] when there is no root element.
    pub fn parse(xml: &str) -> Result<Self, MapError> {
        let mut reader = NsReader::from_str(xml);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let position = reader.buffer_position();
            let xml_err = |source: quick_xml::Error| MapError::Xml { position, source };
            match reader.read_resolved_event().map_err(xml_err)? {
                (ns, Event::Start(start)) => {
                    stack.push(open_element(&ns, &start).map_err(xml_err)?);
                }
                (ns, Event::Empty(start)) => {
                    let el = open_element(&ns, &start).map_err(xml_err)?;
                    attach(&mut stack, &mut root, el);
                }
                (_, Event::End(_)) => {
                    if let Some(el) = stack.pop() {
                        attach(&mut stack, &mut root, el);
                    }
                }
                (_, Event::Text(text)) => {
                    if let Some(parent) = stack.last_mut() {
                        let text = text.unescape().map_err(xml_err)?;
                        parent.children.push(Node::Text(text.into_owned()));
                    }
                }
                (_, Event::CData(cdata)) => {
                    if let Some(parent) = stack.last_mut() {
                        let text = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                        parent.children.push(Node::Text(text));
                    }
                }
                (_, Event::Eof) => break,
                _ => {}
            }
        }

        root.map(|root| Self { root }).ok_or(MapError::EmptyDocument)
    }

    /// The document element.
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Every `tei:event` in document order, nested events included.
    #[must_use]
    pub fn events(&self) -> Vec<&Element> {
        self.root.descendants_named("event")
    }
}

fn open_element(ns: &ResolveResult<'_>, start: &BytesStart<'_>) -> Result<Element, quick_xml::Error> {
    let namespace = match ns {
        ResolveResult::Bound(ns) => Some(String::from_utf8_lossy(ns.as_ref()).into_owned()),
        ResolveResult::Unbound => None,
        // Undeclared prefix: keep the prefix so the element never matches TEI.
        ResolveResult::Unknown(prefix) => Some(String::from_utf8_lossy(prefix).into_owned()),
    };
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }

    Ok(Element {
        name,
        namespace,
        attributes,
        children: Vec::new(),
    })
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, el: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(el)),
        None => {
            if root.is_none() {
                *root = Some(el);
            }
        }
    }
}
