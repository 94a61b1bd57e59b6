//! The view tree produced by [`crate::View::render`].
//!
//! An [`Html`] value is a plain description: elements with attributes,
//! listeners and children, plus text. `Display` renders it to markup for the
//! server; the headless root and the DOM mount walk it directly.

use std::fmt::{self, Write};
use std::rc::Rc;

use crate::event::{Callback, Event, Listener};

/// Elements rendered without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Rendered content of a component.
#[derive(Clone, Debug, Default)]
pub enum Html {
    #[default]
    Empty,
    Text(String),
    Element(Element),
    Fragment(Vec<Html>),
    /// Text written out without escaping, for `<script>` and `<style>` bodies.
    Raw(String),
}

impl Html {
    /// Concatenated text of every text node, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Html::Empty => {}
            Html::Text(text) | Html::Raw(text) => out.push_str(text),
            Html::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Html::Fragment(nodes) => {
                for node in nodes {
                    node.collect_text(out);
                }
            }
        }
    }

    /// First element with the given tag, depth-first.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        match self {
            Html::Empty | Html::Text(_) | Html::Raw(_) => None,
            Html::Element(element) => {
                if element.tag == tag {
                    Some(element)
                } else {
                    element.children.iter().find_map(|child| child.find(tag))
                }
            }
            Html::Fragment(nodes) => nodes.iter().find_map(|node| node.find(tag)),
        }
    }

    /// Every element with the given tag, depth-first.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_elements(tag, &mut found);
        found
    }

    fn collect_elements<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        match self {
            Html::Empty | Html::Text(_) | Html::Raw(_) => {}
            Html::Element(element) => {
                if element.tag == tag {
                    found.push(element);
                }
                for child in &element.children {
                    child.collect_elements(tag, found);
                }
            }
            Html::Fragment(nodes) => {
                for node in nodes {
                    node.collect_elements(tag, found);
                }
            }
        }
    }
}

impl From<Element> for Html {
    fn from(element: Element) -> Self {
        Html::Element(element)
    }
}

impl From<String> for Html {
    fn from(text: String) -> Self {
        Html::Text(text)
    }
}

impl From<&str> for Html {
    fn from(text: &str) -> Self {
        Html::Text(text.to_owned())
    }
}

impl From<Vec<Html>> for Html {
    fn from(nodes: Vec<Html>) -> Self {
        Html::Fragment(nodes)
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Html::Empty => Ok(()),
            Html::Text(text) => f.write_str(&html_escape::encode_text(text)),
            Html::Raw(text) => f.write_str(text),
            Html::Element(element) => fmt::Display::fmt(element, f),
            Html::Fragment(nodes) => nodes.iter().try_for_each(|node| fmt::Display::fmt(node, f)),
        }
    }
}

/// A single element with its attributes, listeners and children.
#[derive(Clone)]
pub struct Element {
    tag: &'static str,
    attributes: Vec<(&'static str, String)>,
    listeners: Vec<(&'static str, Listener)>,
    children: Vec<Html>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            listeners: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Emit `callback` on every `kind` event. A no-op callback attaches nothing.
    pub fn on(self, kind: &'static str, callback: Callback) -> Self {
        if callback.is_noop() {
            return self;
        }

        self.on_event(kind, move |_event| callback.emit())
    }

    pub fn on_event<F: Fn(&Event) + 'static>(mut self, kind: &'static str, listener: F) -> Self {
        self.listeners.push((kind, Rc::new(listener)));
        self
    }

    pub fn child(mut self, child: impl Into<Html>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Html>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Html::Text(text.into()))
    }

    /// Append text that is rendered verbatim.
    pub fn raw(self, text: impl Into<String>) -> Self {
        self.child(Html::Raw(text.into()))
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> &[(&'static str, String)] {
        &self.attributes
    }

    pub fn listeners(&self) -> &[(&'static str, Listener)] {
        &self.listeners
    }

    /// Listeners registered for one event kind, in registration order.
    pub fn listeners_for(&self, kind: &str) -> Vec<Listener> {
        self.listeners
            .iter()
            .filter(|(key, _)| *key == kind)
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }

    pub fn child_nodes(&self) -> &[Html] {
        &self.children
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Html::text_content).collect()
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners: Vec<&str> = self.listeners.iter().map(|(kind, _)| *kind).collect();

        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("attributes", &self.attributes)
            .field("listeners", &listeners)
            .field("children", &self.children)
            .finish()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;

        for (name, value) in &self.attributes {
            write!(
                f,
                " {name}=\"{}\"",
                html_escape::encode_double_quoted_attribute(value)
            )?;
        }

        if self.is_void() {
            return f.write_str(" />");
        }

        f.write_char('>')?;
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

pub fn el(tag: &'static str) -> Element {
    Element::new(tag)
}

pub fn div() -> Element {
    Element::new("div")
}

pub fn h1() -> Element {
    Element::new("h1")
}

pub fn p() -> Element {
    Element::new("p")
}

pub fn button() -> Element {
    Element::new("button")
}

pub fn a() -> Element {
    Element::new("a")
}
