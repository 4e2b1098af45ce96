// src/core/html.rs
//
// Query capability over a parsed HTML tree. Lookups return Option/Vec;
// a missing node is never an error.

use scraper::{ElementRef, Html};

pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a whole page. html5ever recovers from any input, so this cannot fail.
    pub fn parse(source: &str) -> Self {
        Self { html: Html::parse_document(source) }
    }

    pub fn root(&self) -> Node<'_> {
        Node { el: self.html.root_element() }
    }

    pub fn find_by_id(&self, id: &str) -> Option<Node<'_>> {
        self.root().find_by_id(id)
    }

    pub fn find_all(&self, tag: &str, classes: &[&str]) -> Vec<Node<'_>> {
        self.root().find_all(tag, classes)
    }

    pub fn find_first(&self, tag: &str, classes: &[&str]) -> Option<Node<'_>> {
        self.root().find_first(tag, classes)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Node<'a> {
    el: ElementRef<'a>,
}

impl<'a> Node<'a> {
    pub fn tag(&self) -> &'a str {
        self.el.value().name()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.el.value().attr(name)
    }

    /// Attribute value, trimmed; blank counts as absent.
    pub fn attr_nonblank(&self, name: &str) -> Option<&'a str> {
        self.attr(name).map(str::trim).filter(|v| !v.is_empty())
    }

    /// True when every class in `classes` is on this element (order-free).
    pub fn has_classes(&self, classes: &[&str]) -> bool {
        classes
            .iter()
            .all(|want| self.el.value().classes().any(|c| c == *want))
    }

    /// All descendant text, stripped at both ends. Inner whitespace is kept.
    pub fn text(&self) -> String {
        let text: String = self.el.text().collect();
        s!(text.trim())
    }

    pub fn find_by_id(self, id: &str) -> Option<Node<'a>> {
        self.descendants().find(|n| n.el.value().id() == Some(id))
    }

    /// Descendant elements named `tag` carrying all of `classes`, in document order.
    pub fn find_all(self, tag: &str, classes: &[&str]) -> Vec<Node<'a>> {
        self.descendants()
            .filter(|n| n.tag().eq_ignore_ascii_case(tag) && n.has_classes(classes))
            .collect()
    }

    pub fn find_first(self, tag: &str, classes: &[&str]) -> Option<Node<'a>> {
        self.descendants()
            .find(|n| n.tag().eq_ignore_ascii_case(tag) && n.has_classes(classes))
    }

    fn descendants(self) -> impl Iterator<Item = Node<'a>> {
        self.el
            .descendants()
            .skip(1) // self
            .filter_map(ElementRef::wrap)
            .map(|el| Node { el })
    }
}
