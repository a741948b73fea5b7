//! A small element tree used to build region content.
//!
//! Renderers never concatenate markup strings. They build [`Element`] values
//! and the tree is serialized in one place, where every text node and
//! attribute value is escaped.

use std::fmt::Write;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the `class` attribute.
    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    /// Set an attribute, replacing any previous value.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append a text node.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Append a child element.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append an optional child element.
    pub fn child_opt(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Append every element of `children`.
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|classes| classes.split_ascii_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Replace all children with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    /// Replace all children.
    pub fn replace_children(&mut self, children: Fragment) {
        self.children = children.0;
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Serialized markup of this element's children.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            write_node(node, &mut out);
        }
        out
    }

    /// Serialized markup of this element.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }

    /// Visit this element and every descendant element, depth first.
    pub fn walk_mut(&mut self, visit: &mut dyn FnMut(&mut Element)) {
        visit(self);
        for node in &mut self.children {
            if let Node::Element(child) = node {
                child.walk_mut(visit);
            }
        }
    }
}

/// An ordered list of sibling nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment(pub Vec<Node>);

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) {
        self.0.push(Node::Element(element));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.0 {
            write_node(node, &mut out);
        }
        out
    }
}

impl FromIterator<Element> for Fragment {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Fragment(iter.into_iter().map(Node::Element).collect())
    }
}

impl From<Element> for Fragment {
    fn from(element: Element) -> Self {
        Fragment(vec![Node::Element(element)])
    }
}

/// Escape text content.
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value for use inside double quotes.
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attrs {
        // Writing to a String cannot fail.
        let _ = write!(out, r#" {}="{}""#, name, escape_attr(value));
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag.as_str()) {
        return;
    }

    for child in &element.children {
        write_node(child, out);
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => collect_text(&element.children, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialize_nested() {
        let el = Element::new("div")
            .class("card")
            .child(Element::new("h3").text("Title"))
            .child(Element::new("p").text("Body"));
        assert_eq!(
            el.to_html(),
            r#"<div class="card"><h3>Title</h3><p>Body</p></div>"#
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let el = Element::new("li").text("<script>alert(1)</script> & more");
        assert_eq!(
            el.to_html(),
            "<li>&lt;script&gt;alert(1)&lt;/script&gt; &amp; more</li>"
        );
    }

    #[test]
    fn test_attr_is_escaped() {
        let el = Element::new("a").attr("href", r#"x" onclick="evil()"#);
        assert_eq!(el.to_html(), r#"<a href="x&quot; onclick=&quot;evil()"></a>"#);
    }

    #[test]
    fn test_set_attr_replaces_in_place() {
        let mut el = Element::new("div").attr("data-value", "10").attr("style", "width: 0%");
        el.set_attr("style", "width: 10%");
        assert_eq!(
            el.to_html(),
            r#"<div data-value="10" style="width: 10%"></div>"#
        );
    }

    #[test]
    fn test_void_element() {
        let el = Element::new("meta").attr("name", "description");
        assert_eq!(el.to_html(), r#"<meta name="description">"#);
    }

    #[test]
    fn test_has_class() {
        let el = Element::new("a").class("btn-qa btn-outline");
        assert!(el.has_class("btn-outline"));
        assert!(el.has_class("btn-qa"));
        assert!(!el.has_class("btn"));
    }

    #[test]
    fn test_walk_mut_visits_descendants() {
        let mut el = Element::new("div")
            .child(Element::new("span").class("hit"))
            .child(Element::new("div").child(Element::new("span").class("hit")));
        let mut hits = 0;
        el.walk_mut(&mut |e| {
            if e.has_class("hit") {
                hits += 1;
            }
        });
        assert_eq!(hits, 2);
    }

    #[test]
    fn test_text_content_and_inner_html() {
        let mut el = Element::new("span").text("old");
        el.set_text("a < b");
        assert_eq!(el.text_content(), "a < b");
        assert_eq!(el.inner_html(), "a &lt; b");
    }
}
