//! Immutable vector node tree.
//!
//! A [`Node`] is an abstract SVG element: a tag, an insertion-ordered set of
//! attributes, ordered children and an optional text payload. Builders return
//! fresh nodes and composition happens by value, so a node produced for one
//! layer is never shared with another.
//!
//! # Example
//!
//! ```
//! # use gaugesmith_core::node::Node;
//! let group = Node::new("g")
//!     .set("stroke", "white")
//!     .add(Node::new("line").set("x1", 0).set("y1", 0))
//!     .add(Node::new("line").set("x1", 10).set("y1", 10));
//!
//! assert_eq!(group.children().len(), 2);
//! assert_eq!(group.attribute("stroke"), Some("white"));
//! ```

use std::collections::BTreeMap;

use indexmap::IndexMap;
use svg::node::Value;

/// An SVG element value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    tag: String,
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
    text: Option<String>,
}

impl Node {
    /// Creates an element with the given tag and no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Sets an attribute, replacing an earlier value with the same name.
    ///
    /// Numbers are formatted the way the `svg` crate formats attribute values.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into().to_string());
        self
    }

    /// Sets an attribute only when a value is present.
    pub fn set_opt<V: Into<Value>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    /// Appends a child element.
    pub fn add(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Appends every child of an iterator, keeping iteration order.
    pub fn add_all(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Sets the text content of the element.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Returns the element tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns all attributes in insertion order.
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Returns a single attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns the child elements.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns `true` if the element has neither children nor text.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text.is_none()
    }

    /// Counts this element and all of its descendants by tag.
    ///
    /// ```
    /// # use gaugesmith_core::node::Node;
    /// let tree = Node::new("g").add(Node::new("line")).add(Node::new("line"));
    /// let histogram = tree.tag_histogram();
    /// assert_eq!(histogram["g"], 1);
    /// assert_eq!(histogram["line"], 2);
    /// ```
    pub fn tag_histogram(&self) -> BTreeMap<String, usize> {
        let mut histogram = BTreeMap::new();
        self.count_tags(&mut histogram);
        histogram
    }

    fn count_tags(&self, histogram: &mut BTreeMap<String, usize>) {
        *histogram.entry(self.tag.clone()).or_insert(0) += 1;
        for child in &self.children {
            child.count_tags(histogram);
        }
    }
}
