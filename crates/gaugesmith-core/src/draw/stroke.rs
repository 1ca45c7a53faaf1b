//! Stroke (outline) definitions for closed shapes.
//!
//! Gauge shapes carry an optional stroke width and an optional stroke color.
//! Either may be absent; the SVG attributes are emitted only for the parts
//! that are present, in `stroke-width`, `stroke` order.
//!
//! | Rust Property | SVG Attribute |
//! |--------------|---------------|
//! | `width` | `stroke-width` |
//! | `color` | `stroke` |

use crate::{color::Color, node::Node};

/// An optional outline for a shape.
///
/// # Examples
///
/// ```
/// use gaugesmith_core::{color::Color, draw::StrokeDefinition, node::Node};
///
/// let stroke = StrokeDefinition::new(Some(Color::new("black").unwrap()), Some(2.0));
/// let rect = stroke.apply(Node::new("rect"));
///
/// assert_eq!(rect.attribute("stroke-width"), Some("2"));
/// assert_eq!(rect.attribute("stroke"), Some("black"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeDefinition {
    color: Option<Color>,
    width: Option<f32>,
}

impl StrokeDefinition {
    /// Creates a stroke from its optional parts.
    pub fn new(color: Option<Color>, width: Option<f32>) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color, if set.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// Returns the stroke width, if set.
    pub fn width(&self) -> Option<f32> {
        self.width
    }

    /// Returns `true` when both a width and a color are set.
    pub fn is_complete(&self) -> bool {
        self.color.is_some() && self.width.is_some()
    }

    /// Returns `true` when neither part is set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.width.is_none()
    }

    /// Applies the present stroke attributes to a node.
    pub fn apply(&self, node: Node) -> Node {
        node.set_opt("stroke-width", self.width)
            .set_opt("stroke", self.color.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default_is_empty() {
        let stroke = StrokeDefinition::default();
        assert!(stroke.is_empty());
        assert!(!stroke.is_complete());

        let node = stroke.apply(Node::new("rect"));
        assert!(node.attributes().is_empty());
    }

    #[test]
    fn test_stroke_width_only() {
        let stroke = StrokeDefinition::new(None, Some(3.0));
        assert!(!stroke.is_complete());

        let node = stroke.apply(Node::new("rect"));
        assert_eq!(node.attribute("stroke-width"), Some("3"));
        assert_eq!(node.attribute("stroke"), None);
    }

    #[test]
    fn test_stroke_complete_attribute_order() {
        let stroke = StrokeDefinition::new(Some(Color::new("#123456").unwrap()), Some(1.5));
        assert!(stroke.is_complete());

        let node = stroke.apply(Node::new("circle").set("r", 1));
        let names: Vec<_> = node.attributes().keys().map(String::as_str).collect();
        assert_eq!(names, ["r", "stroke-width", "stroke"]);
        assert_eq!(node.attribute("stroke"), Some("#123456"));
    }
}
