//! Free-standing centered text.

use crate::{
    color::Color,
    draw::{Canvas, Drawable},
    geometry::Coordinate,
    node::Node,
};

/// Font family used when neither the operation nor the configuration names one.
pub const DEFAULT_FONT: &str = "Arial";

/// Default font size for text and tick labels.
pub const DEFAULT_TEXT_SIZE: f32 = 24.0;

/// A text run centered on `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    x: Coordinate,
    y: Coordinate,
    content: String,
    size: f32,
    fill: Color,
    font: String,
}

impl Text {
    pub fn new(x: Coordinate, y: Coordinate, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            size: DEFAULT_TEXT_SIZE,
            fill: Color::white(),
            font: DEFAULT_FONT.to_string(),
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Drawable for Text {
    fn render(&self, canvas: &Canvas) -> Node {
        let position = canvas.resolve(self.x, self.y);

        Node::new("text")
            .set("x", position.x())
            .set("y", position.y())
            .set("fill", &self.fill)
            .set("font-family", self.font.as_str())
            .set("font-size", self.size)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("dy", "0.35em")
            .with_text(self.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    #[test]
    fn test_text_defaults() {
        let canvas = Canvas::new(Size::new(600.0, 600.0));
        let node = Text::new(Coordinate::Absolute(300.0), Coordinate::Absolute(450.0), "km/h")
            .render(&canvas);

        assert_eq!(node.tag(), "text");
        assert_eq!(node.text(), Some("km/h"));
        assert_eq!(node.attribute("x"), Some("300"));
        assert_eq!(node.attribute("y"), Some("450"));
        assert_eq!(node.attribute("fill"), Some("white"));
        assert_eq!(node.attribute("font-family"), Some("Arial"));
        assert_eq!(node.attribute("font-size"), Some("24"));
        assert_eq!(node.attribute("text-anchor"), Some("middle"));
    }

    #[test]
    fn test_text_percent_position() {
        let canvas = Canvas::new(Size::new(400.0, 200.0));
        let node = Text::new(Coordinate::Percent(50.0), Coordinate::Percent(75.0), "RPM")
            .with_size(12.5)
            .with_font("Courier New")
            .render(&canvas);

        assert_eq!(node.attribute("x"), Some("200"));
        assert_eq!(node.attribute("y"), Some("150"));
        assert_eq!(node.attribute("font-size"), Some("12.5"));
        assert_eq!(node.attribute("font-family"), Some("Courier New"));
    }
}
