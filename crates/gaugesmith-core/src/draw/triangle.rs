//! Isosceles triangle, apex up, used for needles and pointers.

use crate::{
    color::Color,
    draw::{Canvas, Drawable, StrokeDefinition},
    geometry::Coordinate,
    node::Node,
};

/// A triangle whose bounding box is centered on `(x, y)`.
///
/// The polygon is defined in local coordinates around the origin, moved to
/// `(x, y)` and then rotated clockwise by `rotation` degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    x: Coordinate,
    y: Coordinate,
    width: f32,
    height: f32,
    rotation: f32,
    fill: Color,
    stroke: StrokeDefinition,
}

impl Triangle {
    pub fn new(x: Coordinate, y: Coordinate, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
            fill: Color::transparent(),
            stroke: StrokeDefinition::default(),
        }
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = stroke;
        self
    }

    /// Local-space vertices: apex, bottom left, bottom right.
    pub fn points(&self) -> [(f32, f32); 3] {
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;
        [
            (0.0, -half_height),
            (-half_width, half_height),
            (half_width, half_height),
        ]
    }
}

impl Drawable for Triangle {
    fn render(&self, canvas: &Canvas) -> Node {
        let position = canvas.resolve(self.x, self.y);

        let points = self
            .points()
            .iter()
            .map(|(x, y)| format!("{x},{y}"))
            .collect::<Vec<_>>()
            .join(" ");

        let mut transform = format!("translate({},{})", position.x(), position.y());
        if self.rotation != 0.0 {
            transform.push_str(&format!(" rotate({})", self.rotation));
        }

        let node = Node::new("polygon")
            .set("points", points)
            .set("fill", &self.fill)
            .set("transform", transform);

        self.stroke.apply(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    #[test]
    fn test_triangle_points_and_translate() {
        let canvas = Canvas::new(Size::new(600.0, 600.0));
        let node = Triangle::new(Coordinate::Absolute(300.0), Coordinate::Absolute(120.0), 20.0, 40.0)
            .render(&canvas);

        assert_eq!(node.tag(), "polygon");
        assert_eq!(node.attribute("points"), Some("0,-20 -10,20 10,20"));
        assert_eq!(node.attribute("transform"), Some("translate(300,120)"));
        assert_eq!(node.attribute("fill"), Some("transparent"));
    }

    #[test]
    fn test_triangle_percent_and_rotation() {
        let canvas = Canvas::new(Size::new(400.0, 200.0));
        let node = Triangle::new(Coordinate::Percent(50.0), Coordinate::Percent(50.0), 10.0, 10.0)
            .with_rotation(45.0)
            .with_stroke(StrokeDefinition::new(Some(Color::new("black").unwrap()), Some(1.0)))
            .render(&canvas);

        assert_eq!(
            node.attribute("transform"),
            Some("translate(200,100) rotate(45)")
        );
        assert_eq!(node.attribute("stroke-width"), Some("1"));
        assert_eq!(node.attribute("stroke"), Some("black"));
    }
}
