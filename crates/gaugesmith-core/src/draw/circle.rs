//! Filled circle primitive.

use crate::{
    color::Color,
    draw::{Canvas, Drawable, StrokeDefinition},
    geometry::Coordinate,
    node::Node,
};

/// A circle, centered on the canvas unless an explicit position is given.
///
/// The outline is emitted only when both a stroke width and a stroke color
/// are set.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    radius: f32,
    x: Option<Coordinate>,
    y: Option<Coordinate>,
    fill: Color,
    stroke: StrokeDefinition,
}

impl Circle {
    /// Creates a transparent circle with the given radius at the canvas center.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            x: None,
            y: None,
            fill: Color::transparent(),
            stroke: StrokeDefinition::default(),
        }
    }

    /// Overrides the horizontal center.
    pub fn with_x(mut self, x: Coordinate) -> Self {
        self.x = Some(x);
        self
    }

    /// Overrides the vertical center.
    pub fn with_y(mut self, y: Coordinate) -> Self {
        self.y = Some(y);
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

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn fill(&self) -> &Color {
        &self.fill
    }
}

impl Drawable for Circle {
    fn render(&self, canvas: &Canvas) -> Node {
        let center = canvas.center();
        let cx = self.x.map_or(center.x(), |x| canvas.resolve_x(x));
        let cy = self.y.map_or(center.y(), |y| canvas.resolve_y(y));

        let node = Node::new("circle")
            .set("cx", cx)
            .set("cy", cy)
            .set("r", self.radius)
            .set("fill", &self.fill);

        if self.stroke.is_complete() {
            self.stroke.apply(node)
        } else {
            node
        }
    }
}
