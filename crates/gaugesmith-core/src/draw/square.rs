//! Axis-aligned (optionally rounded) rectangle.

use crate::{
    color::Color,
    draw::{Canvas, Drawable, StrokeDefinition},
    geometry::Coordinate,
    node::Node,
};

/// A rectangle centered on `(x, y)`.
///
/// The `rect` keeps `(x, y)` as its origin and is shifted back by half its
/// size through a `translate` transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    x: Coordinate,
    y: Coordinate,
    width: f32,
    height: f32,
    fill: Color,
    round: Option<f32>,
    stroke: StrokeDefinition,
}

impl Square {
    pub fn new(x: Coordinate, y: Coordinate, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: Color::transparent(),
            round: None,
            stroke: StrokeDefinition::default(),
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the corner radius. Zero keeps square corners.
    pub fn with_round(mut self, round: f32) -> Self {
        self.round = Some(round);
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = stroke;
        self
    }
}

impl Drawable for Square {
    fn render(&self, canvas: &Canvas) -> Node {
        let origin = canvas.resolve(self.x, self.y);
        let transform = format!(
            "translate({}, {})",
            -self.width / 2.0,
            -self.height / 2.0
        );

        let node = Node::new("rect")
            .set("x", origin.x())
            .set("y", origin.y())
            .set("width", self.width)
            .set("height", self.height)
            .set("fill", &self.fill)
            .set("transform", transform)
            .set_opt("rx", self.round.filter(|round| *round != 0.0));

        self.stroke.apply(node)
    }
}
