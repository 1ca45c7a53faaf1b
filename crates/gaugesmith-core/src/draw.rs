//! Primitive builders for gauge dials.
//!
//! Each primitive is a validated definition (radius, angles, colors, ...)
//! that renders itself into a single [`Node`], possibly a group. Builders are
//! pure: the same definition and [`Canvas`] always produce the same node.
//!
//! # Overview
//!
//! - [`Drawable`] - The rendering trait shared by all primitives
//! - [`Canvas`] - Ambient layer context (size, center, percentage resolution)
//! - [`Circle`], [`Arc`], [`GaugeTicks`], [`GaugeTickLabels`], [`Text`],
//!   [`Square`], [`Triangle`] - The primitive definitions
//! - [`StrokeDefinition`] - Optional outline shared by closed shapes

mod arc;
mod circle;
mod square;
mod stroke;
mod text;
mod tick_labels;
mod ticks;
mod triangle;

pub use arc::Arc;
pub use circle::Circle;
pub use square::Square;
pub use stroke::StrokeDefinition;
pub use text::{DEFAULT_FONT, DEFAULT_TEXT_SIZE, Text};
pub use tick_labels::GaugeTickLabels;
pub use ticks::{DEFAULT_TICK_LENGTH, DEFAULT_TICK_WIDTH, GaugeTicks, MAX_TICK_STEPS};
pub use triangle::Triangle;

use crate::{
    geometry::{Coordinate, Point, Size},
    node::Node,
};

/// A primitive that can render itself onto a layer canvas.
pub trait Drawable: std::fmt::Debug {
    /// Renders the primitive into a node for the given canvas.
    fn render(&self, canvas: &Canvas) -> Node;
}

/// The layer a primitive is rendered onto.
///
/// The canvas center is always derived from its size and percentage
/// coordinates are resolved against the canvas dimensions only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    size: Size,
}

impl Canvas {
    /// Creates a canvas of the given size.
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    /// Returns the canvas size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the canvas center, `(width / 2, height / 2)`.
    pub fn center(&self) -> Point {
        self.size.center()
    }

    /// Resolves a horizontal coordinate against the canvas width.
    pub fn resolve_x(&self, x: Coordinate) -> f32 {
        x.resolve(self.size.width())
    }

    /// Resolves a vertical coordinate against the canvas height.
    pub fn resolve_y(&self, y: Coordinate) -> f32 {
        y.resolve(self.size.height())
    }

    /// Resolves a coordinate pair into an absolute point.
    pub fn resolve(&self, x: Coordinate, y: Coordinate) -> Point {
        Point::new(self.resolve_x(x), self.resolve_y(y))
    }
}
