//! Semantic layer model.
//!
//! These types are the validated form of a gauge document: every required
//! field is present, every color and coordinate has been parsed, and every
//! operation is one of the closed set of primitive kinds. The compositor
//! consumes them without further checks.
//!
//! # Pipeline Position
//!
//! ```text
//! JSON document
//!     ↓ parse + validate
//! Semantic Model (these types)
//!     ↓ compose
//! Node tree
//!     ↓ export
//! SVG file
//! ```

use std::fmt;

use crate::{
    draw::{Arc, Canvas, Circle, Drawable, GaugeTickLabels, GaugeTicks, Square, Text, Triangle},
    geometry::Size,
    node::Node,
};

/// Default shadow blur size.
pub const DEFAULT_SHADOW_SIZE: f32 = 4.0;

/// Default shadow offset along both axes.
pub const DEFAULT_SHADOW_OFFSET: f32 = 3.0;

/// Drop shadow parameters for a layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    size: f32,
    x: f32,
    y: f32,
}

impl Shadow {
    pub fn new(size: f32, x: f32, y: f32) -> Self {
        Self { size, x, y }
    }

    /// Blur standard deviation.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Horizontal offset.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Vertical offset.
    pub fn y(&self) -> f32 {
        self.y
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::new(DEFAULT_SHADOW_SIZE, DEFAULT_SHADOW_OFFSET, DEFAULT_SHADOW_OFFSET)
    }
}

/// One drawing instruction, already validated.
///
/// Variants map one to one onto the primitive builders in [`crate::draw`].
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Circle(Circle),
    Arc(Arc),
    GaugeTicks(GaugeTicks),
    GaugeTickLabels(GaugeTickLabels),
    Text(Text),
    Square(Square),
    Triangle(Triangle),
}

impl Operation {
    /// Returns the document tag for this kind of operation.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Circle(_) => "circle",
            Self::Arc(_) => "arc",
            Self::GaugeTicks(_) => "gaugeTicks",
            Self::GaugeTickLabels(_) => "gaugeTickLabels",
            Self::Text(_) => "text",
            Self::Square(_) => "square",
            Self::Triangle(_) => "triangle",
        }
    }

    fn drawable(&self) -> &dyn Drawable {
        match self {
            Self::Circle(circle) => circle,
            Self::Arc(arc) => arc,
            Self::GaugeTicks(ticks) => ticks,
            Self::GaugeTickLabels(labels) => labels,
            Self::Text(text) => text,
            Self::Square(square) => square,
            Self::Triangle(triangle) => triangle,
        }
    }
}

impl Drawable for Operation {
    fn render(&self, canvas: &Canvas) -> Node {
        self.drawable().render(canvas)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// One independently rendered canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    name: String,
    size: Size,
    shadow: Option<Shadow>,
    operations: Vec<Operation>,
}

impl Layer {
    pub fn new(
        name: impl Into<String>,
        size: Size,
        shadow: Option<Shadow>,
        operations: Vec<Operation>,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            shadow,
            operations,
        }
    }

    /// The layer name, also the output file stem.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn shadow(&self) -> Option<Shadow> {
        self.shadow
    }

    /// Operations in paint order; later entries paint over earlier ones.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// The drawing context derived from the layer size.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.size)
    }
}
