//! Annular wedge primitive used for gauge color bands.
//!
//! The wedge is a single closed path:
//!
//! ```text
//!   M outer(start)
//!   A r,r 0 large 1 outer(end)      outer arc, clockwise
//!   L inner(end)                    radial edge
//!   A ri,ri 0 large 0 inner(start)  inner arc, back counter-clockwise
//!   Z
//! ```

use svg::node::element::path::Data;

use crate::{
    color::Color,
    draw::{Canvas, Drawable},
    geometry::polar_to_cartesian,
    node::Node,
};

/// A ring segment between `radius - inner_thickness` and `radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    radius: f32,
    degrees_start: f32,
    degrees_end: f32,
    inner_thickness: f32,
    fill: Color,
}

impl Arc {
    pub fn new(
        radius: f32,
        degrees_start: f32,
        degrees_end: f32,
        inner_thickness: f32,
        fill: Color,
    ) -> Self {
        Self {
            radius,
            degrees_start,
            degrees_end,
            inner_thickness,
            fill,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Radius of the inner boundary of the wedge.
    pub fn inner_radius(&self) -> f32 {
        self.radius - self.inner_thickness
    }

    /// Whether the path takes the long way round.
    ///
    /// True iff `|end − start| mod 360 > 180`. A sweep of exactly 180° uses
    /// the short arc.
    pub fn large_arc(&self) -> bool {
        (self.degrees_end - self.degrees_start).abs() % 360.0 > 180.0
    }

    /// Builds the SVG path data for the wedge around `center`.
    pub fn path_data(&self, canvas: &Canvas) -> Data {
        let center = canvas.center();
        let inner_radius = self.inner_radius();
        let large_arc = if self.large_arc() { 1.0 } else { 0.0 };

        let outer_start = polar_to_cartesian(center, self.radius, self.degrees_start);
        let outer_end = polar_to_cartesian(center, self.radius, self.degrees_end);
        let inner_end = polar_to_cartesian(center, inner_radius, self.degrees_end);
        let inner_start = polar_to_cartesian(center, inner_radius, self.degrees_start);

        Data::new()
            .move_to((outer_start.x(), outer_start.y()))
            .elliptical_arc_to((
                self.radius,
                self.radius,
                0.0,
                large_arc,
                1.0,
                outer_end.x(),
                outer_end.y(),
            ))
            .line_to((inner_end.x(), inner_end.y()))
            .elliptical_arc_to((
                inner_radius,
                inner_radius,
                0.0,
                large_arc,
                0.0,
                inner_start.x(),
                inner_start.y(),
            ))
            .close()
    }
}

impl Drawable for Arc {
    fn render(&self, canvas: &Canvas) -> Node {
        Node::new("path")
            .set("d", self.path_data(canvas))
            .set("fill", &self.fill)
    }
}
