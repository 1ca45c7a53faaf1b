//! Radial tick marks along a dial.

use log::trace;

use crate::{
    color::Color,
    draw::{Canvas, Drawable},
    geometry::polar_to_cartesian,
    node::Node,
};

/// Default tick length, measured inward from the radius.
pub const DEFAULT_TICK_LENGTH: f32 = 20.0;

/// Default tick stroke width.
pub const DEFAULT_TICK_WIDTH: f32 = 2.0;

/// Upper bound on the number of steps a single tick set may take.
pub const MAX_TICK_STEPS: usize = 100_000;

/// Slack, in step units, for a last step that falls just short of
/// `degrees_end` because of float rounding.
const STEP_TOLERANCE: f64 = 1e-4;

/// A set of evenly spaced radial lines between two dial angles.
///
/// Ticks step from `degrees_start` toward `degrees_end` in increments of
/// `degrees_gap`, inclusive of the end when it lands on a step. The gap must
/// be positive; that is checked when the definition is parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeTicks {
    radius: f32,
    degrees_start: f32,
    degrees_end: f32,
    degrees_gap: f32,
    tick_length: f32,
    tick_width: f32,
    tick_fill: Color,
}

impl GaugeTicks {
    pub fn new(radius: f32, degrees_start: f32, degrees_end: f32, degrees_gap: f32) -> Self {
        Self {
            radius,
            degrees_start,
            degrees_end,
            degrees_gap,
            tick_length: DEFAULT_TICK_LENGTH,
            tick_width: DEFAULT_TICK_WIDTH,
            tick_fill: Color::white(),
        }
    }

    pub fn with_tick_length(mut self, tick_length: f32) -> Self {
        self.tick_length = tick_length;
        self
    }

    pub fn with_tick_width(mut self, tick_width: f32) -> Self {
        self.tick_width = tick_width;
        self
    }

    pub fn with_tick_fill(mut self, tick_fill: Color) -> Self {
        self.tick_fill = tick_fill;
        self
    }

    /// Returns the dial angle of every tick, in drawing order.
    ///
    /// For a positive gap there are `floor(|end − start| / gap) + 1` ticks,
    /// none of them past `degrees_end`. A non-positive gap, or one so small
    /// that it needs more than [`MAX_TICK_STEPS`] steps, yields no ticks.
    pub fn angles(&self) -> Vec<f32> {
        let Some(steps) = self.steps() else {
            return Vec::new();
        };

        let gap = self.degrees_gap;
        let direction = if self.degrees_end >= self.degrees_start {
            1.0
        } else {
            -1.0
        };

        (0..=steps)
            .map(|step| self.degrees_start + direction * step as f32 * gap)
            .collect()
    }

    /// Number of whole gaps between start and end, if the tick set is drawable.
    fn steps(&self) -> Option<usize> {
        let gap = f64::from(self.degrees_gap);
        if !(gap > 0.0 && gap.is_finite()) {
            return None;
        }

        let start = f64::from(self.degrees_start);
        let end = f64::from(self.degrees_end);
        let span = (end - start).abs();
        let ratio = span / gap;
        if !ratio.is_finite() || ratio > MAX_TICK_STEPS as f64 {
            return None;
        }

        let mut steps = (ratio + STEP_TOLERANCE).floor();
        // The tolerance must never carry the last tick past the end.
        let overshoot = steps * gap - span;
        let epsilon = 4.0 * f64::from(f32::EPSILON) * start.abs().max(end.abs()).max(gap);
        if steps > 0.0 && overshoot > epsilon {
            steps -= 1.0;
        }

        usize::try_from(steps as u64).ok()
    }
}

impl Drawable for GaugeTicks {
    fn render(&self, canvas: &Canvas) -> Node {
        let center = canvas.center();
        let inner_radius = self.radius - self.tick_length;

        let angles = self.angles();
        trace!(count = angles.len(), gap = self.degrees_gap; "Generating gauge ticks");

        let lines = angles.into_iter().map(|angle| {
            let from = polar_to_cartesian(center, inner_radius, angle);
            let to = polar_to_cartesian(center, self.radius, angle);

            Node::new("line")
                .set("x1", from.x())
                .set("y1", from.y())
                .set("x2", to.x())
                .set("y2", to.y())
                .set("stroke-width", self.tick_width)
        });

        Node::new("g")
            .set("stroke", &self.tick_fill)
            .set("fill", "none")
            .add_all(lines)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::geometry::Size;

    fn canvas() -> Canvas {
        Canvas::new(Size::new(600.0, 600.0))
    }

    #[test]
    fn test_quarter_dial_ticks() {
        let ticks = GaugeTicks::new(100.0, 0.0, 90.0, 30.0);
        assert_eq!(ticks.angles(), vec![0.0, 30.0, 60.0, 90.0]);

        let node = ticks.render(&canvas());
        assert_eq!(node.tag(), "g");
        assert_eq!(node.children().len(), 4);
        assert!(node.children().iter().all(|line| line.tag() == "line"));
    }

    #[test]
    fn test_tick_geometry() {
        let node = GaugeTicks::new(100.0, 0.0, 0.0, 10.0)
            .with_tick_length(20.0)
            .with_tick_width(3.0)
            .render(&canvas());

        assert_eq!(node.children().len(), 1);
        let line = &node.children()[0];
        let attr = |name: &str| line.attribute(name).unwrap().parse::<f32>().unwrap();

        // Straight up from the center: inner end at r=80, outer end at r=100.
        assert_approx_eq!(f32, attr("x1"), 300.0, epsilon = 1e-3);
        assert_approx_eq!(f32, attr("y1"), 220.0, epsilon = 1e-3);
        assert_approx_eq!(f32, attr("x2"), 300.0, epsilon = 1e-3);
        assert_approx_eq!(f32, attr("y2"), 200.0, epsilon = 1e-3);
        assert_eq!(line.attribute("stroke-width"), Some("3"));
    }

    #[test]
    fn test_ticks_step_backwards() {
        let ticks = GaugeTicks::new(100.0, 90.0, -90.0, 45.0);
        assert_eq!(ticks.angles(), vec![90.0, 45.0, 0.0, -45.0, -90.0]);
    }

    #[test]
    fn test_ticks_end_not_on_step() {
        let ticks = GaugeTicks::new(100.0, 0.0, 100.0, 30.0);
        assert_eq!(ticks.angles(), vec![0.0, 30.0, 60.0, 90.0]);
    }

    #[test]
    fn test_fractional_gap_keeps_last_tick() {
        let ticks = GaugeTicks::new(100.0, 0.0, 1.0, 0.1);
        assert_eq!(ticks.angles().len(), 11);
    }

    #[test]
    fn test_gap_just_over_divisor_stops_before_end() {
        let angles = GaugeTicks::new(100.0, 0.0, 90.0, 30.0005).angles();
        assert_eq!(angles.len(), 3);
        assert!(angles.iter().all(|angle| *angle <= 90.0));

        let angles = GaugeTicks::new(100.0, 90.0, 0.0, 30.0005).angles();
        assert_eq!(angles.len(), 3);
        assert!(angles.iter().all(|angle| *angle >= 0.0));
    }

    #[test]
    fn test_non_positive_gap_yields_nothing() {
        assert!(GaugeTicks::new(100.0, 0.0, 90.0, 0.0).angles().is_empty());
        assert!(GaugeTicks::new(100.0, 0.0, 90.0, -10.0).angles().is_empty());
        assert!(GaugeTicks::new(100.0, 0.0, 90.0, f32::NAN).angles().is_empty());
    }

    #[test]
    fn test_tiny_gap_yields_nothing() {
        assert!(GaugeTicks::new(100.0, 0.0, 360.0, 1e-38).angles().is_empty());
        assert!(GaugeTicks::new(100.0, 0.0, 360.0, 1e-9).angles().is_empty());
        assert!(
            GaugeTicks::new(100.0, f32::MIN, f32::MAX, 1.0)
                .angles()
                .is_empty()
        );

        let node = GaugeTicks::new(100.0, 0.0, 360.0, 1e-38).render(&canvas());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_step_limit_is_inclusive() {
        let ticks = GaugeTicks::new(100.0, 0.0, MAX_TICK_STEPS as f32, 1.0);
        assert_eq!(ticks.angles().len(), MAX_TICK_STEPS + 1);
    }

    #[test]
    fn test_group_attributes() {
        let node = GaugeTicks::new(100.0, 0.0, 90.0, 45.0)
            .with_tick_fill(Color::new("#ff0000").unwrap())
            .render(&canvas());

        assert_eq!(node.attribute("stroke"), Some("#ff0000"));
        assert_eq!(node.attribute("fill"), Some("none"));
    }

    proptest! {
        #[test]
        fn prop_tick_count(start in -360i32..360, end in -360i32..360, gap in 1i32..90) {
            let ticks = GaugeTicks::new(100.0, start as f32, end as f32, gap as f32);
            let angles = ticks.angles();
            let expected = ((end - start).abs() / gap) as usize + 1;

            prop_assert_eq!(angles.len(), expected);
            prop_assert_eq!(angles[0], start as f32);

            let direction = (end - start).signum() as f32;
            for pair in angles.windows(2) {
                prop_assert!((pair[1] - pair[0]) * direction > 0.0);
            }
        }

        #[test]
        fn prop_ticks_never_cross_end(start in -360.0f32..360.0, end in -360.0f32..360.0, gap in 0.5f32..90.0) {
            let angles = GaugeTicks::new(100.0, start, end, gap).angles();
            let (low, high) = (start.min(end), start.max(end));

            prop_assert!(!angles.is_empty());
            for angle in &angles {
                prop_assert!(*angle >= low - 1e-3 && *angle <= high + 1e-3);
            }
        }
    }
}
