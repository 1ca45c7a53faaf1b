//! Text labels placed around a dial.

use crate::{
    color::Color,
    draw::{Canvas, DEFAULT_FONT, DEFAULT_TEXT_SIZE, Drawable},
    geometry::polar_to_cartesian,
    node::Node,
};

/// Labels placed on a circle of `radius`, one per entry in `labels`.
///
/// With a positive `degrees_gap`, label `i` sits at `start + i * gap`.
/// Without one, the labels are spread evenly so that the first lands on
/// `degrees_start` and the last on `degrees_end`.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeTickLabels {
    radius: f32,
    degrees_start: f32,
    degrees_end: f32,
    degrees_gap: Option<f32>,
    labels: Vec<String>,
    label_fill: Color,
    label_size: f32,
    label_font: String,
}

impl GaugeTickLabels {
    pub fn new(radius: f32, degrees_start: f32, degrees_end: f32, labels: Vec<String>) -> Self {
        Self {
            radius,
            degrees_start,
            degrees_end,
            degrees_gap: None,
            labels,
            label_fill: Color::white(),
            label_size: DEFAULT_TEXT_SIZE,
            label_font: DEFAULT_FONT.to_string(),
        }
    }

    /// Places labels at a fixed angular step. A gap of zero or less keeps
    /// the even spread.
    pub fn with_degrees_gap(mut self, degrees_gap: f32) -> Self {
        self.degrees_gap = Some(degrees_gap);
        self
    }

    pub fn with_label_fill(mut self, label_fill: Color) -> Self {
        self.label_fill = label_fill;
        self
    }

    pub fn with_label_size(mut self, label_size: f32) -> Self {
        self.label_size = label_size;
        self
    }

    pub fn with_label_font(mut self, label_font: impl Into<String>) -> Self {
        self.label_font = label_font.into();
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the dial angle of every label, index-aligned with `labels`.
    pub fn angles(&self) -> Vec<f32> {
        let count = self.labels.len();

        match self.degrees_gap {
            Some(gap) if gap > 0.0 => (0..count)
                .map(|i| self.degrees_start + i as f32 * gap)
                .collect(),
            _ if count == 1 => vec![self.degrees_start],
            _ => {
                let divisions = count.saturating_sub(1) as f32;
                let span = self.degrees_end - self.degrees_start;
                (0..count)
                    .map(|i| {
                        if i + 1 == count {
                            // Land exactly on the end, free of rounding drift.
                            self.degrees_end
                        } else {
                            self.degrees_start + span * i as f32 / divisions
                        }
                    })
                    .collect()
            }
        }
    }

    /// Angle for label `index`, falling back to `degrees_end` past the
    /// computed angles.
    fn angle_at(&self, angles: &[f32], index: usize) -> f32 {
        angles.get(index).copied().unwrap_or(self.degrees_end)
    }
}

impl Drawable for GaugeTickLabels {
    fn render(&self, canvas: &Canvas) -> Node {
        let center = canvas.center();
        let angles = self.angles();

        let texts = self.labels.iter().enumerate().map(|(index, label)| {
            let position = polar_to_cartesian(center, self.radius, self.angle_at(&angles, index));

            Node::new("text")
                .set("x", position.x())
                .set("y", position.y())
                .set("font-size", self.label_size)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "middle")
                .set("dy", "0.35em")
                .with_text(label.as_str())
        });

        Node::new("g")
            .set("font-family", self.label_font.as_str())
            .set("fill", &self.label_fill)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .add_all(texts)
    }
}
