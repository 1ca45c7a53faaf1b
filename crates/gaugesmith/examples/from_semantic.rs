//! Example: Creating a gauge layer from the semantic model
//!
//! This example demonstrates how to programmatically build a layer using
//! the semantic model types directly, without parsing a JSON document.

use gaugesmith::{
    GaugeRenderer,
    color::Color,
    draw::{Arc, Circle, GaugeTickLabels, GaugeTicks, StrokeDefinition, Text, Triangle},
    geometry::{Coordinate, Size},
    semantic::{Layer, Operation, Shadow},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building gauge from semantic model...\n");

    let white = Color::white();
    let labels = (0..=8).map(|step| (step * 20).to_string()).collect();

    let operations = vec![
        Operation::Circle(
            Circle::new(290.0)
                .with_fill(Color::new("#1b1b1b")?)
                .with_stroke(StrokeDefinition::new(Some(Color::new("#555")?), Some(4.0))),
        ),
        // Red zone near the end of the scale.
        Operation::Arc(Arc::new(270.0, 90.0, 135.0, 12.0, Color::new("crimson")?)),
        Operation::GaugeTicks(
            GaugeTicks::new(270.0, -135.0, 135.0, 6.75)
                .with_tick_length(10.0)
                .with_tick_width(1.0),
        ),
        Operation::GaugeTicks(GaugeTicks::new(270.0, -135.0, 135.0, 33.75).with_tick_fill(white.clone())),
        Operation::GaugeTickLabels(GaugeTickLabels::new(215.0, -135.0, 135.0, labels).with_label_size(28.0)),
        Operation::Text(
            Text::new(Coordinate::Percent(50.0), Coordinate::Percent(70.0), "km/h")
                .with_size(20.0)
                .with_fill(Color::new("#aaa")?),
        ),
        Operation::Triangle(
            Triangle::new(Coordinate::Percent(50.0), Coordinate::Absolute(40.0), 16.0, 20.0)
                .with_rotation(180.0)
                .with_fill(Color::new("orange")?),
        ),
    ];

    let layer = Layer::new(
        "speedometer",
        Size::new(600.0, 600.0),
        Some(Shadow::default()),
        operations,
    );

    println!(
        "Layer `{}` with {} operations",
        layer.name(),
        layer.operations().len()
    );

    let renderer = GaugeRenderer::default();
    let svg = renderer.render_svg(&layer);

    println!("\nGenerated SVG ({} bytes):\n", svg.len());
    println!("{svg}");

    Ok(())
}
