//! Elaboration: JSON values to the validated semantic model.
//!
//! Every layer is elaborated on its own. Problems inside a layer are
//! collected into that layer's [`ParseError`] and never reach its siblings.

use std::collections::HashSet;

use log::{debug, info, warn};
use serde_json::{Map, Value};

use gaugesmith_core::{
    draw::{
        Arc, Circle, DEFAULT_FONT, GaugeTickLabels, GaugeTicks, MAX_TICK_STEPS, Square,
        StrokeDefinition, Text, Triangle,
    },
    geometry::Size,
    semantic::{Layer, Operation, Shadow},
};

use crate::{
    document::{GaugeDocument, LayerEntry},
    elaborate_utils::Fields,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError, Result},
    parser::{self, kind_of},
};

/// Name given to layers that do not declare one.
pub const DEFAULT_LAYER_NAME: &str = "unnamed";

/// Default canvas edge length.
pub const DEFAULT_CANVAS_EDGE: f32 = 600.0;

/// Defaults applied while elaborating a document.
#[derive(Debug, Clone, PartialEq)]
pub struct ElaborateConfig {
    /// Canvas size for layers (and documents) that do not declare one
    pub canvas: Size,
    /// Shadow used for `"shadow": true` and for missing shadow fields
    pub shadow: Shadow,
    /// Font family for text and tick labels without an explicit font
    pub font: String,
}

impl ElaborateConfig {
    /// Create a new ElaborateConfig with the given defaults
    pub fn new(canvas: Size, shadow: Shadow, font: impl Into<String>) -> Self {
        Self {
            canvas,
            shadow,
            font: font.into(),
        }
    }
}

impl Default for ElaborateConfig {
    fn default() -> Self {
        Self::new(
            Size::new(DEFAULT_CANVAS_EDGE, DEFAULT_CANVAS_EDGE),
            Shadow::default(),
            DEFAULT_FONT,
        )
    }
}

pub struct Builder<'a> {
    cfg: &'a ElaborateConfig,
}

impl<'a> Builder<'a> {
    pub fn new(cfg: &'a ElaborateConfig) -> Self {
        Self { cfg }
    }

    // ============================================================================
    // Document
    // ============================================================================

    pub fn build(&self, value: &Value) -> std::result::Result<GaugeDocument, ParseError> {
        let root = parser::document_root(value)?;
        let layers = parser::document_layers(root)?;
        let canvas = self.document_canvas(root)?;

        info!(layers = layers.len(); "Elaborating gauge document");

        let mut claimed = HashSet::new();
        let entries = layers
            .iter()
            .enumerate()
            .map(|(index, layer)| self.build_layer_entry(index, layer, canvas, &mut claimed))
            .collect();

        Ok(GaugeDocument::new(entries))
    }

    /// Top-level `width`/`height` act as defaults for every layer.
    fn document_canvas(&self, root: &Map<String, Value>) -> Result<Size> {
        let fields = Fields::new(root, "document");
        let width = positive_dimension(&fields, "width")?.unwrap_or(self.cfg.canvas.width());
        let height = positive_dimension(&fields, "height")?.unwrap_or(self.cfg.canvas.height());
        Ok(Size::new(width, height))
    }

    // ============================================================================
    // Layers
    // ============================================================================

    fn build_layer_entry(
        &self,
        index: usize,
        value: &Value,
        canvas: Size,
        claimed: &mut HashSet<String>,
    ) -> LayerEntry {
        let name = declared_name(value).unwrap_or_else(|| DEFAULT_LAYER_NAME.to_string());
        let mut collector = DiagnosticCollector::new();

        let layer = self.build_layer(index, value, canvas, claimed, &mut collector);
        let result = match (collector.finish(), layer) {
            (Ok(warnings), Some(layer)) => {
                info!(
                    layer = layer.name(),
                    operations = layer.operations().len();
                    "Layer elaborated"
                );
                return LayerEntry::new(index, name, Ok(layer), warnings);
            }
            (Err(err), _) => err,
            // Layer construction only stops early after emitting an error.
            (Ok(diagnostics), None) => ParseError::new(diagnostics),
        };

        warn!(
            layer = name.as_str(),
            index,
            errors = result.errors().count();
            "Layer failed elaboration"
        );
        LayerEntry::new(index, name, Err(result), Vec::new())
    }

    fn build_layer(
        &self,
        index: usize,
        value: &Value,
        canvas: Size,
        claimed: &mut HashSet<String>,
        collector: &mut DiagnosticCollector,
    ) -> Option<Layer> {
        let Some(map) = value.as_object() else {
            collector.emit(
                Diagnostic::error(format!(
                    "layer #{index} must be a JSON object, found {}",
                    kind_of(value)
                ))
                .with_code(ErrorCode::E002),
            );
            return None;
        };

        let fields = Fields::new(map, "layer");
        let header = self.layer_header(&fields, canvas);
        let (name, size, shadow) = match header {
            Ok(header) => header,
            Err(diag) => {
                collector.emit(diag.with_location(format!("layer #{index}")));
                return None;
            }
        };

        // Layer names are output file stems; a repeat would overwrite.
        if !claimed.insert(name.clone()) {
            collector.emit(
                Diagnostic::error(format!("duplicate layer name `{name}`"))
                    .with_code(ErrorCode::E101)
                    .with_help(format!(
                        "layer #{index} would overwrite the file of an earlier layer; give it a unique `name`"
                    )),
            );
            return None;
        }

        debug!(layer = name.as_str(), width = size.width(), height = size.height(); "Elaborating layer");

        let operations = match map.get("operations") {
            None | Some(Value::Null) => &[][..],
            Some(Value::Array(operations)) => operations.as_slice(),
            Some(other) => {
                collector.emit(
                    Diagnostic::error(format!(
                        "`operations` must be an array, found {}",
                        kind_of(other)
                    ))
                    .with_code(ErrorCode::E002)
                    .with_help(format!("layer `{name}`")),
                );
                return None;
            }
        };

        let mut elaborated = Vec::with_capacity(operations.len());
        for (position, operation) in operations.iter().enumerate() {
            match self.build_operation(operation) {
                Ok(Elaborated::Operation(operation)) => {
                    debug!(layer = name.as_str(), position, kind = operation.kind(); "Operation elaborated");
                    elaborated.push(operation);
                }
                Ok(Elaborated::Skipped { kind }) => {
                    debug!(layer = name.as_str(), position, kind; "Operation skipped by request");
                }
                Ok(Elaborated::Unknown { kind }) => {
                    warn!(layer = name.as_str(), position, kind = kind.as_str(); "Skipping unknown operation");
                    collector.emit(
                        Diagnostic::warning(format!("unknown operation type `{kind}`"))
                            .with_code(ErrorCode::W300)
                            .with_help(format!(
                                "operation #{} of layer `{name}` was skipped",
                                position + 1
                            )),
                    );
                }
                Err(diag) => collector.emit(diag.with_location(format!(
                    "{} of layer `{name}`",
                    describe_operation(position, operation)
                ))),
            }
        }

        if collector.has_errors() {
            return None;
        }

        Some(Layer::new(name, size, shadow, elaborated))
    }

    fn layer_header(
        &self,
        fields: &Fields<'_>,
        canvas: Size,
    ) -> Result<(String, Size, Option<Shadow>)> {
        let name = match fields.get("name") {
            Some(value) => validated_name(fields, value)?,
            None => DEFAULT_LAYER_NAME.to_string(),
        };

        let width = positive_dimension(fields, "width")?.unwrap_or(canvas.width());
        let height = positive_dimension(fields, "height")?.unwrap_or(canvas.height());
        let shadow = self.shadow(fields)?;

        Ok((name, Size::new(width, height), shadow))
    }

    /// `false`/absent: no shadow, `true`: configured shadow, object: overrides.
    fn shadow(&self, fields: &Fields<'_>) -> Result<Option<Shadow>> {
        let defaults = self.cfg.shadow;
        match fields.get("shadow") {
            None | Some(Value::Bool(false)) => Ok(None),
            Some(Value::Bool(true)) => Ok(Some(defaults)),
            Some(Value::Object(map)) => {
                let shadow = Fields::new(map, "shadow");
                Ok(Some(Shadow::new(
                    shadow.opt_number("size")?.unwrap_or(defaults.size()),
                    shadow.opt_number("x")?.unwrap_or(defaults.x()),
                    shadow.opt_number("y")?.unwrap_or(defaults.y()),
                )))
            }
            Some(other) => Err(fields.invalid(
                "shadow",
                other,
                "expected `true`, `false` or an object with `size`, `x` and `y`",
            )),
        }
    }

    // ============================================================================
    // Operations
    // ============================================================================

    fn build_operation(&self, value: &Value) -> Result<Elaborated> {
        let Some(map) = value.as_object() else {
            return Err(Diagnostic::error(format!(
                "an operation must be a JSON object, found {}",
                kind_of(value)
            ))
            .with_code(ErrorCode::E002));
        };

        let tag = Fields::new(map, "operation");
        let kind = match tag.required("type")? {
            Value::String(kind) => kind.as_str(),
            other => return Err(tag.invalid("type", other, "expected an operation name string")),
        };

        let context = format!("`{kind}` operation");
        let fields = Fields::new(map, &context);
        let skip = fields.opt_bool("skip")?.unwrap_or(false);
        fields.opt_string("name")?;

        let operation = match kind {
            "circle" => Operation::Circle(self.circle(&fields)?),
            "arc" => Operation::Arc(self.arc(&fields)?),
            "gaugeTicks" => Operation::GaugeTicks(self.gauge_ticks(&fields)?),
            "gaugeTickLabels" => Operation::GaugeTickLabels(self.gauge_tick_labels(&fields)?),
            "text" => Operation::Text(self.text(&fields)?),
            "square" => Operation::Square(self.square(&fields)?),
            "triangle" => Operation::Triangle(self.triangle(&fields)?),
            _ => {
                return Ok(Elaborated::Unknown {
                    kind: kind.to_string(),
                });
            }
        };

        if skip {
            return Ok(Elaborated::Skipped {
                kind: operation.kind(),
            });
        }
        Ok(Elaborated::Operation(operation))
    }

    fn circle(&self, fields: &Fields<'_>) -> Result<Circle> {
        let mut circle = Circle::new(fields.number("radius")?).with_stroke(stroke(fields)?);
        if let Some(x) = fields.opt_coordinate("x")? {
            circle = circle.with_x(x);
        }
        if let Some(y) = fields.opt_coordinate("y")? {
            circle = circle.with_y(y);
        }
        if let Some(fill) = fields.opt_color("fill")? {
            circle = circle.with_fill(fill);
        }
        Ok(circle)
    }

    fn arc(&self, fields: &Fields<'_>) -> Result<Arc> {
        let radius = fields.number("radius")?;
        let degrees_start = fields.number("degreesStart")?;
        let degrees_end = fields.number("degreesEnd")?;
        let inner_thickness = fields.number("innerThickness")?;
        let fill = fields.color("fill")?;

        if inner_thickness > radius {
            return Err(Diagnostic::error(format!(
                "`innerThickness` {inner_thickness} exceeds `radius` {radius} in `arc` operation"
            ))
            .with_code(ErrorCode::E201)
            .with_help("the inner radius `radius - innerThickness` must not be negative"));
        }

        Ok(Arc::new(
            radius,
            degrees_start,
            degrees_end,
            inner_thickness,
            fill,
        ))
    }

    fn gauge_ticks(&self, fields: &Fields<'_>) -> Result<GaugeTicks> {
        let radius = fields.number("radius")?;
        let degrees_start = fields.number("degreesStart")?;
        let degrees_end = fields.number("degreesEnd")?;
        let degrees_gap = fields.number("degreesGap")?;

        if degrees_gap <= 0.0 {
            return Err(Diagnostic::error(format!(
                "`degreesGap` must be greater than zero in `gaugeTicks` operation, found {degrees_gap}"
            ))
            .with_code(ErrorCode::E200)
            .with_help("use a positive step such as 10"));
        }

        let steps = (f64::from(degrees_end) - f64::from(degrees_start)).abs() / f64::from(degrees_gap);
        if !steps.is_finite() || steps > MAX_TICK_STEPS as f64 {
            return Err(Diagnostic::error(format!(
                "`degreesGap` {degrees_gap} is too small for the span from {degrees_start} to {degrees_end} in `gaugeTicks` operation"
            ))
            .with_code(ErrorCode::E200)
            .with_help(format!("a tick set may have at most {MAX_TICK_STEPS} gaps")));
        }

        let mut ticks = GaugeTicks::new(radius, degrees_start, degrees_end, degrees_gap);
        if let Some(length) = fields.opt_number("tickLength")? {
            ticks = ticks.with_tick_length(length);
        }
        if let Some(width) = fields.opt_number("tickWidth")? {
            ticks = ticks.with_tick_width(width);
        }
        if let Some(fill) = fields.opt_color("tickFill")? {
            ticks = ticks.with_tick_fill(fill);
        }
        Ok(ticks)
    }

    fn gauge_tick_labels(&self, fields: &Fields<'_>) -> Result<GaugeTickLabels> {
        let mut labels = GaugeTickLabels::new(
            fields.number("radius")?,
            fields.number("degreesStart")?,
            fields.number("degreesEnd")?,
            fields.texts("labels")?,
        )
        .with_label_font(fields.opt_string("labelFont")?.unwrap_or(self.cfg.font.as_str()));

        if let Some(gap) = fields.opt_number("degreesGap")? {
            labels = labels.with_degrees_gap(gap);
        }
        if let Some(fill) = fields.opt_color("labelFill")? {
            labels = labels.with_label_fill(fill);
        }
        if let Some(size) = fields.opt_number("labelSize")? {
            labels = labels.with_label_size(size);
        }
        Ok(labels)
    }

    fn text(&self, fields: &Fields<'_>) -> Result<Text> {
        let mut text = Text::new(
            fields.coordinate("x")?,
            fields.coordinate("y")?,
            fields.text("text")?,
        )
        .with_font(fields.opt_string("font")?.unwrap_or(self.cfg.font.as_str()));

        if let Some(size) = fields.opt_number("size")? {
            text = text.with_size(size);
        }
        if let Some(fill) = fields.opt_color("fill")? {
            text = text.with_fill(fill);
        }
        Ok(text)
    }

    fn square(&self, fields: &Fields<'_>) -> Result<Square> {
        let mut square = Square::new(
            fields.coordinate("x")?,
            fields.coordinate("y")?,
            fields.number("width")?,
            fields.number("height")?,
        )
        .with_stroke(stroke(fields)?);

        if let Some(fill) = fields.opt_color("fill")? {
            square = square.with_fill(fill);
        }
        if let Some(round) = fields.opt_number("round")? {
            square = square.with_round(round);
        }
        Ok(square)
    }

    fn triangle(&self, fields: &Fields<'_>) -> Result<Triangle> {
        let mut triangle = Triangle::new(
            fields.coordinate("x")?,
            fields.coordinate("y")?,
            fields.number("width")?,
            fields.number("height")?,
        )
        .with_stroke(stroke(fields)?);

        if let Some(rotation) = fields.opt_number("rotation")? {
            triangle = triangle.with_rotation(rotation);
        }
        if let Some(fill) = fields.opt_color("fill")? {
            triangle = triangle.with_fill(fill);
        }
        Ok(triangle)
    }
}

/// What an operation entry elaborated to.
#[derive(Debug)]
enum Elaborated {
    Operation(Operation),
    /// A valid operation marked `"skip": true`.
    Skipped { kind: &'static str },
    /// A `type` tag outside the supported set.
    Unknown { kind: String },
}

fn stroke(fields: &Fields<'_>) -> Result<StrokeDefinition> {
    Ok(StrokeDefinition::new(
        fields.opt_color("strokeFill")?,
        fields.opt_number("strokeWidth")?,
    ))
}

fn positive_dimension(fields: &Fields<'_>, key: &str) -> Result<Option<f32>> {
    let Some(value) = fields.opt_number(key)? else {
        return Ok(None);
    };
    if value <= 0.0 {
        return Err(Diagnostic::error(format!(
            "`{key}` must be greater than zero, found {value}"
        ))
        .with_code(ErrorCode::E202));
    }
    Ok(Some(value))
}

/// Layer names become file stems, so they must be plain file names.
fn validated_name(fields: &Fields<'_>, value: &Value) -> Result<String> {
    let Some(name) = value.as_str() else {
        return Err(fields.invalid("name", value, "expected a string"));
    };

    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || name.contains(['/', '\\', '\0'])
    {
        return Err(fields.invalid(
            "name",
            value,
            "layer names are used as file names and must not be empty, `.`, `..` or contain path separators",
        ));
    }
    Ok(name.to_string())
}

/// The declared name of a layer value, if it has a string one.
fn declared_name(value: &Value) -> Option<String> {
    value.get("name")?.as_str().map(str::to_string)
}

/// "operation #2 (`needle`)" or "operation #2".
fn describe_operation(position: usize, value: &Value) -> String {
    match value.get("name").and_then(Value::as_str) {
        Some(name) => format!("operation #{} (`{name}`)", position + 1),
        None => format!("operation #{}", position + 1),
    }
}
