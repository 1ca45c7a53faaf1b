//! Gaugesmith - Render declarative gauge-dial documents into SVG files.
//!
//! A gauge document is JSON describing one or more named layers. Each layer
//! has a canvas size, an optional drop shadow and an ordered list of drawing
//! operations (circles, annular arcs, radial ticks, tick labels, text,
//! rectangles and triangles). Every layer becomes one standalone SVG file.

pub mod config;
pub mod export;

mod error;
mod report;

pub use gaugesmith_core::{color, draw, geometry, node, semantic};
pub use gaugesmith_parser::{GaugeDocument, LayerEntry, error as diagnostics};

pub use error::GaugesmithError;
pub use report::{LayerOutcome, LayerReport, RenderReport};

use std::path::Path;

use log::{debug, error, info, trace, warn};

use config::AppConfig;
use export::{Exporter, svg::Svg};
use node::Node;
use semantic::Layer;

/// Renderer for gauge documents.
///
/// This provides an API for processing gauge documents through parsing,
/// composition and export stages.
///
/// # Examples
///
/// ```rust
/// use gaugesmith::{GaugeRenderer, config::AppConfig};
///
/// let source = r##"{
///     "layers": [
///         { "name": "dial", "operations": [
///             { "type": "circle", "radius": 280, "fill": "#222" }
///         ] }
///     ]
/// }"##;
///
/// let renderer = GaugeRenderer::new(AppConfig::default());
///
/// // Parse source to the semantic model
/// let document = renderer.parse(source).expect("Failed to parse");
/// let layer = document.layers()[0].result().expect("Invalid layer");
///
/// // Render one layer to SVG markup
/// let svg = renderer.render_svg(layer);
/// assert!(svg.contains("<circle"));
/// ```
#[derive(Debug, Default)]
pub struct GaugeRenderer {
    config: AppConfig,
}

impl GaugeRenderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a JSON gauge document into layers.
    ///
    /// # Errors
    ///
    /// Returns `GaugesmithError::Parse` for invalid JSON or a document that is
    /// not shaped like `{ "layers": [...] }`. Problems inside individual
    /// layers are reported on the returned [`LayerEntry`] values.
    pub fn parse(&self, source: &str) -> Result<GaugeDocument, GaugesmithError> {
        info!("Parsing gauge document");

        let elaborate_config = self.config.elaborate_config();
        let document = gaugesmith_parser::parse(source, &elaborate_config)
            .map_err(|err| GaugesmithError::new_parse_error(err, source))?;

        debug!(layers = document.len(), failed = document.failed_count(); "Gauge document parsed");
        trace!(document:?; "Parsed document");

        Ok(document)
    }

    /// Compose a layer into its SVG node tree.
    pub fn compose(&self, layer: &Layer) -> Node {
        export::svg::compose_layer(layer)
    }

    /// Render a layer to SVG markup.
    pub fn render_svg(&self, layer: &Layer) -> String {
        export::svg::to_markup(&self.compose(layer))
    }

    /// Parse `source` and write every valid layer to `output_dir`.
    ///
    /// Layers are independent: a layer that fails to elaborate or to export
    /// is recorded as failed in the report and the remaining layers are
    /// still written.
    ///
    /// # Errors
    ///
    /// Returns `GaugesmithError::Parse` only for document level problems.
    pub fn render_to_dir(
        &self,
        source: &str,
        output_dir: impl AsRef<Path>,
    ) -> Result<RenderReport, GaugesmithError> {
        let document = self.parse(source)?;
        Ok(self.export_document(document, source, output_dir))
    }

    /// Write every valid layer of a parsed document to `output_dir`.
    ///
    /// `source` is the text the document was parsed from; it is attached to
    /// layer parse errors for diagnostics rendering.
    pub fn export_document(
        &self,
        document: GaugeDocument,
        source: &str,
        output_dir: impl AsRef<Path>,
    ) -> RenderReport {
        let exporter = Svg::new(output_dir.as_ref());
        info!(
            layers = document.len(),
            output_dir:? = exporter.output_dir();
            "Rendering gauge document"
        );

        let reports = document
            .into_layers()
            .into_iter()
            .map(|entry| {
                let index = entry.index();
                let name = entry.name().to_string();
                let warnings = entry.warnings().to_vec();
                let outcome = match entry.into_result() {
                    Ok(layer) => self.export_layer(&exporter, &layer),
                    Err(err) => {
                        warn!(layer = name.as_str(), index; "Layer skipped after elaboration errors");
                        LayerOutcome::Failed(GaugesmithError::new_parse_error(err, source))
                    }
                };
                LayerReport::new(index, name, outcome, warnings)
            })
            .collect();

        let report = RenderReport::new(reports);
        info!(
            written = report.total() - report.failed_count(),
            failed = report.failed_count();
            "Gauge document rendered"
        );
        report
    }

    fn export_layer(&self, exporter: &Svg, layer: &Layer) -> LayerOutcome {
        match exporter.export_layer(layer) {
            Ok(path) => {
                info!(layer = layer.name(), path:? = path; "Layer written");
                LayerOutcome::Written(path)
            }
            Err(err) => {
                error!(layer = layer.name(), err:err; "Failed to export layer");
                LayerOutcome::Failed(err.into())
            }
        }
    }
}
