//! CLI logic for the Gaugesmith gauge renderer.
//!
//! This module contains the core CLI logic: loading configuration, rendering
//! every layer of the input document and reporting per-layer diagnostics.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{error, info, warn};

use gaugesmith::{GaugeRenderer, GaugesmithError, RenderReport};

use error_adapter::{diagnostics_to_reportables, render, to_reportables};

/// Run the Gaugesmith CLI application
///
/// This function parses the input document and writes one SVG file per
/// layer into the output directory. Diagnostics of failed layers and
/// warnings of written layers are logged as they are reported.
///
/// # Errors
///
/// Returns `GaugesmithError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Document level parsing errors
/// - [`GaugesmithError::LayersFailed`] if any layer failed; the other
///   layers are still written
pub fn run(args: &Args) -> Result<RenderReport, GaugesmithError> {
    info!(
        input_path = args.input,
        output_dir = args.output_dir;
        "Processing gauge document"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Render every layer using the GaugeRenderer API
    let renderer = GaugeRenderer::new(app_config);
    let report = renderer.render_to_dir(&source, &args.output_dir)?;

    log_layer_diagnostics(&report, &source);

    if let Some(summary) = report.summary_error() {
        return Err(summary);
    }

    info!(
        output_dir = args.output_dir,
        layers = report.total();
        "SVG files exported successfully"
    );

    Ok(report)
}

/// Logs the warnings and failures of every layer, in document order.
fn log_layer_diagnostics(report: &RenderReport, source: &str) {
    for layer in report.layers() {
        for reportable in diagnostics_to_reportables(layer.warnings(), source) {
            warn!("{}", render(&reportable));
        }

        if let Some(err) = layer.error() {
            for reportable in to_reportables(err) {
                let rendered = render(&reportable);
                if reportable.is_warning() {
                    warn!("{rendered}");
                } else {
                    error!(layer = layer.name(); "{rendered}");
                }
            }
        }
    }
}
