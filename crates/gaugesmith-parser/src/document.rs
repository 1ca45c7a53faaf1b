//! Parsed documents.

use gaugesmith_core::semantic::Layer;

use crate::error::{Diagnostic, ParseError};

/// The outcome of elaborating one entry of the `layers` array.
///
/// A failed layer does not affect its siblings.
#[derive(Debug, Clone)]
pub struct LayerEntry {
    index: usize,
    name: String,
    result: Result<Layer, ParseError>,
    warnings: Vec<Diagnostic>,
}

impl LayerEntry {
    pub(crate) fn new(
        index: usize,
        name: String,
        result: Result<Layer, ParseError>,
        warnings: Vec<Diagnostic>,
    ) -> Self {
        Self {
            index,
            name,
            result,
            warnings,
        }
    }

    /// Position of the layer in the document, starting at zero.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The declared layer name, or a placeholder if it could not be read.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn result(&self) -> Result<&Layer, &ParseError> {
        self.result.as_ref()
    }

    pub fn into_result(self) -> Result<Layer, ParseError> {
        self.result
    }

    /// Warnings of a layer that elaborated successfully.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }
}

/// An ordered sequence of layers, each already validated or failed.
#[derive(Debug, Clone, Default)]
pub struct GaugeDocument {
    layers: Vec<LayerEntry>,
}

impl GaugeDocument {
    pub(crate) fn new(layers: Vec<LayerEntry>) -> Self {
        Self { layers }
    }

    pub fn layers(&self) -> &[LayerEntry] {
        &self.layers
    }

    pub fn into_layers(self) -> Vec<LayerEntry> {
        self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Number of layers that failed elaboration.
    pub fn failed_count(&self) -> usize {
        self.layers
            .iter()
            .filter(|entry| entry.result.is_err())
            .count()
    }
}
