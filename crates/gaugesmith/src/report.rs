//! Per-layer outcome of a render run.

use std::path::{Path, PathBuf};

use gaugesmith_parser::error::Diagnostic;

use crate::error::GaugesmithError;

/// What happened to one layer.
#[derive(Debug)]
pub enum LayerOutcome {
    /// The layer was written to this file.
    Written(PathBuf),
    /// The layer failed to elaborate or to export.
    Failed(GaugesmithError),
}

/// Outcome and warnings of a single layer.
#[derive(Debug)]
pub struct LayerReport {
    index: usize,
    name: String,
    outcome: LayerOutcome,
    warnings: Vec<Diagnostic>,
}

impl LayerReport {
    pub fn new(
        index: usize,
        name: impl Into<String>,
        outcome: LayerOutcome,
        warnings: Vec<Diagnostic>,
    ) -> Self {
        Self {
            index,
            name: name.into(),
            outcome,
            warnings,
        }
    }

    /// Position of the layer in the document.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn outcome(&self) -> &LayerOutcome {
        &self.outcome
    }

    /// The written file, if the layer succeeded.
    pub fn path(&self) -> Option<&Path> {
        match &self.outcome {
            LayerOutcome::Written(path) => Some(path),
            LayerOutcome::Failed(_) => None,
        }
    }

    /// The failure, if the layer did not succeed.
    pub fn error(&self) -> Option<&GaugesmithError> {
        match &self.outcome {
            LayerOutcome::Written(_) => None,
            LayerOutcome::Failed(err) => Some(err),
        }
    }

    /// Non-fatal diagnostics, such as skipped unknown operations.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }
}

/// Result of rendering a whole document, in document order.
#[derive(Debug, Default)]
pub struct RenderReport {
    layers: Vec<LayerReport>,
}

impl RenderReport {
    pub fn new(layers: Vec<LayerReport>) -> Self {
        Self { layers }
    }

    pub fn layers(&self) -> &[LayerReport] {
        &self.layers
    }

    pub fn total(&self) -> usize {
        self.layers.len()
    }

    pub fn failed_count(&self) -> usize {
        self.layers.iter().filter(|layer| layer.error().is_some()).count()
    }

    /// Returns `true` if every layer was written.
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    /// Paths of the written files, in document order.
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.layers.iter().filter_map(LayerReport::path)
    }

    /// The summary error of a run with failed layers.
    pub fn summary_error(&self) -> Option<GaugesmithError> {
        let failed = self.failed_count();
        (failed > 0).then(|| GaugesmithError::LayersFailed {
            failed,
            total: self.total(),
        })
    }
}
