//! Export of composed layers.
//!
//! An [`Exporter`] takes an elaborated [`Layer`] and persists it. The
//! built-in implementation is [`svg::Svg`], which writes one standalone SVG
//! file per layer.

pub mod svg;

use std::path::PathBuf;

use gaugesmith_core::semantic::Layer;

/// Persists rendered layers.
pub trait Exporter {
    /// Export one layer, returning the path it was written to.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the layer cannot be rendered or written.
    fn export_layer(&self, layer: &Layer) -> Result<PathBuf, Error>;
}

/// Errors that can occur during layer export.
///
/// This type is converted into [`GaugesmithError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`GaugesmithError::Export`]: crate::GaugesmithError::Export
#[derive(Debug)]
pub enum Error {
    /// A layer that cannot be turned into an output file.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
