//! Error types for Gaugesmith operations.
//!
//! This module provides the main error type [`GaugesmithError`] which wraps
//! the error conditions that can occur while rendering a gauge document.

use std::io;

use thiserror::Error;

use gaugesmith_parser::error::ParseError;

/// The main error type for Gaugesmith operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the document source next to the diagnostics so
/// that callers can render source snippets for labeled errors.
#[derive(Debug, Error)]
pub enum GaugesmithError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),

    #[error("{failed} of {total} layers failed")]
    LayersFailed { failed: usize, total: usize },
}

impl From<crate::export::Error> for GaugesmithError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl GaugesmithError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use gaugesmith_parser::error::Diagnostic;

    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GaugesmithError::LayersFailed {
            failed: 2,
            total: 5,
        };
        assert_eq!(err.to_string(), "2 of 5 layers failed");

        let err = GaugesmithError::new_parse_error(Diagnostic::error("bad").into(), "{}");
        assert_eq!(err.to_string(), "error: bad");
    }
}
