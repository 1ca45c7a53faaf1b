//! Severity levels for diagnostics.

use std::fmt;

/// How a diagnostic affects the layer it belongs to.
///
/// An [`Severity::Error`] fails the layer; a [`Severity::Warning`] is
/// reported but the layer still renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The layer cannot be rendered.
    Error,

    /// Something was ignored, such as an unknown operation.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
