//! Error codes for the Gaugesmith diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Document errors (syntax and top-level structure)
//! - `E1xx` - Field errors (missing or malformed values)
//! - `E2xx` - Validation errors (values that are well-formed but unusable)
//! - `W3xx` - Warnings (the document still renders)

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E0xx)
    // =========================================================================
    /// Invalid JSON syntax.
    ///
    /// The input could not be read as JSON at all.
    E001,

    /// Invalid document structure.
    ///
    /// The JSON is well-formed but does not have the expected shape, for
    /// example `layers` is not an array.
    E002,

    // =========================================================================
    // Field Errors (E1xx)
    // =========================================================================
    /// Missing required field.
    ///
    /// An operation lacks a field its kind requires.
    E100,

    /// Invalid field value.
    ///
    /// A field has the wrong JSON type or an unusable value.
    E101,

    /// Invalid coordinate.
    ///
    /// A coordinate is neither a number nor a `"NN"` / `"NN%"` string.
    E102,

    /// Invalid color.
    ///
    /// A color string is not a CSS color or SVG paint keyword.
    E103,

    // =========================================================================
    // Validation Errors (E2xx)
    // =========================================================================
    /// Non-positive tick gap.
    ///
    /// `degreesGap` on gauge ticks must be greater than zero.
    E200,

    /// Arc thickness exceeds radius.
    ///
    /// `innerThickness` larger than `radius` would give a negative inner radius.
    E201,

    /// Non-positive canvas dimension.
    ///
    /// Layer `width` and `height` must be greater than zero.
    E202,

    // =========================================================================
    // Warnings (W3xx)
    // =========================================================================
    /// Unknown operation type.
    ///
    /// The operation is skipped and the layer still renders.
    W300,
}

/// The broad class of problem an [`ErrorCode`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed or structurally invalid document.
    Config,
    /// An operation lacks a required key.
    MissingField,
    /// A coordinate value could not be parsed or resolved.
    InvalidCoordinate,
    /// A field value is present but not acceptable.
    InvalidValue,
    /// Unrecognized operation tag, non-fatal.
    UnknownOperation,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::W300 => "W300",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "invalid JSON syntax",
            ErrorCode::E002 => "invalid document structure",
            ErrorCode::E100 => "missing required field",
            ErrorCode::E101 => "invalid field value",
            ErrorCode::E102 => "invalid coordinate",
            ErrorCode::E103 => "invalid color",
            ErrorCode::E200 => "invalid tick gap",
            ErrorCode::E201 => "arc thickness exceeds radius",
            ErrorCode::E202 => "non-positive canvas dimension",
            ErrorCode::W300 => "unknown operation type",
        }
    }

    /// Returns the category this code reports.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::E001 | ErrorCode::E002 => ErrorCategory::Config,
            ErrorCode::E100 => ErrorCategory::MissingField,
            ErrorCode::E102 => ErrorCategory::InvalidCoordinate,
            ErrorCode::E101
            | ErrorCode::E103
            | ErrorCode::E200
            | ErrorCode::E201
            | ErrorCode::E202 => ErrorCategory::InvalidValue,
            ErrorCode::W300 => ErrorCategory::UnknownOperation,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
