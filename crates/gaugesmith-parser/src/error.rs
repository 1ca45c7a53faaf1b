//! Error and diagnostic system for the Gaugesmith parser.
//!
//! This module provides:
//! - Error codes grouped into the categories a caller acts on
//! - Labeled spans for syntax errors
//! - Severity levels
//! - A diagnostic collector for accumulating every problem of a layer
//!
//! # Example
//!
//! ```
//! # use gaugesmith_parser::error::{Diagnostic, ErrorCategory, ErrorCode};
//!
//! let diag = Diagnostic::error("missing required field `radius` in `circle` operation")
//!     .with_code(ErrorCode::E100)
//!     .with_help("operation #1 of layer `dial`");
//!
//! assert_eq!(diag.code().map(|code| code.category()), Some(ErrorCategory::MissingField));
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;
pub(crate) use parse_error::Result;

pub use diagnostic::Diagnostic;
pub use error_code::{ErrorCategory, ErrorCode};
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
