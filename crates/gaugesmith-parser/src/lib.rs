//! # Gaugesmith Parser
//!
//! Reads gauge documents (JSON) and turns them into validated layers of the
//! semantic model.
//!
//! ## Usage
//!
//! ```
//! # use gaugesmith_parser::{parse, ElaborateConfig, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r##"{
//!         "layers": [
//!             { "name": "dial", "operations": [
//!                 { "type": "circle", "radius": 100, "fill": "#fff" }
//!             ] }
//!         ]
//!     }"##;
//!
//!     let document = parse(source, &ElaborateConfig::default())?;
//!     assert_eq!(document.len(), 1);
//!     Ok(())
//! }
//! ```

mod document;
mod elaborate;
mod elaborate_utils;
pub mod error;
mod parser;
#[cfg(test)]
mod parser_tests;
mod span;

pub use document::{GaugeDocument, LayerEntry};
pub use elaborate::{DEFAULT_CANVAS_EDGE, DEFAULT_LAYER_NAME, ElaborateConfig};
pub use error::ParseError;
pub use span::Span;

use elaborate::Builder;

/// Parse a JSON gauge document.
///
/// The pipeline has two steps:
///
/// 1. **Load** - Read the source as JSON (syntax errors carry a source span)
/// 2. **Elaborate** - Validate each layer into the semantic model
///
/// # Returns
///
/// `Err` only for document-level problems: invalid JSON or a document that
/// is not shaped like `{ "layers": [...] }`. Problems inside a layer are
/// reported on that layer's [`LayerEntry`] and the other layers are still
/// elaborated.
pub fn parse(source: &str, config: &ElaborateConfig) -> Result<GaugeDocument, ParseError> {
    let value = parser::parse_json(source)?;
    Builder::new(config).build(&value)
}
