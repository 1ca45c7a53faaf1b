//! JSON loading and top-level document shape.

use log::debug;
use serde_json::{Map, Value};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError, Result as DiagnosticResult},
    span::Span,
};

/// Reads `source` as JSON, turning syntax errors into labeled diagnostics.
pub fn parse_json(source: &str) -> Result<Value, ParseError> {
    serde_json::from_str(source).map_err(|err| syntax_error(source, &err).into())
}

/// Returns the root object of a document.
pub fn document_root(value: &Value) -> DiagnosticResult<&Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        Diagnostic::error("the document must be a JSON object")
            .with_code(ErrorCode::E002)
            .with_help("wrap the layers in `{ \"layers\": [...] }`")
    })
}

/// Returns the `layers` array; a document without one has no layers.
pub fn document_layers(root: &Map<String, Value>) -> DiagnosticResult<&[Value]> {
    match root.get("layers") {
        None | Some(Value::Null) => {
            debug!("Document has no `layers` member");
            Ok(&[])
        }
        Some(Value::Array(layers)) => Ok(layers),
        Some(other) => Err(Diagnostic::error(format!(
            "`layers` must be an array, found {}",
            kind_of(other)
        ))
        .with_code(ErrorCode::E002)),
    }
}

/// A short description of a JSON value's type, for messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn syntax_error(source: &str, err: &serde_json::Error) -> Diagnostic {
    let span = Span::at_line_column(source, err.line(), err.column());

    // serde_json appends the position to its message; the label carries it.
    let text = err.to_string();
    let reason = text
        .rsplit_once(" at line ")
        .map_or(text.as_str(), |(reason, _)| reason);

    Diagnostic::error("invalid JSON syntax")
        .with_code(ErrorCode::E001)
        .with_label(span, reason)
}
