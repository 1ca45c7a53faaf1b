//! Field extraction for the elaboration phase.
//!
//! [`Fields`] wraps one JSON object (a layer or an operation) and turns its
//! members into typed values, reporting problems as [`Diagnostic`]s that
//! name the field and the object it belongs to.

use std::str::FromStr;

use serde_json::{Map, Value};

use gaugesmith_core::{color::Color, geometry::Coordinate};

use crate::error::{Diagnostic, ErrorCode, Result as DiagnosticResult};

/// Typed access to the members of a JSON object.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
    context: &'a str,
}

impl<'a> Fields<'a> {
    /// Wraps `map`; `context` names the object in messages, e.g. "`arc` operation".
    pub fn new(map: &'a Map<String, Value>, context: &'a str) -> Self {
        Self { map, context }
    }

    /// Returns a member, treating `null` as absent.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    /// Returns a member or fails with a missing-field diagnostic.
    pub fn required(&self, key: &str) -> DiagnosticResult<&'a Value> {
        self.get(key).ok_or_else(|| {
            Diagnostic::error(format!(
                "missing required field `{key}` in {}",
                self.context
            ))
            .with_code(ErrorCode::E100)
        })
    }

    pub fn number(&self, key: &str) -> DiagnosticResult<f32> {
        self.required(key).and_then(|value| self.to_number(key, value))
    }

    pub fn opt_number(&self, key: &str) -> DiagnosticResult<Option<f32>> {
        self.get(key)
            .map(|value| self.to_number(key, value))
            .transpose()
    }

    pub fn coordinate(&self, key: &str) -> DiagnosticResult<Coordinate> {
        self.required(key)
            .and_then(|value| self.to_coordinate(key, value))
    }

    pub fn opt_coordinate(&self, key: &str) -> DiagnosticResult<Option<Coordinate>> {
        self.get(key)
            .map(|value| self.to_coordinate(key, value))
            .transpose()
    }

    pub fn color(&self, key: &str) -> DiagnosticResult<Color> {
        self.required(key).and_then(|value| self.to_color(key, value))
    }

    pub fn opt_color(&self, key: &str) -> DiagnosticResult<Option<Color>> {
        self.get(key)
            .map(|value| self.to_color(key, value))
            .transpose()
    }

    pub fn opt_string(&self, key: &str) -> DiagnosticResult<Option<&'a str>> {
        self.get(key)
            .map(|value| {
                value
                    .as_str()
                    .ok_or_else(|| self.invalid(key, value, "expected a string"))
            })
            .transpose()
    }

    /// A required display string; numbers are accepted and keep their JSON text.
    pub fn text(&self, key: &str) -> DiagnosticResult<String> {
        self.required(key).and_then(|value| self.to_text(key, value))
    }

    pub fn opt_bool(&self, key: &str) -> DiagnosticResult<Option<bool>> {
        self.get(key)
            .map(|value| {
                value
                    .as_bool()
                    .ok_or_else(|| self.invalid(key, value, "expected `true` or `false`"))
            })
            .transpose()
    }

    /// A required array of display strings.
    pub fn texts(&self, key: &str) -> DiagnosticResult<Vec<String>> {
        let value = self.required(key)?;
        let items = value
            .as_array()
            .ok_or_else(|| self.invalid(key, value, "expected an array of strings or numbers"))?;

        items.iter().map(|item| self.to_text(key, item)).collect()
    }

    fn to_number(&self, key: &str, value: &Value) -> DiagnosticResult<f32> {
        value
            .as_f64()
            .map(|number| number as f32)
            .filter(|number| number.is_finite())
            .ok_or_else(|| self.invalid(key, value, "expected a finite number"))
    }

    fn to_coordinate(&self, key: &str, value: &Value) -> DiagnosticResult<Coordinate> {
        let coordinate = match value {
            Value::Number(_) => self.to_number(key, value).map(Coordinate::Absolute).ok(),
            Value::String(text) => Coordinate::from_str(text).ok(),
            _ => None,
        };

        coordinate.ok_or_else(|| {
            Diagnostic::error(format!(
                "invalid coordinate {value} for `{key}` in {}",
                self.context
            ))
            .with_code(ErrorCode::E102)
            .with_help("use a number or a percentage string such as \"50%\"")
        })
    }

    fn to_color(&self, key: &str, value: &Value) -> DiagnosticResult<Color> {
        let Some(text) = value.as_str() else {
            return Err(self.invalid(key, value, "expected a color string"));
        };

        Color::new(text).map_err(|err| {
            Diagnostic::error(format!(
                "invalid color `{text}` for `{key}` in {}",
                self.context
            ))
            .with_code(ErrorCode::E103)
            .with_help(err)
        })
    }

    fn to_text(&self, key: &str, value: &Value) -> DiagnosticResult<String> {
        match value {
            Value::String(text) => Ok(text.clone()),
            Value::Number(number) => Ok(number.to_string()),
            _ => Err(self.invalid(key, value, "expected a string or a number")),
        }
    }

    /// Builds an invalid-value diagnostic for `key`.
    pub fn invalid(&self, key: &str, value: &Value, expectation: &str) -> Diagnostic {
        Diagnostic::error(format!(
            "invalid value {value} for `{key}` in {}",
            self.context
        ))
        .with_code(ErrorCode::E101)
        .with_help(expectation.to_string())
    }
}
