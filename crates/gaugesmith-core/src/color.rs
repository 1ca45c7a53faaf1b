//! Color handling for gauge primitives
//!
//! This module provides the [`Color`] type. Colors are validated with the
//! `color` crate's CSS parser but keep the exact text the author wrote, so
//! `#fff` stays `#fff` in the generated SVG.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// SVG paint keywords that are valid fills but are not CSS colors.
const PAINT_KEYWORDS: [&str; 3] = ["none", "transparent", "currentColor"];

/// A validated SVG paint value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    value: String,
}

impl Color {
    /// Create a new `Color` from a string
    /// This accepts CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red",
    /// and the SVG paint keywords "none", "transparent" and "currentColor".
    ///
    /// # Examples
    ///
    /// ```
    /// use gaugesmith_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// assert_eq!(red.as_str(), "#ff0000");
    /// assert!(Color::new("transparent").is_ok());
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        let trimmed = color_str.trim();

        if PAINT_KEYWORDS
            .iter()
            .any(|keyword| keyword.eq_ignore_ascii_case(trimmed))
        {
            return Ok(Self {
                value: trimmed.to_string(),
            });
        }

        match DynamicColor::from_str(trimmed) {
            Ok(_) => Ok(Self {
                value: trimmed.to_string(),
            }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// The fully transparent paint, used as the default fill of closed shapes.
    pub fn transparent() -> Self {
        Self {
            value: String::from("transparent"),
        }
    }

    /// The `none` paint keyword.
    pub fn none() -> Self {
        Self {
            value: String::from("none"),
        }
    }

    /// Opaque white, the default for dial markings and labels.
    pub fn white() -> Self {
        Self {
            value: String::from("white"),
        }
    }

    /// Returns the color text as written in the source document.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.as_str())
    }
}
