//! Geometric primitives and angular math for gauge dials.
//!
//! This module provides the geometric types used throughout Gaugesmith for
//! placing primitives on a canvas.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Coordinate`] - An absolute or percentage-of-canvas coordinate
//! - [`degrees_to_radians`] / [`polar_to_cartesian`] - Dial angle conversion
//!
//! # Coordinate System
//!
//! Gaugesmith uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! # Angle Convention
//!
//! Dial angles are measured in degrees with 0° pointing up ("north") and
//! increasing clockwise, which is how instrument dials are usually described:
//!
//! ```text
//!             0°
//!             │
//!   270° ─────┼───── 90°
//!             │
//!            180°
//! ```

use std::{f32::consts::PI, fmt, str::FromStr};

use thiserror::Error;

/// A 2D point representing a position in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use gaugesmith_core::geometry::Point;
/// let p = Point::new(10.0, 20.0);
/// let moved = p.add_point(Point::new(5.0, -5.0));
/// assert_eq!(moved.x(), 15.0);
/// assert_eq!(moved.y(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Euclidean distance between this point and another point
    pub fn distance(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }
}

/// Represents the dimensions of a canvas or primitive
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the center point of a box of this size anchored at the origin.
    ///
    /// ```
    /// # use gaugesmith_core::geometry::{Point, Size};
    /// assert_eq!(Size::new(600.0, 400.0).center(), Point::new(300.0, 200.0));
    /// ```
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Converts a dial angle into radians.
///
/// Dial angles are north-zero and clockwise, so the angle is shifted by 90°
/// before conversion: `radians = (deg − 90) × π / 180`.
pub fn degrees_to_radians(degrees: f32) -> f32 {
    (degrees - 90.0) * PI / 180.0
}

/// Returns the point at `radius` from `center` in the direction of the dial
/// angle `degrees`.
///
/// # Examples
///
/// ```
/// # use gaugesmith_core::geometry::{Point, polar_to_cartesian};
/// let top = polar_to_cartesian(Point::new(100.0, 100.0), 50.0, 0.0);
/// assert!((top.x() - 100.0).abs() < 1e-4);
/// assert!((top.y() - 50.0).abs() < 1e-4);
/// ```
pub fn polar_to_cartesian(center: Point, radius: f32, degrees: f32) -> Point {
    let radians = degrees_to_radians(degrees);
    Point::new(
        center.x() + radius * radians.cos(),
        center.y() + radius * radians.sin(),
    )
}

/// Errors produced while parsing or resolving a [`Coordinate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("invalid coordinate `{0}`: expected a number or a percentage like `50%`")]
    Invalid(String),

    #[error("percentage coordinate `{0}%` needs a total to resolve against")]
    MissingTotal(f32),
}

/// A coordinate value, either absolute canvas units or a percentage of the
/// canvas dimension it is measured along.
///
/// Coordinates are parsed once at ingestion and resolved once at render time
/// against an explicit total (the layer width for `x`, the height for `y`).
///
/// # Examples
///
/// ```
/// # use gaugesmith_core::geometry::Coordinate;
/// let x: Coordinate = "25%".parse().unwrap();
/// assert_eq!(x, Coordinate::Percent(25.0));
/// assert_eq!(x.resolve(600.0), 150.0);
///
/// let y: Coordinate = " 42 ".parse().unwrap();
/// assert_eq!(y.resolve(600.0), 42.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coordinate {
    Absolute(f32),
    Percent(f32),
}

impl Coordinate {
    /// Resolves this coordinate to absolute canvas units.
    pub fn resolve(self, total: f32) -> f32 {
        match self {
            Self::Absolute(value) => value,
            Self::Percent(percent) => percent / 100.0 * total,
        }
    }

    /// Resolves this coordinate when the total may be unknown.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::MissingTotal`] for a percentage without a total.
    pub fn try_resolve(self, total: Option<f32>) -> Result<f32, CoordinateError> {
        match (self, total) {
            (Self::Absolute(value), _) => Ok(value),
            (Self::Percent(_), Some(total)) => Ok(self.resolve(total)),
            (Self::Percent(percent), None) => Err(CoordinateError::MissingTotal(percent)),
        }
    }
}

impl From<f32> for Coordinate {
    fn from(value: f32) -> Self {
        Self::Absolute(value)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || CoordinateError::Invalid(s.to_string());

        let (number, is_percent) = match trimmed.strip_suffix('%') {
            Some(number) => (number.trim_end(), true),
            None => (trimmed, false),
        };

        let value: f32 = number.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }

        Ok(if is_percent {
            Self::Percent(value)
        } else {
            Self::Absolute(value)
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(value) => write!(f, "{value}"),
            Self::Percent(percent) => write!(f, "{percent}%"),
        }
    }
}

/// Parses a textual coordinate and resolves it in one step.
///
/// Plain numbers are returned as-is; `"NN%"` strings need `total`.
///
/// # Errors
///
/// Returns [`CoordinateError`] when the value is not a number or percentage,
/// or when a percentage is given without a total.
pub fn parse_coordinate(value: &str, total: Option<f32>) -> Result<f32, CoordinateError> {
    value.parse::<Coordinate>()?.try_resolve(total)
}
