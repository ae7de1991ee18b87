//! Geometric types used to place nodes on the diagram canvas.

use serde::Serialize;

/// A position on the diagram canvas.
///
/// Serializes as `{"x": .., "y": ..}`, the shape arrows.app expects for a
/// node position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Returns `true` if both coordinates are finite.
    ///
    /// JSON has no representation for infinities or NaN, so every point
    /// placed into a model must satisfy this.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
